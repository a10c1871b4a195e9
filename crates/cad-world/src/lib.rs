//! `cad-world` — zones, scenario templates, and weighted spawn pools.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`pool`]     | `WeightedPool<T>` — weighted sampling, failure as a value |
//! | [`scenario`] | `CrimeKind`, `LocationKind`, `ScenarioInfo`, `ScenarioPool` |
//! | [`zone`]     | `WorldPos`, `WorldLocation`, `Zone`                       |
//! | [`provider`] | `ZoneProvider` trait, `WorldModel`, `ProviderError`       |
//! | [`loader`]   | `load_scenarios_csv`, `load_scenarios_reader`             |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                            |
//!
//! # Ownership model
//!
//! Zones are owned and mutated by the host's world model; this crate reads
//! them.  Scenario templates are immutable once loaded.  All selection draws
//! from a caller-supplied [`SimRng`][cad_core::SimRng] so a fixed seed gives a
//! fixed selection sequence.

pub mod error;
pub mod loader;
pub mod pool;
pub mod provider;
pub mod scenario;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use loader::{load_scenarios_csv, load_scenarios_reader};
pub use pool::WeightedPool;
pub use provider::{ProviderError, WorldModel, ZoneProvider};
pub use scenario::{CrimeKind, LocationKind, ScenarioInfo, ScenarioPool};
pub use zone::{WorldLocation, WorldPos, Zone};
