//! `cad-core` — foundational types for the ride-along dispatch engine.
//!
//! This crate is a dependency of every other `cad-*` crate.  It intentionally
//! has no `cad-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`ids`]      | `ZoneId`, `CallId`, `EventId`, `UnitId`       |
//! | [`seq`]      | `Sequence` — monotonic identity allocator     |
//! | [`rng`]      | `SimRng` (seeded, reproducible randomness)    |
//! | [`tick`]     | `Tick`, `SimClock`                            |
//! | [`priority`] | `CallPriority`, `ResponseCode`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod priority;
pub mod rng;
pub mod seq;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CallId, EventId, UnitId, ZoneId};
pub use priority::{CallPriority, ResponseCode};
pub use rng::SimRng;
pub use seq::Sequence;
pub use tick::{SimClock, Tick};
