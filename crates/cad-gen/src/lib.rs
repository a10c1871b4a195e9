//! `cad-gen` — the call-generation pipeline.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`attempt`]   | `Attempt`, `RetryReason` — failure as a value       |
//! | [`config`]    | `GeneratorConfig`, `CallTimerRange`                 |
//! | [`generator`] | `CallGenerator`                                     |
//!
//! # Generation contract
//!
//! One call to [`CallGenerator::generate_call`] makes up to
//! `max_location_attempts` attempts at the zone → crime → scenario → location
//! pipeline.  Every per-step failure — an empty map, a crime kind with no
//! templates, a zone that can't place the scenario, a provider that errors —
//! becomes a [`RetryReason`] and another trip around the loop, never a panic
//! and never an error to the caller.  Exhausting the budget returns `None`:
//! "no call this tick" is a normal outcome, invisible to the player.

pub mod attempt;
pub mod config;
pub mod generator;

#[cfg(test)]
mod tests;

pub use attempt::{Attempt, RetryReason};
pub use config::{CallTimerRange, GeneratorConfig};
pub use generator::CallGenerator;
