//! The per-attempt result type.
//!
//! Generation must never crash the host's tick loop, so every step failure
//! is an ordinary value the outer loop interprets — there is no catch-all
//! and nothing to propagate.

use std::fmt;

use cad_dispatch::PriorityCall;
use cad_world::{CrimeKind, LocationKind};

/// Why a single generation attempt produced no call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RetryReason {
    /// The provider had no eligible zone this attempt.
    NoZone,
    /// The provider failed internally (logged at error level by the caller).
    ProviderFailure,
    /// The selected zone has an empty or unselectable crime profile.
    NoCrime,
    /// No scenario template exists for the selected crime kind.
    NoScenario(CrimeKind),
    /// The zone could not place the scenario's required location kind.
    NoLocation(LocationKind),
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryReason::NoZone => f.write_str("no zone available"),
            RetryReason::ProviderFailure => f.write_str("zone provider failure"),
            RetryReason::NoCrime => f.write_str("zone produced no crime type"),
            RetryReason::NoScenario(kind) => write!(f, "no scenario for crime {kind}"),
            RetryReason::NoLocation(kind) => write!(f, "zone has no {kind} placement"),
        }
    }
}

/// Outcome of one generation attempt.
#[derive(Debug)]
pub enum Attempt {
    /// A fully resolved call, id already issued.
    Spawned(PriorityCall),
    /// Try again (up to the configured budget).
    Retry(RetryReason),
}
