//! Dispatch priority and response-urgency enums.
//!
//! Shared between the world model (scenario templates carry a priority and a
//! response code) and the dispatch queue (calls are ordered by priority), so
//! they live here rather than in either crate.

use std::fmt;

// ── CallPriority ──────────────────────────────────────────────────────────────

/// How urgently a call must be serviced.  Lower numeric rank = more urgent;
/// the derived `Ord` therefore sorts the most urgent calls first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallPriority {
    /// Life-threatening or in-progress — always serviced before anything else.
    Immediate = 1,
    /// Recent or escalating — serviced before routine work.
    Urgent = 2,
    /// Cold reports and nuisance calls.
    Routine = 3,
}

impl CallPriority {
    /// The numeric rank (1 = most urgent).
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CallPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallPriority::Immediate => "immediate",
            CallPriority::Urgent => "urgent",
            CallPriority::Routine => "routine",
        };
        f.write_str(s)
    }
}

// ── ResponseCode ──────────────────────────────────────────────────────────────

/// How a responding unit should drive to the scene.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseCode {
    /// Normal traffic, no warning equipment.
    Code1,
    /// Expedited, lights only.
    Code2,
    /// Emergency response, lights and siren.
    Code3,
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseCode::Code1 => "code 1",
            ResponseCode::Code2 => "code 2",
            ResponseCode::Code3 => "code 3",
        };
        f.write_str(s)
    }
}
