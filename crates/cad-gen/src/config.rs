//! Generator configuration.

use cad_core::SimRng;

// ── CallTimerRange ────────────────────────────────────────────────────────────

/// Bounds, in simulated seconds, on the pause between generated calls.
///
/// The engine samples a fresh delay from this range after every generation
/// attempt, successful or not.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallTimerRange {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl CallTimerRange {
    pub fn new(min_secs: u32, max_secs: u32) -> Self {
        Self { min_secs, max_secs }
    }

    /// Sample a delay uniformly from the range (inclusive on both ends).
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        if self.min_secs >= self.max_secs {
            return self.min_secs;
        }
        rng.gen_range(self.min_secs..=self.max_secs)
    }
}

impl Default for CallTimerRange {
    /// 2–10 simulated minutes between calls.
    fn default() -> Self {
        Self::new(120, 600)
    }
}

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Tunables for the generation pipeline.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Attempt budget per `generate_call` — the sole bounding mechanism;
    /// there is no timeout.  Must be at least 1.
    pub max_location_attempts: u32,

    /// Pause between generated calls.
    pub call_timer_range: CallTimerRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_location_attempts: 10,
            call_timer_range: CallTimerRange::default(),
        }
    }
}
