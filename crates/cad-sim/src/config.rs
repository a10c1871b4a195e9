//! Engine configuration.

use cad_gen::GeneratorConfig;

/// Top-level engine configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to [`EngineBuilder`][crate::EngineBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Master RNG seed.  `None` seeds from OS entropy (the production path);
    /// a fixed seed reproduces every selection the engine makes.
    pub seed: Option<u64>,

    /// How many real seconds one tick represents.  Default: 1.
    pub tick_duration_secs: u32,

    /// Run the ambient-event sweep every N ticks.  Default: 1 (every tick);
    /// 0 disables the sweep entirely — the host must then drive
    /// `events_mut().process()` itself.
    pub sweep_interval_ticks: u64,

    /// Completed calls retained for diagnostics.
    pub history_capacity: usize,

    /// Generation tunables (retry budget, call timer).
    pub generator: GeneratorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_duration_secs: 1,
            sweep_interval_ticks: 1,
            history_capacity: cad_dispatch::queue::DEFAULT_HISTORY_CAPACITY,
            generator: GeneratorConfig::default(),
        }
    }
}
