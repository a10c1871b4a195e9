//! Fluent builder for constructing an [`Engine`].

use std::marker::PhantomData;

use cad_core::{SimClock, SimRng, Tick};
use cad_dispatch::CallQueue;
use cad_events::AmbientEventRegistry;
use cad_gen::CallGenerator;
use cad_world::{ScenarioPool, ZoneProvider};

use crate::{Engine, EngineConfig, EngineError, EngineResult};

/// Fluent builder for [`Engine<P, E>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — seed, tick duration, sweep interval, generator knobs
/// - `P: ZoneProvider` — the zone source (the host world model)
/// - [`ScenarioPool`] — loaded scenario templates
///
/// The ambient-event payload type `E` is whatever the host registers;
/// nothing is required of it.
///
/// # Example
///
/// ```rust,ignore
/// let scenarios = load_scenarios_csv(Path::new("scenarios.csv"))?;
/// let mut engine: Engine<WorldModel, MyEvent> =
///     EngineBuilder::new(EngineConfig::default(), world, scenarios).build()?;
/// engine.tick(&mut NoopObserver);
/// ```
pub struct EngineBuilder<P: ZoneProvider, E> {
    config: EngineConfig,
    provider: P,
    scenarios: ScenarioPool,
    _events: PhantomData<E>,
}

impl<P: ZoneProvider, E> EngineBuilder<P, E> {
    pub fn new(config: EngineConfig, provider: P, scenarios: ScenarioPool) -> Self {
        Self {
            config,
            provider,
            scenarios,
            _events: PhantomData,
        }
    }

    /// Validate the configuration and assemble a ready-to-tick [`Engine`].
    ///
    /// The call timer starts elapsed, so the first tick attempts a
    /// generation immediately; subsequent firings follow the sampled delay.
    pub fn build(self) -> EngineResult<Engine<P, E>> {
        let tick_duration_secs = self.config.tick_duration_secs;
        let generator_cfg = self.config.generator;
        let history_capacity = self.config.history_capacity;
        let seed = self.config.seed;

        if tick_duration_secs == 0 {
            return Err(EngineError::Config("tick_duration_secs must be at least 1".into()));
        }
        if generator_cfg.max_location_attempts == 0 {
            return Err(EngineError::Config("max_location_attempts must be at least 1".into()));
        }
        let timer = generator_cfg.call_timer_range;
        if timer.min_secs > timer.max_secs {
            return Err(EngineError::Config(format!(
                "call timer range is inverted ({}..{})",
                timer.min_secs, timer.max_secs
            )));
        }

        let rng = match seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };

        Ok(Engine {
            config: self.config,
            clock: SimClock::new(tick_duration_secs),
            rng,
            provider: self.provider,
            generator: CallGenerator::new(self.scenarios, generator_cfg),
            queue: CallQueue::with_history_capacity(history_capacity),
            events: AmbientEventRegistry::new(),
            next_call_tick: Tick::ZERO,
        })
    }
}
