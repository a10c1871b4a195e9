//! The `Engine` struct and its tick loop.

use tracing::error;

use cad_core::{CallId, SimClock, SimRng, Tick, UnitId};
use cad_dispatch::CallQueue;
use cad_events::AmbientEventRegistry;
use cad_gen::CallGenerator;
use cad_world::ZoneProvider;

use crate::{EngineConfig, EngineObserver, EngineResult};

/// The ride-along engine.
///
/// `Engine<P, E>` owns the clock, RNG, call generator, dispatch queue, and
/// ambient-event registry, and drives them from a single cooperative tick:
///
/// 1. **Call timer**: when the sampled inter-call delay has elapsed, run one
///    bounded-retry generation; a produced call is enqueued (`Created →
///    Waiting`) and reported to the observer.  A tick that produces no call
///    is normal and invisible.
/// 2. **Ambient sweep**: every `sweep_interval_ticks`, reap disposed events.
///
/// External assignment logic mutates call state through the dispatch
/// coordinator — either [`calls_mut`][Self::calls_mut] or the transition
/// passthroughs below — and never by touching calls directly.
///
/// Single-threaded by contract: a host that ticks from more than one thread
/// must serialize access to the whole engine, or the id-uniqueness
/// invariants do not hold.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<P: ZoneProvider, E> {
    pub(crate) config: EngineConfig,
    pub(crate) clock: SimClock,
    pub(crate) rng: SimRng,
    pub(crate) provider: P,
    pub(crate) generator: CallGenerator,
    pub(crate) queue: CallQueue,
    pub(crate) events: AmbientEventRegistry<E>,
    /// Tick at which the call timer next fires.
    pub(crate) next_call_tick: Tick,
}

impl<P: ZoneProvider, E> Engine<P, E> {
    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one cooperative tick.  Never blocks, never panics on provider or
    /// generation failure.
    pub fn tick<O: EngineObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        if now >= self.next_call_tick {
            self.run_call_timer(now, observer);
        }

        if self.config.sweep_interval_ticks > 0
            && now.0 % self.config.sweep_interval_ticks == 0
        {
            let removed = self.events.process();
            if removed > 0 {
                observer.on_events_swept(now, removed);
            }
        }

        observer.on_tick_end(now, self.queue.waiting_count());
        self.clock.advance();
    }

    /// Run exactly `n` ticks.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    fn run_call_timer<O: EngineObserver>(&mut self, now: Tick, observer: &mut O) {
        if let Some(call) = self.generator.generate_call(&mut self.provider, &mut self.rng) {
            let id = call.id;
            match self.queue.enqueue(call) {
                Ok(()) => {
                    if let Some(enqueued) = self.queue.get(id) {
                        observer.on_call_generated(now, enqueued);
                    }
                }
                // The generator issues fresh ids in Created state, so this
                // only fires on a broken generator — worth a loud log, but
                // never a crashed tick.
                Err(e) => error!(error = %e, "generated call rejected by dispatch queue"),
            }
        }
        self.schedule_next_call(now);
    }

    /// Sample the next inter-call delay.  Runs after every timer firing,
    /// whether or not a call was produced.
    fn schedule_next_call(&mut self, now: Tick) {
        let secs = self.config.generator.call_timer_range.sample(&mut self.rng);
        let ticks = self.clock.ticks_for_secs(secs as u64).max(1);
        self.next_call_tick = now + ticks;
    }

    // ── Dispatch passthroughs ─────────────────────────────────────────────

    /// `Waiting → Dispatched`, recording the assigned unit.
    pub fn dispatch(&mut self, id: CallId, unit: UnitId) -> EngineResult<()> {
        Ok(self.queue.mark_dispatched(id, unit)?)
    }

    /// `Dispatched → OnScene`.
    pub fn on_scene(&mut self, id: CallId) -> EngineResult<()> {
        Ok(self.queue.mark_on_scene(id)?)
    }

    /// `OnScene → Completed`.
    pub fn complete(&mut self, id: CallId) -> EngineResult<()> {
        Ok(self.queue.mark_completed(id)?)
    }

    /// Close a call from any non-terminal state.
    pub fn cancel(&mut self, id: CallId) -> EngineResult<()> {
        Ok(self.queue.cancel(id)?)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn calls(&self) -> &CallQueue {
        &self.queue
    }

    pub fn calls_mut(&mut self) -> &mut CallQueue {
        &mut self.queue
    }

    pub fn events(&self) -> &AmbientEventRegistry<E> {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut AmbientEventRegistry<E> {
        &mut self.events
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
