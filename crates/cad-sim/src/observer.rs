//! Engine observer trait for progress reporting and data collection.

use cad_core::Tick;
use cad_dispatch::PriorityCall;

/// Callbacks invoked by [`Engine::tick`][crate::Engine::tick] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — call logger
///
/// ```rust,ignore
/// struct CallLogger;
///
/// impl EngineObserver for CallLogger {
///     fn on_call_generated(&mut self, tick: Tick, call: &PriorityCall) {
///         println!("{tick}: new {} call {}", call.priority, call.id);
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a generated call has been enqueued.  The call is already
    /// `Waiting` and visible through the dispatch queue.
    fn on_call_generated(&mut self, _tick: Tick, _call: &PriorityCall) {}

    /// Called after an ambient-event sweep that removed at least one entry.
    fn on_events_swept(&mut self, _tick: Tick, _removed: usize) {}

    /// Called at the end of each tick.  `waiting` is the number of calls
    /// currently awaiting dispatch.
    fn on_tick_end(&mut self, _tick: Tick, _waiting: usize) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to call
/// `tick` but don't want progress callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
