//! The callout lifecycle boundary contract.

use cad_dispatch::PriorityCall;

/// Lifecycle methods a scripted callout exposes to its host framework.
///
/// This is a boundary contract only: the presentation layer that renders
/// callouts (UI, audio, scripted scenes) implements and drives these methods.
/// Nothing in this engine ever invokes them — they are declared here so the
/// two sides agree on the seam.
pub trait CalloutHooks {
    /// The call has been offered to the player/controller.
    fn on_offered(&mut self, call: &PriorityCall);

    /// The offer was accepted and the callout is running.
    fn on_accepted(&mut self, call: &PriorityCall);

    /// One host frame while the callout is active.
    fn on_tick(&mut self, call: &PriorityCall);

    /// The callout ended — completed or cancelled.
    fn on_end(&mut self, call: &PriorityCall);
}
