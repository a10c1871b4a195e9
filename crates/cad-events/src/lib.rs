//! `cad-events` — lifecycle registry for short-lived ambient world events.
//!
//! Ambient events (a street brawl, a broken-down vehicle, a wandering ped)
//! are created by external code, live for a while, and must be cleaned up.
//! The registry is the authority on which events are still tracked: it issues
//! their ids, records the one-way `Active → Disposed` transition, and removes
//! disposed entries in a periodic sweep — never synchronously on dispose.

pub mod registry;

#[cfg(test)]
mod tests;

pub use registry::AmbientEventRegistry;
