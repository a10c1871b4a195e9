//! `cad-sim` — the engine's cooperative tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`engine`]   | `Engine` and its tick loop                     |
//! | [`builder`]  | `EngineBuilder`                                |
//! | [`config`]   | `EngineConfig`                                 |
//! | [`observer`] | `EngineObserver`, `NoopObserver`               |
//! | [`hooks`]    | `CalloutHooks` boundary contract               |
//! | [`error`]    | `EngineError`, `EngineResult<T>`               |
//!
//! # Tick model
//!
//! The host game loop calls [`Engine::tick`] once per scheduling step.  A
//! tick never blocks: it runs the call timer (generating and enqueueing at
//! most one call), runs the ambient-event sweep on its interval, fires
//! observer callbacks, and returns.  Long-running work — officer units out
//! on calls — happens in externally scheduled fibers; this engine only
//! records the status transitions those report back through the dispatch
//! coordinator.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod observer;


pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use hooks::CalloutHooks;
pub use observer::{EngineObserver, NoopObserver};
