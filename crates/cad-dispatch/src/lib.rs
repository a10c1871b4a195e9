//! `cad-dispatch` — live call records and the priority dispatch queue.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`call`]  | `PriorityCall`, `CallStatus` state machine           |
//! | [`queue`] | `CallQueue` — priority + FIFO ordering, transitions  |
//! | [`error`] | `DispatchError`, `DispatchResult<T>`                 |
//!
//! # Status machine
//!
//! ```text
//! Created → Waiting → Dispatched → OnScene → Completed
//!     \________\___________\___________\────────↑
//!                  cancel: any state → Completed
//! ```
//!
//! Transitions are strictly forward and guarded: an out-of-order request is a
//! caller bug and comes back as [`DispatchError::InvalidTransition`] rather
//! than being swallowed.

pub mod call;
pub mod error;
pub mod queue;


pub use call::{CallStatus, PriorityCall};
pub use error::{DispatchError, DispatchResult};
pub use queue::CallQueue;
