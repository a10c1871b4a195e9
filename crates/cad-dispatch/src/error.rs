use thiserror::Error;

use cad_core::CallId;

use crate::CallStatus;

/// Dispatcher contract violations.  These indicate bugs in the calling
/// assignment logic and are surfaced as typed failures, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("call {id} cannot transition {from} -> {to}")]
    InvalidTransition {
        id:   CallId,
        from: CallStatus,
        to:   CallStatus,
    },

    #[error("call {0} is not tracked by the dispatcher")]
    UnknownCall(CallId),

    #[error("call {0} is already tracked by the dispatcher")]
    DuplicateCall(CallId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
