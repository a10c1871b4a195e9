//! Call records and the call status machine.

use std::fmt;

use cad_core::{CallId, CallPriority, ResponseCode, UnitId, ZoneId};
use cad_world::{ScenarioInfo, WorldLocation};

use crate::{DispatchError, DispatchResult};

// ── CallStatus ────────────────────────────────────────────────────────────────

/// Lifecycle state of a call.  `Created` is initial, `Completed` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallStatus {
    /// Constructed by the generator, not yet enqueued.
    Created,
    /// In the dispatch queue, awaiting a unit.
    Waiting,
    /// A unit is en route.
    Dispatched,
    /// The assigned unit has arrived.
    OnScene,
    /// Closed — either the full lifecycle ran, or the call was cancelled.
    Completed,
}

impl CallStatus {
    /// `true` if `next` is a legal successor of `self`.
    ///
    /// Legal moves are the single forward step, plus the cancel edge: any
    /// non-terminal state may close directly to `Completed`.
    pub fn can_advance_to(self, next: CallStatus) -> bool {
        use CallStatus::*;
        match (self, next) {
            (Completed, _) => false,
            (Created, Waiting) | (Waiting, Dispatched) | (Dispatched, OnScene) => true,
            (_, Completed) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == CallStatus::Completed
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallStatus::Created => "created",
            CallStatus::Waiting => "waiting",
            CallStatus::Dispatched => "dispatched",
            CallStatus::OnScene => "on_scene",
            CallStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

// ── PriorityCall ──────────────────────────────────────────────────────────────

/// A generated incident needing dispatch.
///
/// Constructed exclusively by the call generator with a freshly issued
/// [`CallId`]; after that, only the [`CallQueue`][crate::CallQueue]'s guarded
/// transition operations mutate it.  Identity, origin, scenario, and location
/// never change for the life of the call.
#[derive(Clone, Debug)]
pub struct PriorityCall {
    pub id: CallId,
    /// The zone the call was generated in.
    pub zone: ZoneId,
    /// The resolved scenario template.
    pub scenario: ScenarioInfo,
    /// The concrete spawn placement.
    pub location: WorldLocation,
    pub priority: CallPriority,
    pub response: ResponseCode,
    status: CallStatus,
    assigned_unit: Option<UnitId>,
}

impl PriorityCall {
    /// Build a new call in the `Created` state.  Priority and response code
    /// come from the scenario template.
    pub fn new(id: CallId, zone: ZoneId, scenario: ScenarioInfo, location: WorldLocation) -> Self {
        Self {
            id,
            zone,
            priority: scenario.priority,
            response: scenario.response,
            scenario,
            location,
            status: CallStatus::Created,
            assigned_unit: None,
        }
    }

    pub fn status(&self) -> CallStatus {
        self.status
    }

    /// The unit working this call, once dispatched.
    pub fn assigned_unit(&self) -> Option<UnitId> {
        self.assigned_unit
    }

    /// Guarded state change.  Fails with `InvalidTransition` when `next` is
    /// not a legal successor of the current status.
    pub(crate) fn transition(&mut self, next: CallStatus) -> DispatchResult<()> {
        if !self.status.can_advance_to(next) {
            return Err(DispatchError::InvalidTransition {
                id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub(crate) fn assign_unit(&mut self, unit: UnitId) {
        self.assigned_unit = Some(unit);
    }
}
