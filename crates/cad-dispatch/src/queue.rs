//! `CallQueue` — the dispatch coordinator.
//!
//! Owns every live call, indexed two ways:
//!
//! - by [`CallId`] for O(1) transition lookups;
//! - by `(CallPriority, enqueue sequence)` in a `BTreeMap` whose iteration
//!   order *is* the dispatch order — most urgent priority first, FIFO within
//!   a priority.  Only `Waiting` calls appear in this index.
//!
//! Completed calls leave the live set and land in a bounded history ring for
//! diagnostics; the oldest entry is evicted when the ring is full.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashMap;

use cad_core::{CallId, CallPriority, Sequence, UnitId};

use crate::{CallStatus, DispatchError, DispatchResult, PriorityCall};

/// Default number of completed calls retained for diagnostics.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Priority-ordered queue of live calls with guarded status transitions.
pub struct CallQueue {
    /// All live (non-terminal) calls, keyed by id.
    calls: FxHashMap<CallId, PriorityCall>,
    /// Waiting calls in dispatch order.
    waiting: BTreeMap<(CallPriority, u64), CallId>,
    /// Each waiting call's key in `waiting`, for removal on transition.
    order_keys: FxHashMap<CallId, (CallPriority, u64)>,
    /// FIFO tiebreaker within a priority band.
    enqueue_seq: Sequence,
    /// Recently completed calls, oldest first.
    history: VecDeque<PriorityCall>,
    history_capacity: usize,
}

impl CallQueue {
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A queue retaining at most `capacity` completed calls.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            calls: FxHashMap::default(),
            waiting: BTreeMap::new(),
            order_keys: FxHashMap::default(),
            enqueue_seq: Sequence::new(0),
            history: VecDeque::new(),
            history_capacity: capacity,
        }
    }

    // ── Intake ────────────────────────────────────────────────────────────

    /// Accept a freshly generated call (`Created → Waiting`) and index it
    /// for dispatch.
    pub fn enqueue(&mut self, mut call: PriorityCall) -> DispatchResult<()> {
        if self.calls.contains_key(&call.id) {
            return Err(DispatchError::DuplicateCall(call.id));
        }
        call.transition(CallStatus::Waiting)?;

        let key = (call.priority, self.enqueue_seq.next());
        self.waiting.insert(key, call.id);
        self.order_keys.insert(call.id, key);
        self.calls.insert(call.id, call);
        Ok(())
    }

    // ── Dispatch order ────────────────────────────────────────────────────

    /// The most urgent waiting call (FIFO within a priority), if any.
    pub fn peek_next(&self) -> Option<&PriorityCall> {
        let id = self.waiting.values().next()?;
        self.calls.get(id)
    }

    /// Waiting calls in dispatch order.
    pub fn iter_waiting(&self) -> impl Iterator<Item = &PriorityCall> {
        self.waiting.values().filter_map(|id| self.calls.get(id))
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Waiting → Dispatched`; records the assigned unit on the call.
    pub fn mark_dispatched(&mut self, id: CallId, unit: UnitId) -> DispatchResult<()> {
        let call = self.calls.get_mut(&id).ok_or(DispatchError::UnknownCall(id))?;
        call.transition(CallStatus::Dispatched)?;
        call.assign_unit(unit);
        self.remove_waiting_entry(id);
        Ok(())
    }

    /// `Dispatched → OnScene`.
    pub fn mark_on_scene(&mut self, id: CallId) -> DispatchResult<()> {
        let call = self.calls.get_mut(&id).ok_or(DispatchError::UnknownCall(id))?;
        call.transition(CallStatus::OnScene)
    }

    /// `OnScene → Completed`; the call leaves the live set into history.
    pub fn mark_completed(&mut self, id: CallId) -> DispatchResult<()> {
        self.close(id, CallStatus::OnScene)
    }

    /// Cancel: close a call from any non-terminal state ("call closed
    /// without full lifecycle").
    pub fn cancel(&mut self, id: CallId) -> DispatchResult<()> {
        let call = self.calls.get_mut(&id).ok_or(DispatchError::UnknownCall(id))?;
        call.transition(CallStatus::Completed)?;
        self.remove_waiting_entry(id);
        self.retire(id);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: CallId) -> Option<&PriorityCall> {
        self.calls.get(&id)
    }

    /// Number of live (non-terminal) calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of calls awaiting dispatch.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Live calls currently in `status`.
    pub fn count_with_status(&self, status: CallStatus) -> usize {
        self.calls.values().filter(|c| c.status() == status).count()
    }

    /// Completed calls retained for diagnostics, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &PriorityCall> {
        self.history.iter()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Shared completion path: guard the `expected_from → Completed` edge,
    /// then move the call to history.
    fn close(&mut self, id: CallId, expected_from: CallStatus) -> DispatchResult<()> {
        let call = self.calls.get_mut(&id).ok_or(DispatchError::UnknownCall(id))?;
        if call.status() != expected_from {
            return Err(DispatchError::InvalidTransition {
                id,
                from: call.status(),
                to: CallStatus::Completed,
            });
        }
        call.transition(CallStatus::Completed)?;
        self.retire(id);
        Ok(())
    }

    fn remove_waiting_entry(&mut self, id: CallId) {
        if let Some(key) = self.order_keys.remove(&id) {
            self.waiting.remove(&key);
        }
    }

    fn retire(&mut self, id: CallId) {
        if let Some(call) = self.calls.remove(&id) {
            if self.history_capacity == 0 {
                return;
            }
            if self.history.len() == self.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(call);
        }
    }
}

impl Default for CallQueue {
    fn default() -> Self {
        Self::new()
    }
}
