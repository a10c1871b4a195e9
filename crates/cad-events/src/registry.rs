//! The ambient-event registry.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use cad_core::{EventId, Sequence};

// ── Entry state ───────────────────────────────────────────────────────────────

/// Lifecycle tag held by the registry's index.  One-way: an entry never
/// returns from `Disposed` to `Active`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum EventState {
    Active,
    Disposed,
}

struct Entry<E> {
    event: E,
    state: EventState,
}

// ── AmbientEventRegistry ──────────────────────────────────────────────────────

/// Tracks ambient events from registration to sweep.
///
/// Ids are issued 0, 1, 2, … with no gaps or repeats for the life of the
/// registry, even after entries are removed.  Disposal marks an entry; only
/// [`process`][Self::process] removes it, so readers between a dispose and
/// the next sweep will still see the entry and must tolerate that.
pub struct AmbientEventRegistry<E> {
    entries: FxHashMap<EventId, Entry<E>>,
    ids: Sequence,
}

impl<E> AmbientEventRegistry<E> {
    /// An empty registry whose first issued id is 0.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            ids: Sequence::new(0),
        }
    }

    /// Track `event` and issue its id.  The id is assigned exactly here —
    /// never before registration, never reassigned afterwards.
    pub fn register(&mut self, event: E) -> EventId {
        let id = EventId(self.ids.next());
        self.entries.insert(
            id,
            Entry {
                event,
                state: EventState::Active,
            },
        );
        id
    }

    /// Mark `id` disposed.  Returns `true` the first time; `false` for ids
    /// that are unknown or already disposed.  The entry stays in the set
    /// until the next sweep.
    pub fn dispose(&mut self, id: EventId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == EventState::Active => {
                entry.state = EventState::Disposed;
                true
            }
            _ => false,
        }
    }

    /// Sweep: remove every disposed entry and return how many were removed.
    ///
    /// The empty-set fast path does no work at all.  Calling this repeatedly
    /// is safe — a second sweep with no new disposals removes nothing.
    pub fn process(&mut self) -> usize {
        if self.entries.is_empty() {
            return 0;
        }
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.state == EventState::Active);
        let removed = before - self.entries.len();
        if removed > 0 {
            info!(removed, remaining = self.entries.len(), "swept ambient events");
        } else {
            debug!(tracked = self.entries.len(), "ambient sweep removed nothing");
        }
        removed
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` while `id` is tracked — including disposed-but-unswept entries.
    pub fn contains(&self, id: EventId) -> bool {
        self.entries.contains_key(&id)
    }

    /// `true` if `id` is tracked and has been disposed but not yet swept.
    pub fn is_disposed(&self, id: EventId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|e| e.state == EventState::Disposed)
    }

    pub fn get(&self, id: EventId) -> Option<&E> {
        self.entries.get(&id).map(|e| &e.event)
    }

    /// Tracked entry count, disposed-but-unswept entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of entries still active (not disposed), in no particular order.
    pub fn active(&self) -> impl Iterator<Item = EventId> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| e.state == EventState::Active)
            .map(|(&id, _)| id)
    }

    /// The id the next registration will receive.
    pub fn next_event_id(&self) -> EventId {
        EventId(self.ids.peek())
    }
}

impl<E> Default for AmbientEventRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
