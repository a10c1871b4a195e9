//! `Sequence` — an explicit, process-scoped monotonic counter.
//!
//! Call ids and ambient-event ids must be unique and strictly increasing for
//! the life of the process.  Rather than hiding that state in a global,
//! each allocating component (the call generator, the event registry) owns a
//! `Sequence` handed to it at construction — which keeps runs resettable
//! between tests.
//!
//! The engine runs on a single cooperative tick, so `next` takes `&mut self`.
//! A host that drives generation from more than one thread must serialize
//! access to the owning component; the counter itself provides no locking.

/// Monotonic `u64` allocator.  Values are issued exactly once, in order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    /// A sequence whose first issued value is `start`.
    pub const fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// Issue the next value.  Never returns the same value twice.
    #[inline]
    pub fn next(&mut self) -> u64 {
        let issued = self.next;
        self.next += 1;
        issued
    }

    /// The value `next` would return, without consuming it.
    #[inline]
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(0)
    }
}
