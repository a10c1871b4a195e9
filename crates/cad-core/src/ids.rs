//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `CallId` and `EventId` are issued
//! from a [`Sequence`][crate::Sequence] and are identity values — they are
//! never indexes into anything.  `ZoneId` and `UnitId` are assigned by the
//! external world model.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// `true` unless this is the `INVALID` sentinel.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// A geographic map zone.  Assigned by the external world model.
    pub struct ZoneId(u32);
}

typed_id! {
    /// A generated priority call.  Issued once per call, strictly increasing
    /// across the process lifetime, never reused.  Live ids start at 1 so a
    /// zero in host logs always means "no call".
    pub struct CallId(u64);
}

typed_id! {
    /// An ambient world event.  Issued by the event registry starting at 0,
    /// never reused even after the event is swept.
    pub struct EventId(u64);
}

typed_id! {
    /// An officer unit whose behavior is simulated outside this core.
    pub struct UnitId(u32);
}
