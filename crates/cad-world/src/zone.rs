//! Map zones and the concrete spawn locations they resolve.

use std::fmt;

use rustc_hash::FxHashMap;

use cad_core::{SimRng, ZoneId};

use crate::{CrimeKind, LocationKind, WeightedPool};

// ── WorldPos ──────────────────────────────────────────────────────────────────

/// A game-world position.  `f32` matches the precision the host engine hands
/// out; the geometry is otherwise opaque to this core.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Facing in degrees, for placements that orient a vehicle or ped.
    pub heading: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, heading: f32) -> Self {
        Self { x, y, z, heading }
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1} @{:.0}°)", self.x, self.y, self.z, self.heading)
    }
}

// ── WorldLocation ─────────────────────────────────────────────────────────────

/// A concrete, immutable spawn placement resolved from a zone for a specific
/// location-kind request.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldLocation {
    pub pos: WorldPos,
    pub kind: LocationKind,
}

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A geographic region with a weighted crime profile and per-kind spawn
/// location tables.
///
/// Owned and mutated by the host's world model; the engine only reads it.
/// Candidate locations are registered per [`LocationKind`]; resolving a kind
/// the zone has no table for fails — nothing defaults to another kind.
#[derive(Clone, Debug)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    crimes: WeightedPool<CrimeKind>,
    locations: FxHashMap<LocationKind, WeightedPool<WorldLocation>>,
}

impl Zone {
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            crimes: WeightedPool::new(),
            locations: FxHashMap::default(),
        }
    }

    /// Add a crime kind to this zone's profile with the given weight.
    pub fn with_crime(mut self, kind: CrimeKind, weight: f64) -> Self {
        self.crimes.push(kind, weight);
        self
    }

    /// Add a candidate spawn position for `kind` with the given weight.
    pub fn with_location(mut self, kind: LocationKind, pos: WorldPos, weight: f64) -> Self {
        self.locations
            .entry(kind)
            .or_default()
            .push(WorldLocation { pos, kind }, weight);
        self
    }

    /// Sample a crime kind from this zone's profile.
    pub fn pick_crime(&self, rng: &mut SimRng) -> Option<CrimeKind> {
        self.crimes.try_spawn(rng).copied()
    }

    /// Resolve a concrete spawn location for `kind`.
    ///
    /// Fails closed: a kind with no table here, or with no selectable
    /// candidate, returns `None` rather than substituting a default.
    pub fn resolve_location(&self, kind: LocationKind, rng: &mut SimRng) -> Option<WorldLocation> {
        self.locations.get(&kind)?.try_spawn(rng).copied()
    }

    /// `true` if this zone has at least one selectable location for `kind`.
    pub fn supports(&self, kind: LocationKind) -> bool {
        self.locations
            .get(&kind)
            .is_some_and(|pool| pool.total_weight() > 0.0)
    }

    /// Number of crime kinds in this zone's profile.
    pub fn crime_count(&self) -> usize {
        self.crimes.len()
    }
}
