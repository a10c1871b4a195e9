//! The `ZoneProvider` seam and an in-memory implementation.

use thiserror::Error;

use cad_core::{SimRng, ZoneId};

use crate::{WeightedPool, Zone};

/// An unexpected failure inside a zone provider.
///
/// Distinct from "no zone available right now" (`Ok(None)`): the generator
/// retries both, but logs provider failures at error level because they
/// indicate a host-side bug, not a quiet map.
#[derive(Debug, Error)]
#[error("zone provider failure: {0}")]
pub struct ProviderError(pub String);

/// Supplies candidate zones, weighted by each zone's own crime-rate share of
/// the map.  Implemented by the host's world model; [`WorldModel`] is the
/// in-memory implementation used by tests and demos.
pub trait ZoneProvider {
    /// The next candidate zone, or `Ok(None)` when no zone is currently
    /// eligible.  Implementations must not panic; internal failures are
    /// reported as `Err` and the caller retries.
    fn next_zone(&mut self, rng: &mut SimRng) -> Result<Option<&Zone>, ProviderError>;
}

// ── WorldModel ────────────────────────────────────────────────────────────────

/// An in-memory zone table with crime-rate weighting.
#[derive(Clone, Debug, Default)]
pub struct WorldModel {
    zones: Vec<Zone>,
    /// Indexes into `zones`, weighted by each zone's crime rate.
    index: WeightedPool<usize>,
}

impl WorldModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone.  `crime_rate` is the zone's selection weight relative
    /// to the rest of the map; a rate of 0 makes the zone dormant.
    pub fn add_zone(&mut self, zone: Zone, crime_rate: f64) {
        self.index.push(self.zones.len(), crime_rate);
        self.zones.push(zone);
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl ZoneProvider for WorldModel {
    fn next_zone(&mut self, rng: &mut SimRng) -> Result<Option<&Zone>, ProviderError> {
        Ok(self.index.try_spawn(rng).map(|&i| &self.zones[i]))
    }
}
