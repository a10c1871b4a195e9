//! Crime kinds, location kinds, and scenario templates.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use cad_core::{CallPriority, ResponseCode, SimRng};

use crate::WeightedPool;

// ── CrimeKind ─────────────────────────────────────────────────────────────────

/// Broad incident category a zone can produce.  Zones weight these by their
/// local crime profile; the scenario pool maps each kind to concrete
/// templates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrimeKind {
    Robbery,
    Assault,
    Burglary,
    VehicleTheft,
    DomesticDisturbance,
    Trespass,
}

impl fmt::Display for CrimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrimeKind::Robbery => "robbery",
            CrimeKind::Assault => "assault",
            CrimeKind::Burglary => "burglary",
            CrimeKind::VehicleTheft => "vehicle_theft",
            CrimeKind::DomesticDisturbance => "domestic_disturbance",
            CrimeKind::Trespass => "trespass",
        };
        f.write_str(s)
    }
}

impl FromStr for CrimeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "robbery" => Ok(CrimeKind::Robbery),
            "assault" => Ok(CrimeKind::Assault),
            "burglary" => Ok(CrimeKind::Burglary),
            "vehicle_theft" => Ok(CrimeKind::VehicleTheft),
            "domestic_disturbance" => Ok(CrimeKind::DomesticDisturbance),
            "trespass" => Ok(CrimeKind::Trespass),
            other => Err(format!("unknown crime kind {other:?}")),
        }
    }
}

// ── LocationKind ──────────────────────────────────────────────────────────────

/// The placement a scenario needs for its spawn point.
///
/// Only road-shoulder placements ship with this core's loaders and demo data;
/// the other kinds are declared so hosts can populate zone tables for them.
/// A zone with no table for a requested kind fails the resolution — it never
/// substitutes a different kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    /// Side of the road.
    RoadShoulder,
    Sidewalk,
    Alley,
    ParkingLot,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LocationKind::RoadShoulder => "road_shoulder",
            LocationKind::Sidewalk => "sidewalk",
            LocationKind::Alley => "alley",
            LocationKind::ParkingLot => "parking_lot",
        };
        f.write_str(s)
    }
}

impl FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "road_shoulder" => Ok(LocationKind::RoadShoulder),
            "sidewalk" => Ok(LocationKind::Sidewalk),
            "alley" => Ok(LocationKind::Alley),
            "parking_lot" => Ok(LocationKind::ParkingLot),
            other => Err(format!("unknown location kind {other:?}")),
        }
    }
}

// ── ScenarioInfo ──────────────────────────────────────────────────────────────

/// An immutable incident template: what happens, where it can spawn, how
/// urgently it must be answered, and how likely it is relative to its
/// siblings of the same crime kind.
#[derive(Clone, Debug)]
pub struct ScenarioInfo {
    /// Human-readable template name, e.g. `"armed_robbery_in_progress"`.
    pub name: String,
    pub crime: CrimeKind,
    /// The placement this template requires for its spawn point.
    pub location_kind: LocationKind,
    pub priority: CallPriority,
    pub response: ResponseCode,
    /// Spawn weight among templates of the same crime kind.
    pub weight: f64,
}

// ── ScenarioPool ──────────────────────────────────────────────────────────────

/// The global scenario table, keyed by crime kind.
///
/// `try_spawn` for a kind with no templates (or only zero-weight templates)
/// returns `None`; the generator treats that as a retry, not an error.
#[derive(Clone, Debug, Default)]
pub struct ScenarioPool {
    by_crime: FxHashMap<CrimeKind, WeightedPool<ScenarioInfo>>,
}

impl ScenarioPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under its crime kind, weighted by `scenario.weight`.
    pub fn push(&mut self, scenario: ScenarioInfo) {
        let weight = scenario.weight;
        self.by_crime
            .entry(scenario.crime)
            .or_default()
            .push(scenario, weight);
    }

    /// Sample a template for `crime`.  Fails (returns `None`) for unknown
    /// kinds and for kinds whose templates are all unselectable.
    pub fn try_spawn(&self, crime: CrimeKind, rng: &mut SimRng) -> Option<&ScenarioInfo> {
        self.by_crime.get(&crime)?.try_spawn(rng)
    }

    /// Total number of templates across all crime kinds.
    pub fn len(&self) -> usize {
        self.by_crime.values().map(WeightedPool::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of crime kinds with at least one template.
    pub fn kind_count(&self) -> usize {
        self.by_crime.len()
    }
}
