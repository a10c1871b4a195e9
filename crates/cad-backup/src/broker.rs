//! The backup broker and the despawn visibility seam.

use tracing::debug;

use cad_core::UnitId;

use crate::{BackupType, UnitHandle};

// ── VisibilityPolicy ──────────────────────────────────────────────────────────

/// Decides when a dismissed unit may actually despawn.
///
/// The contract is that units vanish only once the requesting observer can no
/// longer see them; *how* that is checked (distance, occlusion, line of
/// sight) is a host decision this core deliberately does not make.  Hosts
/// must supply a real implementation; [`AlwaysClear`] exists for tests and
/// headless demos where nothing is watching.
pub trait VisibilityPolicy {
    /// `true` when `unit` is out of the observer's view and safe to despawn.
    fn clear_to_despawn(&self, unit: UnitId) -> bool;
}

/// A policy that lets everything despawn immediately.
pub struct AlwaysClear;

impl VisibilityPolicy for AlwaysClear {
    fn clear_to_despawn(&self, _unit: UnitId) -> bool {
        true
    }
}

// ── Roster internals ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum UnitStatus {
    Available,
    Leased,
    /// Dismissed, waiting for the visibility policy to clear the despawn.
    Retiring,
}

#[derive(Debug)]
struct RosterUnit {
    id: UnitId,
    backup_type: BackupType,
    /// `true` for state-agency units (eligible under `use_state_only`).
    state_unit: bool,
    status: UnitStatus,
}

// ── BackupBroker ──────────────────────────────────────────────────────────────

/// Brokers officer-unit handles between the world roster and external mods.
///
/// Allocation is best-effort: a request for `count` units returns however
/// many are actually available (possibly zero), never an error.  Dismissed
/// units retire; [`process`][Self::process] despawns the ones the visibility
/// policy clears, removing them from the roster for good — the lease's end
/// is the unit's end.
#[derive(Debug, Default)]
pub struct BackupBroker {
    roster: Vec<RosterUnit>,
}

impl BackupBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit as available for lease.  `state_unit` marks
    /// state-agency units for `use_state_only` requests.
    pub fn add_unit(&mut self, id: UnitId, backup_type: BackupType, state_unit: bool) {
        self.roster.push(RosterUnit {
            id,
            backup_type,
            state_unit,
            status: UnitStatus::Available,
        });
    }

    /// Lease up to `count` available units of `backup_type`.
    ///
    /// Returns fewer handles than requested when the roster runs short —
    /// a shortfall is normal operation, not an error — and never more than
    /// `count`.
    pub fn request(
        &mut self,
        backup_type: BackupType,
        emergency: bool,
        count: usize,
        use_state_only: bool,
    ) -> Vec<UnitHandle> {
        let mut handles = Vec::with_capacity(count);
        for unit in &mut self.roster {
            if handles.len() == count {
                break;
            }
            if unit.status != UnitStatus::Available || unit.backup_type != backup_type {
                continue;
            }
            if use_state_only && !unit.state_unit {
                continue;
            }
            unit.status = UnitStatus::Leased;
            handles.push(UnitHandle {
                id: unit.id,
                backup_type,
                emergency,
            });
        }
        if handles.len() < count {
            debug!(
                %backup_type,
                requested = count,
                granted = handles.len(),
                "backup request short-filled"
            );
        }
        handles
    }

    /// Surrender leased handles.  The units retire and despawn once the
    /// visibility policy clears them; handles that match no leased unit are
    /// ignored.
    pub fn dismiss<I: IntoIterator<Item = UnitHandle>>(&mut self, handles: I) {
        for handle in handles {
            match self
                .roster
                .iter_mut()
                .find(|u| u.id == handle.id && u.status == UnitStatus::Leased)
            {
                Some(unit) => unit.status = UnitStatus::Retiring,
                None => debug!(unit = %handle.id, "dismissed handle matches no leased unit"),
            }
        }
    }

    /// Despawn every retiring unit the policy clears; the rest stay retiring
    /// for a later sweep.  Returns the number despawned.
    pub fn process(&mut self, policy: &dyn VisibilityPolicy) -> usize {
        let before = self.roster.len();
        self.roster
            .retain(|u| u.status != UnitStatus::Retiring || !policy.clear_to_despawn(u.id));
        let despawned = before - self.roster.len();
        if despawned > 0 {
            debug!(despawned, roster = self.roster.len(), "despawned retired units");
        }
        despawned
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Units of `backup_type` currently available for lease.
    pub fn available(&self, backup_type: BackupType) -> usize {
        self.roster
            .iter()
            .filter(|u| u.status == UnitStatus::Available && u.backup_type == backup_type)
            .count()
    }

    /// Dismissed units not yet cleared to despawn.
    pub fn retiring(&self) -> usize {
        self.roster
            .iter()
            .filter(|u| u.status == UnitStatus::Retiring)
            .count()
    }

    /// Total roster size, whatever the status.
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
