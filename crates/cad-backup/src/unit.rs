//! Backup unit types and the opaque lease handle.

use std::fmt;

use cad_core::UnitId;

/// What kind of unit a backup request asks for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BackupType {
    /// City/county patrol.
    LocalPatrol,
    /// State patrol / highway units.
    StatePatrol,
    /// Tactical (SWAT-style) response.
    Tactical,
}

impl fmt::Display for BackupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackupType::LocalPatrol => "local_patrol",
            BackupType::StatePatrol => "state_patrol",
            BackupType::Tactical => "tactical",
        };
        f.write_str(s)
    }
}

/// A lease on one officer unit.
///
/// Opaque to the holder: the unit's simulation lives entirely outside this
/// core while the handle is out.  Surrendering the handle via
/// [`BackupBroker::dismiss`][crate::BackupBroker::dismiss] returns despawn
/// responsibility to the world-management layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitHandle {
    pub id: UnitId,
    pub backup_type: BackupType,
    /// Whether the lease was requested as an emergency response.
    pub emergency: bool,
}
