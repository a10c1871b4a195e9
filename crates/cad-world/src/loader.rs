//! CSV scenario-template loader.
//!
//! # CSV format
//!
//! One row per scenario template.
//!
//! ```csv
//! name,crime,location_kind,priority,response,weight
//! armed_robbery_in_progress,robbery,road_shoulder,immediate,code3,2.0
//! stolen_vehicle_report,vehicle_theft,road_shoulder,routine,code1,1.0
//! ```
//!
//! | Column          | Values                                          |
//! |-----------------|-------------------------------------------------|
//! | `crime`         | `robbery`, `assault`, `burglary`, `vehicle_theft`, `domestic_disturbance`, `trespass` |
//! | `location_kind` | `road_shoulder`, `sidewalk`, `alley`, `parking_lot` |
//! | `priority`      | `immediate`, `urgent`, `routine`                |
//! | `response`      | `code1`, `code2`, `code3`                       |
//!
//! Unknown values in any column fail the load with a parse error naming the
//! offending value; nothing is silently skipped or defaulted.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cad_core::{CallPriority, ResponseCode};

use crate::{CrimeKind, LocationKind, ScenarioInfo, ScenarioPool, WorldError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    name:          String,
    crime:         String,
    location_kind: String,
    priority:      String,
    response:      String,
    weight:        f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ScenarioPool`] from a CSV file.
pub fn load_scenarios_csv(path: &Path) -> Result<ScenarioPool, WorldError> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_scenarios_reader(file)
}

/// Like [`load_scenarios_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding fixture data.
pub fn load_scenarios_reader<R: Read>(reader: R) -> Result<ScenarioPool, WorldError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pool = ScenarioPool::new();

    for result in csv_reader.deserialize::<ScenarioRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        pool.push(ScenarioInfo {
            crime:         row.crime.parse::<CrimeKind>().map_err(WorldError::Parse)?,
            location_kind: row.location_kind.parse::<LocationKind>().map_err(WorldError::Parse)?,
            priority:      parse_priority(&row.priority)?,
            response:      parse_response(&row.response)?,
            name:          row.name,
            weight:        row.weight,
        });
    }

    Ok(pool)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_priority(s: &str) -> Result<CallPriority, WorldError> {
    match s.trim() {
        "immediate" => Ok(CallPriority::Immediate),
        "urgent" => Ok(CallPriority::Urgent),
        "routine" => Ok(CallPriority::Routine),
        other => Err(WorldError::Parse(format!(
            "invalid priority {other:?}: expected \"immediate\", \"urgent\", or \"routine\""
        ))),
    }
}

fn parse_response(s: &str) -> Result<ResponseCode, WorldError> {
    match s.trim() {
        "code1" => Ok(ResponseCode::Code1),
        "code2" => Ok(ResponseCode::Code2),
        "code3" => Ok(ResponseCode::Code3),
        other => Err(WorldError::Parse(format!(
            "invalid response {other:?}: expected \"code1\", \"code2\", or \"code3\""
        ))),
    }
}
