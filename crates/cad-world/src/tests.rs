//! Unit tests for cad-world.

use cad_core::{CallPriority, ResponseCode, SimRng, ZoneId};

use crate::{
    CrimeKind, LocationKind, ScenarioInfo, ScenarioPool, WeightedPool, WorldModel, WorldPos, Zone,
    ZoneProvider,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scenario(name: &str, crime: CrimeKind, weight: f64) -> ScenarioInfo {
    ScenarioInfo {
        name: name.to_string(),
        crime,
        location_kind: LocationKind::RoadShoulder,
        priority: CallPriority::Urgent,
        response: ResponseCode::Code2,
        weight,
    }
}

fn shoulder_zone(id: u32) -> Zone {
    Zone::new(ZoneId(id), format!("zone_{id}"))
        .with_crime(CrimeKind::Robbery, 1.0)
        .with_location(LocationKind::RoadShoulder, WorldPos::new(10.0, 20.0, 0.0, 90.0), 1.0)
}

// ── WeightedPool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool {
    use super::*;

    #[test]
    fn empty_pool_fails() {
        let pool: WeightedPool<u8> = WeightedPool::new();
        let mut rng = SimRng::new(1);
        assert!(pool.try_spawn(&mut rng).is_none());
    }

    #[test]
    fn zero_weight_only_fails() {
        let mut pool = WeightedPool::new();
        pool.push("never", 0.0);
        pool.push("also_never", -3.0);
        let mut rng = SimRng::new(1);
        assert!(pool.try_spawn(&mut rng).is_none());
        assert_eq!(pool.total_weight(), 0.0);
    }

    #[test]
    fn single_entry_always_selected() {
        let mut pool = WeightedPool::new();
        pool.push("only", 0.5);
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(pool.try_spawn(&mut rng), Some(&"only"));
        }
    }

    #[test]
    fn zero_weight_entry_never_selected() {
        let mut pool = WeightedPool::new();
        pool.push("live", 1.0);
        pool.push("dead", 0.0);
        let mut rng = SimRng::new(11);
        for _ in 0..1_000 {
            assert_eq!(pool.try_spawn(&mut rng), Some(&"live"));
        }
    }

    #[test]
    fn selection_reproducible_under_fixed_seed() {
        let pool: WeightedPool<u32> = (0..10).map(|i| (i, 1.0 + i as f64)).collect();
        let picks = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50).map(|_| *pool.try_spawn(&mut rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
        assert_ne!(picks(42), picks(43));
    }

    #[test]
    fn heavy_weight_dominates() {
        let mut pool = WeightedPool::new();
        pool.push("heavy", 99.0);
        pool.push("light", 1.0);
        let mut rng = SimRng::new(3);
        let heavy = (0..1_000)
            .filter(|_| pool.try_spawn(&mut rng) == Some(&"heavy"))
            .count();
        // 99:1 odds; anything under 90% in 1000 draws means the walk is wrong.
        assert!(heavy > 900, "heavy selected only {heavy}/1000 times");
    }
}

// ── ScenarioPool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_pool {
    use super::*;

    #[test]
    fn spawns_by_crime_kind() {
        let mut pool = ScenarioPool::new();
        pool.push(scenario("mugging", CrimeKind::Robbery, 1.0));
        pool.push(scenario("bar_fight", CrimeKind::Assault, 1.0));

        let mut rng = SimRng::new(5);
        let picked = pool.try_spawn(CrimeKind::Robbery, &mut rng).unwrap();
        assert_eq!(picked.name, "mugging");
        assert_eq!(picked.crime, CrimeKind::Robbery);
    }

    #[test]
    fn unknown_kind_fails() {
        let mut pool = ScenarioPool::new();
        pool.push(scenario("mugging", CrimeKind::Robbery, 1.0));
        let mut rng = SimRng::new(5);
        assert!(pool.try_spawn(CrimeKind::Trespass, &mut rng).is_none());
    }

    #[test]
    fn counts() {
        let mut pool = ScenarioPool::new();
        assert!(pool.is_empty());
        pool.push(scenario("a", CrimeKind::Robbery, 1.0));
        pool.push(scenario("b", CrimeKind::Robbery, 1.0));
        pool.push(scenario("c", CrimeKind::Assault, 1.0));
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.kind_count(), 2);
    }
}

// ── Zone ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone {
    use super::*;

    #[test]
    fn pick_crime_from_profile() {
        let zone = shoulder_zone(1);
        let mut rng = SimRng::new(2);
        assert_eq!(zone.pick_crime(&mut rng), Some(CrimeKind::Robbery));
    }

    #[test]
    fn empty_profile_fails() {
        let zone = Zone::new(ZoneId(9), "quiet");
        let mut rng = SimRng::new(2);
        assert!(zone.pick_crime(&mut rng).is_none());
    }

    #[test]
    fn resolve_supported_kind() {
        let zone = shoulder_zone(1);
        let mut rng = SimRng::new(2);
        let loc = zone.resolve_location(LocationKind::RoadShoulder, &mut rng).unwrap();
        assert_eq!(loc.kind, LocationKind::RoadShoulder);
        assert_eq!(loc.pos.x, 10.0);
    }

    #[test]
    fn unsupported_kind_fails_closed() {
        let zone = shoulder_zone(1);
        let mut rng = SimRng::new(2);
        // No alley table: must fail, never fall back to the shoulder table.
        assert!(zone.resolve_location(LocationKind::Alley, &mut rng).is_none());
        assert!(!zone.supports(LocationKind::Alley));
        assert!(zone.supports(LocationKind::RoadShoulder));
    }
}

// ── WorldModel ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use super::*;

    #[test]
    fn empty_model_yields_no_zone() {
        let mut model = WorldModel::new();
        let mut rng = SimRng::new(1);
        assert!(model.next_zone(&mut rng).unwrap().is_none());
    }

    #[test]
    fn dormant_zone_never_selected() {
        let mut model = WorldModel::new();
        model.add_zone(shoulder_zone(1), 1.0);
        model.add_zone(shoulder_zone(2), 0.0);
        let mut rng = SimRng::new(8);
        for _ in 0..200 {
            let zone = model.next_zone(&mut rng).unwrap().unwrap();
            assert_eq!(zone.id, ZoneId(1));
        }
    }

    #[test]
    fn lookup_by_id() {
        let mut model = WorldModel::new();
        model.add_zone(shoulder_zone(4), 1.0);
        assert!(model.zone(ZoneId(4)).is_some());
        assert!(model.zone(ZoneId(5)).is_none());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_scenarios_reader;

    use super::*;

    const CSV: &[u8] = b"\
name,crime,location_kind,priority,response,weight\n\
armed_robbery_in_progress,robbery,road_shoulder,immediate,code3,2.0\n\
mugging_report,robbery,road_shoulder,urgent,code2,1.0\n\
stolen_vehicle_report,vehicle_theft,road_shoulder,routine,code1,1.0\n\
";

    #[test]
    fn loads_pool_keyed_by_crime() {
        let pool = load_scenarios_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.kind_count(), 2);

        let mut rng = SimRng::new(1);
        let picked = pool.try_spawn(CrimeKind::VehicleTheft, &mut rng).unwrap();
        assert_eq!(picked.name, "stolen_vehicle_report");
        assert_eq!(picked.priority, CallPriority::Routine);
        assert_eq!(picked.response, ResponseCode::Code1);
    }

    #[test]
    fn invalid_crime_errors() {
        let bad = b"\
name,crime,location_kind,priority,response,weight\n\
x,jaywalking,road_shoulder,routine,code1,1.0\n\
";
        assert!(load_scenarios_reader(Cursor::new(bad.as_slice())).is_err());
    }

    #[test]
    fn invalid_priority_errors() {
        let bad = b"\
name,crime,location_kind,priority,response,weight\n\
x,robbery,road_shoulder,whenever,code1,1.0\n\
";
        assert!(load_scenarios_reader(Cursor::new(bad.as_slice())).is_err());
    }

    #[test]
    fn invalid_location_kind_errors() {
        let bad = b"\
name,crime,location_kind,priority,response,weight\n\
x,robbery,rooftop,routine,code1,1.0\n\
";
        assert!(load_scenarios_reader(Cursor::new(bad.as_slice())).is_err());
    }
}
