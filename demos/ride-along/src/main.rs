//! ride-along — smallest end-to-end demo of the dispatch engine.
//!
//! Three zones, a handful of scenario templates, and a toy assignment loop
//! standing in for the host's officer AI: the highest-priority waiting call
//! gets a free unit, the unit works the scene for a few ticks, immediate
//! calls pull an emergency backup unit through the broker.  Swap the zone
//! table and scenario CSV for real map data to run against a live world.

use std::io::Cursor;

use anyhow::Result;
use tracing::info;

use cad_backup::{AlwaysClear, BackupBroker, BackupType, UnitHandle};
use cad_core::{CallId, CallPriority, Tick, UnitId, ZoneId};
use cad_dispatch::PriorityCall;
use cad_gen::{CallTimerRange, GeneratorConfig};
use cad_sim::{Engine, EngineBuilder, EngineConfig, EngineObserver};
use cad_world::{load_scenarios_reader, CrimeKind, LocationKind, WorldModel, WorldPos, Zone};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 1_071;
const TICK_DURATION_SECS: u32 = 60;   // 1 tick = 1 simulated minute
const SIM_TICKS:          u64 = 60;   // one simulated hour
const PATROL_UNITS:       u32 = 3;
const TICKS_PER_PHASE:    u64 = 2;    // travel time, then scene time

// ── Scenario CSV ──────────────────────────────────────────────────────────────

const SCENARIO_CSV: &str = "\
name,crime,location_kind,priority,response,weight\n\
armed_robbery_in_progress,robbery,road_shoulder,immediate,code3,1.0\n\
mugging_report,robbery,road_shoulder,urgent,code2,2.0\n\
bar_fight,assault,road_shoulder,urgent,code2,2.0\n\
stolen_vehicle_report,vehicle_theft,road_shoulder,routine,code1,3.0\n\
loud_domestic_argument,domestic_disturbance,road_shoulder,urgent,code2,2.0\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct CallLogger {
    generated: usize,
}

impl EngineObserver for CallLogger {
    fn on_call_generated(&mut self, tick: Tick, call: &PriorityCall) {
        self.generated += 1;
        info!(
            %tick,
            call = %call.id,
            zone = %call.zone,
            scenario = %call.scenario.name,
            priority = %call.priority,
            response = %call.response,
            "new call"
        );
    }

    fn on_events_swept(&mut self, tick: Tick, removed: usize) {
        info!(%tick, removed, "ambient events swept");
    }
}

// ── Toy assignment loop ───────────────────────────────────────────────────────

/// A unit working a call: travel for `TICKS_PER_PHASE` ticks, then on scene
/// for another `TICKS_PER_PHASE`, then clear.
struct ActiveJob {
    call: CallId,
    unit: UnitId,
    on_scene: bool,
    ticks_left: u64,
    backup: Vec<UnitHandle>,
}

fn build_world() -> WorldModel {
    let mut world = WorldModel::new();
    world.add_zone(
        Zone::new(ZoneId(1), "downtown")
            .with_crime(CrimeKind::Robbery, 3.0)
            .with_crime(CrimeKind::Assault, 2.0)
            .with_crime(CrimeKind::VehicleTheft, 1.0)
            .with_location(LocationKind::RoadShoulder, WorldPos::new(210.0, -880.0, 30.0, 90.0), 1.0)
            .with_location(LocationKind::RoadShoulder, WorldPos::new(330.0, -950.0, 30.0, 180.0), 1.0),
        3.0,
    );
    world.add_zone(
        Zone::new(ZoneId(2), "harbor")
            .with_crime(CrimeKind::VehicleTheft, 3.0)
            .with_crime(CrimeKind::Trespass, 1.0)
            .with_location(LocationKind::RoadShoulder, WorldPos::new(-1200.0, -1500.0, 4.0, 0.0), 1.0),
        1.0,
    );
    world.add_zone(
        Zone::new(ZoneId(3), "suburbs")
            .with_crime(CrimeKind::DomesticDisturbance, 2.0)
            .with_crime(CrimeKind::Burglary, 2.0)
            .with_location(LocationKind::RoadShoulder, WorldPos::new(900.0, 450.0, 80.0, 270.0), 1.0),
        2.0,
    );
    world
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let scenarios = load_scenarios_reader(Cursor::new(SCENARIO_CSV.as_bytes()))?;

    let config = EngineConfig {
        seed: Some(SEED),
        tick_duration_secs: TICK_DURATION_SECS,
        generator: GeneratorConfig {
            max_location_attempts: 10,
            call_timer_range: CallTimerRange::new(120, 480),
        },
        ..EngineConfig::default()
    };

    let mut engine: Engine<WorldModel, &str> =
        EngineBuilder::new(config, build_world(), scenarios).build()?;

    let mut broker = BackupBroker::new();
    for i in 0..PATROL_UNITS {
        broker.add_unit(UnitId(100 + i), BackupType::LocalPatrol, false);
    }
    broker.add_unit(UnitId(200), BackupType::StatePatrol, true);

    // Something for the ambient sweep to chew on.
    let brawl = engine.events_mut().register("street_brawl");
    engine.events_mut().register("vehicle_breakdown");

    let mut free_units: Vec<UnitId> = (1..=PATROL_UNITS).map(UnitId).collect();
    let mut jobs: Vec<ActiveJob> = Vec::new();
    let mut logger = CallLogger::default();
    let mut completed = 0usize;

    for tick in 0..SIM_TICKS {
        engine.tick(&mut logger);

        // Halfway in, the street brawl fizzles out on its own.
        if tick == SIM_TICKS / 2 {
            engine.events_mut().dispose(brawl);
        }

        // Advance in-flight jobs.
        for job in &mut jobs {
            job.ticks_left -= 1;
            if job.ticks_left > 0 {
                continue;
            }
            if !job.on_scene {
                engine.on_scene(job.call)?;
                job.on_scene = true;
                job.ticks_left = TICKS_PER_PHASE;
                info!(call = %job.call, unit = %job.unit, "unit on scene");
            } else {
                engine.complete(job.call)?;
                completed += 1;
                info!(call = %job.call, unit = %job.unit, "call cleared");
            }
        }
        let mut i = 0;
        while i < jobs.len() {
            if jobs[i].on_scene && jobs[i].ticks_left == 0 {
                let job = jobs.remove(i);
                free_units.push(job.unit);
                broker.dismiss(job.backup);
            } else {
                i += 1;
            }
        }
        broker.process(&AlwaysClear);

        // Assign the most urgent waiting call to a free unit.
        while !free_units.is_empty() {
            let Some((id, priority)) = engine.calls().peek_next().map(|c| (c.id, c.priority))
            else {
                break;
            };
            let Some(unit) = free_units.pop() else { break };
            engine.dispatch(id, unit)?;
            info!(call = %id, %unit, %priority, "dispatched");

            // Immediate calls ride with emergency backup.
            let backup = if priority == CallPriority::Immediate {
                broker.request(BackupType::LocalPatrol, true, 1, false)
            } else {
                Vec::new()
            };
            jobs.push(ActiveJob {
                call: id,
                unit,
                on_scene: false,
                ticks_left: TICKS_PER_PHASE,
                backup,
            });
        }
    }

    info!(
        ticks = SIM_TICKS,
        generated = logger.generated,
        completed,
        still_waiting = engine.calls().waiting_count(),
        ambient_tracked = engine.events().len(),
        "simulation finished"
    );
    Ok(())
}
