//! `CallGenerator` — the zone → crime → scenario → location pipeline.

use tracing::{debug, error};

use cad_core::{CallId, Sequence, SimRng};
use cad_dispatch::PriorityCall;
use cad_world::{ScenarioPool, ZoneProvider};

use crate::{Attempt, GeneratorConfig, RetryReason};

/// Generates priority calls with a bounded retry loop and monotonic id
/// allocation.
///
/// The generator owns the call-id [`Sequence`]: every id it issues is
/// strictly greater than every id issued before it, for the life of the
/// process, and an id is only consumed when an attempt fully succeeds.
pub struct CallGenerator {
    scenarios: ScenarioPool,
    call_seq: Sequence,
    config: GeneratorConfig,
}

impl CallGenerator {
    /// Live call ids start at 1; see [`CallId`].
    pub fn new(scenarios: ScenarioPool, config: GeneratorConfig) -> Self {
        Self {
            scenarios,
            call_seq: Sequence::new(1),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The id the next successful generation will receive.
    pub fn next_call_id(&self) -> CallId {
        CallId(self.call_seq.peek())
    }

    /// Try to produce one call.
    ///
    /// Runs up to `max_location_attempts` attempts; each step failure is
    /// logged and retried, a provider error is logged at error level and
    /// retried, and nothing escapes this function — `None` means "no call
    /// available this tick", which is not an error.
    pub fn generate_call<P: ZoneProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        rng: &mut SimRng,
    ) -> Option<PriorityCall> {
        for attempt_no in 1..=self.config.max_location_attempts.max(1) {
            match self.attempt(provider, rng) {
                Attempt::Spawned(call) => {
                    debug!(
                        call = %call.id,
                        zone = %call.zone,
                        scenario = %call.scenario.name,
                        priority = %call.priority,
                        "generated call"
                    );
                    return Some(call);
                }
                Attempt::Retry(reason) => {
                    debug!(attempt = attempt_no, %reason, "call generation retry");
                }
            }
        }
        // Exactly one line when the whole budget is spent.
        debug!(
            attempts = self.config.max_location_attempts,
            "call generation exhausted its retry budget"
        );
        None
    }

    /// One trip through the pipeline.  An id is allocated only on the success
    /// path, after every selection has resolved.
    fn attempt<P: ZoneProvider + ?Sized>(&mut self, provider: &mut P, rng: &mut SimRng) -> Attempt {
        let zone = match provider.next_zone(rng) {
            Err(e) => {
                error!(error = %e, "zone provider failed");
                return Attempt::Retry(RetryReason::ProviderFailure);
            }
            Ok(None) => return Attempt::Retry(RetryReason::NoZone),
            Ok(Some(zone)) => zone,
        };

        let Some(crime) = zone.pick_crime(rng) else {
            return Attempt::Retry(RetryReason::NoCrime);
        };

        let scenario = match self.scenarios.try_spawn(crime, rng) {
            Some(s) => s.clone(),
            None => return Attempt::Retry(RetryReason::NoScenario(crime)),
        };

        let Some(location) = zone.resolve_location(scenario.location_kind, rng) else {
            return Attempt::Retry(RetryReason::NoLocation(scenario.location_kind));
        };

        let id = CallId(self.call_seq.next());
        Attempt::Spawned(PriorityCall::new(id, zone.id, scenario, location))
    }
}
