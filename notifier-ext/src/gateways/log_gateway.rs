use common::subject_observer::{Observer, ReactionResult};
use dipstick::{Input, Log};
use notifier::{bus::EventBus, Event};

use super::BusMetrics;

/// Writes bus metrics through the `log` facade, for runs without a metrics backend.
pub struct LogGateway {
    metrics: BusMetrics,
}

impl LogGateway {
    pub fn new(level: log::Level) -> Self {
        let log_scope = Log::to_log().level(level).metrics();
        LogGateway {
            metrics: BusMetrics::new(&log_scope),
        }
    }
}

impl Observer<EventBus, Event> for LogGateway {
    fn react(&self, source: &EventBus, event: &Event) -> ReactionResult {
        self.metrics.record(source, event);
        Ok(())
    }
}
