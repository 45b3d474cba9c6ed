mod graphite_gateway;
mod log_gateway;
mod statsd_gateway;

pub use graphite_gateway::GraphiteGateway;
pub use log_gateway::LogGateway;
pub use statsd_gateway::StatsdGateway;

use const_format::concatcp;
use dipstick::{Counter, Gauge, InputScope};
use log::trace;
use notifier::{bus::EventBus, Event};

pub const METRIC_PREFIX: &str = "notifier";
pub const EVENTS_METRIC: &str = concatcp!(METRIC_PREFIX, ".events");
pub const STATE_METRIC: &str = concatcp!(METRIC_PREFIX, ".state");

/// Metrics every gateway reports for each delivered event.
struct BusMetrics {
    events: Counter,
    state: Gauge,
}

impl BusMetrics {
    fn new(scope: &impl InputScope) -> Self {
        BusMetrics {
            events: scope.counter(EVENTS_METRIC),
            state: scope.gauge(STATE_METRIC),
        }
    }

    fn record(&self, source: &EventBus, event: &Event) {
        trace!("Sending metrics for {event}: state={}", source.state());
        self.events.count(1);
        self.state.value(source.state());
    }
}
