use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::subject_observer::{Observer, ReactionResult};
use dipstick::{Input, Statsd};
use notifier::{bus::EventBus, Event};

use super::BusMetrics;

pub struct StatsdGateway {
    metrics: BusMetrics,
}

impl StatsdGateway {
    pub fn new<A>(address: A) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        Ok(StatsdGateway {
            metrics: BusMetrics::new(&statsd_scope),
        })
    }
}

impl Observer<EventBus, Event> for StatsdGateway {
    fn react(&self, source: &EventBus, event: &Event) -> ReactionResult {
        self.metrics.record(source, event);
        Ok(())
    }
}
