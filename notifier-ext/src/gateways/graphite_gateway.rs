use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::subject_observer::{Observer, ReactionResult};
use dipstick::{Graphite, Input};
use notifier::{bus::EventBus, Event};

use super::BusMetrics;

pub struct GraphiteGateway {
    metrics: BusMetrics,
}

impl GraphiteGateway {
    pub fn new<A>(address: A) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let graphite_scope = Graphite::send_to(address)?.metrics();
        Ok(GraphiteGateway {
            metrics: BusMetrics::new(&graphite_scope),
        })
    }
}

impl Observer<EventBus, Event> for GraphiteGateway {
    fn react(&self, source: &EventBus, event: &Event) -> ReactionResult {
        self.metrics.record(source, event);
        Ok(())
    }
}
