use std::{thread, time::Duration};

use common::subject_observer::{same_observer, SharedObserver, Subject};
use log::{debug, warn};
use rand::Rng;
use validator::Validate;

use crate::Event;

use super::{
    BusConfig, NotifierError, PublishPolicy, PublishResult, ReactionFailure, DEMO_EVENT_NAME,
    DEMO_STATE_RANGE,
};

type Observers = Vec<SharedObserver<EventBus, Event>>;

#[derive(Default)]
pub struct EventBus {
    observers: Observers,
    state: i32,
    config: BusConfig,
}

impl Subject<Event> for EventBus {
    type Error = NotifierError;

    fn subscribe(&mut self, observer: SharedObserver<Self, Event>) {
        self.observers.push(observer);
        debug!("Observer subscribed, {} now listening", self.observers.len());
    }

    fn unsubscribe(&mut self, observer: &SharedObserver<Self, Event>) -> bool {
        match self
            .observers
            .iter()
            .position(|obs| same_observer(obs, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                debug!("Observer #{index} unsubscribed");
                true
            }
            None => {
                debug!("Ignoring unsubscribe of an observer that is not subscribed");
                false
            }
        }
    }

    fn publish(&self, event: Event) -> PublishResult {
        debug!(
            "Publishing {} to {} observers ({})",
            event,
            self.observers.len(),
            self.config.policy
        );
        match self.config.policy {
            PublishPolicy::Abort => self.publish_until_failure(&event),
            PublishPolicy::Continue => self.publish_to_all(&event),
        }
    }
}

impl EventBus {
    pub fn with_config(config: BusConfig) -> Result<Self, NotifierError> {
        config.validate().map_err(NotifierError::InvalidSettings)?;
        Ok(EventBus {
            config,
            ..Default::default()
        })
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_subscribed(&self, observer: &SharedObserver<Self, Event>) -> bool {
        self.observers.iter().any(|obs| same_observer(obs, observer))
    }

    /// Simulates some work changing the bus state, then announces it with a
    /// `windowOpen` event carrying `payload`.
    pub fn trigger_demo_action(
        &mut self,
        payload: impl Into<String>,
        rng: &mut impl Rng,
    ) -> PublishResult {
        self.state = rng.gen_range(DEMO_STATE_RANGE);
        if self.config.demo_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.demo_delay_ms));
        }
        self.publish(Event::new(DEMO_EVENT_NAME, payload))
    }

    fn publish_until_failure(&self, event: &Event) -> PublishResult {
        for (index, obs) in self.observers.iter().enumerate() {
            obs.react(self, event).map_err(|source| {
                warn!("Observer #{index} failed on {event}, skipping the rest: {source}");
                NotifierError::Aborted { index, source }
            })?;
        }
        Ok(self.observers.len())
    }

    fn publish_to_all(&self, event: &Event) -> PublishResult {
        let failures = self
            .observers
            .iter()
            .enumerate()
            .filter_map(|(index, obs)| {
                obs.react(self, event).err().map(|error| {
                    warn!("Observer #{index} failed on {event}: {error}");
                    ReactionFailure { index, error }
                })
            })
            .collect::<Vec<_>>();

        let delivered = self.observers.len();
        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(NotifierError::ReactionsFailed {
                delivered,
                failures,
            })
        }
    }
}
