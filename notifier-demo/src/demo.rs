use std::rc::Rc;

use common::subject_observer::{SharedObserver, Subject};
use log::debug;
use notifier::{bus::EventBus, Event};
use notifier_ext::gateways::StatsdGateway;
use observers::{sink::ReactionSink, PayloadFilterObserver, UnconditionalObserver};
use rand::Rng;

use crate::{config::app::AppConfig, AppError};

const BROADCAST_ROUNDS: usize = 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub published: usize,
    pub deliveries: usize,
}

/// Subscribes the vessel and container observers, publishes the attached
/// payloads, drops the container observer, then publishes the detached ones.
pub fn run(
    config: &AppConfig,
    sink: Rc<dyn ReactionSink>,
    rng: &mut impl Rng,
) -> Result<DemoReport, AppError> {
    let mut bus = EventBus::with_config(config.bus_config())?;

    let vessel: SharedObserver<EventBus, Event> =
        Rc::new(PayloadFilterObserver::vessel(sink.clone()));
    let container: SharedObserver<EventBus, Event> =
        Rc::new(PayloadFilterObserver::container(sink));
    bus.subscribe(vessel);
    bus.subscribe(container.clone());

    if config.metrics_enabled {
        let gateway = StatsdGateway::new((config.statsd_host.clone(), config.statsd_port))?;
        bus.subscribe(Rc::new(gateway));
    }

    let mut report = DemoReport::default();
    for payload in &config.attached_payloads {
        report.deliveries += bus.trigger_demo_action(payload.as_str(), rng)?;
        report.published += 1;
    }

    bus.unsubscribe(&container);
    debug!("Container observer left, {} still subscribed", bus.subscriber_count());

    for payload in &config.detached_payloads {
        report.deliveries += bus.trigger_demo_action(payload.as_str(), rng)?;
        report.published += 1;
    }

    Ok(report)
}

/// Subscribes two unconditional observers, publishes the broadcast payload
/// twice, drops the second observer and publishes once more.
pub fn run_broadcast(
    config: &AppConfig,
    sink: Rc<dyn ReactionSink>,
    rng: &mut impl Rng,
) -> Result<DemoReport, AppError> {
    let mut bus = EventBus::with_config(config.bus_config())?;

    let first: SharedObserver<EventBus, Event> =
        Rc::new(UnconditionalObserver::new("ObserverA", sink.clone()));
    let second: SharedObserver<EventBus, Event> =
        Rc::new(UnconditionalObserver::new("ObserverB", sink));
    bus.subscribe(first);
    bus.subscribe(second.clone());

    let mut report = DemoReport::default();
    for _ in 0..BROADCAST_ROUNDS {
        report.deliveries += bus.trigger_demo_action(config.broadcast_payload.as_str(), rng)?;
        report.published += 1;
    }

    bus.unsubscribe(&second);

    report.deliveries += bus.trigger_demo_action(config.broadcast_payload.as_str(), rng)?;
    report.published += 1;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common_test::seeded_rng;
    use notifier::bus::PublishPolicy;
    use observers::sink::RecordingSink;

    use crate::config::app::AppConfig;

    use super::{run, run_broadcast, DemoReport};

    fn config() -> AppConfig {
        AppConfig {
            publish_policy: PublishPolicy::Continue,
            demo_delay_ms: 0,
            attached_payloads: vec!["Vessel:1222".to_string(), "Container:1344".to_string()],
            detached_payloads: vec!["Vessel:4554".to_string()],
            broadcast_payload: "vessel:1122".to_string(),
            metrics_enabled: false,
            statsd_host: "127.0.0.1".to_string(),
            statsd_port: 8125,
        }
    }

    #[test]
    fn test_run() {
        // Given
        let sink = Rc::new(RecordingSink::default());

        // When
        let result = run(&config(), sink.clone(), &mut seeded_rng().unwrap());

        // Then
        assert_eq!(
            DemoReport {
                published: 3,
                deliveries: 5,
            },
            result.unwrap()
        );
        assert_eq!(3, sink.len(), "Only matching observers should react");
        assert_eq!(2, sink.count_for("VesselObserver"));
        assert_eq!(1, sink.count_for("ContainerObserver"));
    }

    #[test]
    fn test_run_broadcast() {
        // Given
        let sink = Rc::new(RecordingSink::default());

        // When
        let result = run_broadcast(&config(), sink.clone(), &mut seeded_rng().unwrap());

        // Then
        assert_eq!(
            DemoReport {
                published: 3,
                deliveries: 5,
            },
            result.unwrap()
        );
        assert_eq!(3, sink.count_for("ObserverA"));
        assert_eq!(2, sink.count_for("ObserverB"), "Should miss the last event");
        assert!(sink.reactions().iter().all(|r| r.payload == "vessel:1122"));
    }

    #[test]
    fn test_run_with_metrics() {
        // Given
        let sink = Rc::new(RecordingSink::default());
        let config = AppConfig {
            metrics_enabled: true,
            ..config()
        };

        // When
        let result = run(&config, sink.clone(), &mut seeded_rng().unwrap());

        // Then
        assert!(
            matches!(result, Ok(report) if report.deliveries == 8),
            "The gateway should receive every event"
        );
        assert_eq!(3, sink.len());
    }

    #[test]
    fn test_run_should_validate_configuration() {
        // Given
        let config = AppConfig {
            demo_delay_ms: 60_000,
            ..config()
        };

        // When
        let result = run(&config, Rc::new(RecordingSink::default()), &mut seeded_rng().unwrap());

        // Then
        assert!(result.is_err(), "Should refuse an invalid bus configuration");
    }
}
