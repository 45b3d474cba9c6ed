use config::{Config, Environment, File, FileFormat};
use notifier::bus::{BusConfig, PublishPolicy};
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";
const LIST_KEYS: [&str; 2] = ["attached_payloads", "detached_payloads"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub publish_policy: PublishPolicy,
    pub demo_delay_ms: u64,
    /// Payloads published while both filtering observers are subscribed.
    pub attached_payloads: Vec<String>,
    /// Payloads published after the container observer left.
    pub detached_payloads: Vec<String>,
    /// Payload published to the unconditional observers.
    pub broadcast_payload: String,
    pub metrics_enabled: bool,
    pub statsd_host: String,
    pub statsd_port: u16,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let environment = LIST_KEYS.iter().fold(
            Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                .try_parsing(true)
                .list_separator(LIST_SEPARATOR),
            |env, key| env.with_list_parse_key(key),
        );
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(environment)
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    pub fn bus_config(&self) -> BusConfig {
        BusConfig {
            policy: self.publish_policy,
            demo_delay_ms: self.demo_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use notifier::bus::PublishPolicy;

    use super::AppConfig;

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(&result, Ok(x) if x.publish_policy == PublishPolicy::Continue && !x.metrics_enabled),
            "By default, it should return a valid config"
        );
        let config = result.unwrap();
        assert_eq!(vec!["Vessel:1222", "Container:1344"], config.attached_payloads);
        assert_eq!(vec!["Vessel:4554"], config.detached_payloads);
        assert_eq!("vessel:1122", config.broadcast_payload);

        let delay = 0u64;
        temp_env::with_var("APP_DEMO_DELAY_MS", Some(delay.to_string()), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.demo_delay_ms == delay),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_PUBLISH_POLICY", Some("abort"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.bus_config().policy == PublishPolicy::Abort),
                "Should read the publish policy from env vars"
            )
        });

        temp_env::with_var("APP_DETACHED_PAYLOADS", Some("Vessel:1,Container:2"), || {
            let result = AppConfig::new();
            assert!(
                matches!(&result, Ok(x) if x.detached_payloads == ["Vessel:1", "Container:2"]),
                "Should split payload lists read from env vars"
            )
        });

        temp_env::with_var("APP_ATTACHED_PAYLOADS", Some("Vessel:1"), || {
            let result = AppConfig::new();
            assert!(
                matches!(&result, Ok(x) if x.attached_payloads == ["Vessel:1"]),
                "Should accept a single payload from env vars"
            )
        });

        temp_env::with_var("APP_DEMO_DELAY_MS", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(_)),
                "Should return error when config is not valid"
            )
        });
    }
}
