mod event_bus;

pub use event_bus::EventBus;

use std::ops::Range;

use common::subject_observer::ReactionError;
use serde::Deserialize;
use strum::{Display, EnumString};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub const DEMO_EVENT_NAME: &str = "windowOpen";
pub const DEMO_STATE_RANGE: Range<i32> = 0..10;

const DEFAULT_DEMO_DELAY_MS: u64 = 15;

/// What `publish` does when an observer fails to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PublishPolicy {
    /// Stop at the first failure; later observers miss the event.
    Abort,
    /// Deliver to everyone, then report every failure.
    #[default]
    Continue,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BusConfig {
    #[serde(default)]
    pub policy: PublishPolicy,
    #[serde(default = "default_demo_delay_ms")]
    #[validate(range(max = 10000))]
    pub demo_delay_ms: u64,
}

fn default_demo_delay_ms() -> u64 {
    DEFAULT_DEMO_DELAY_MS
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            policy: Default::default(),
            demo_delay_ms: DEFAULT_DEMO_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionFailure {
    pub index: usize,
    pub error: ReactionError,
}

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(ValidationErrors),
    #[error("Delivery aborted at observer #{index}: {source}")]
    Aborted { index: usize, source: ReactionError },
    #[error("{} of {delivered} observers failed to react", .failures.len())]
    ReactionsFailed {
        delivered: usize,
        failures: Vec<ReactionFailure>,
    },
}

pub type PublishResult = Result<usize, NotifierError>;
