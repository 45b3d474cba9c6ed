use std::rc::Rc;

use anyhow::{bail, Result};
use common::subject_observer::{Observer, ReactionError, ReactionResult, Subject};
use notifier::Event;

use crate::sink::{Reaction, ReactionSink};

pub const DEFAULT_DELIMITER: char = ':';
pub const VESSEL_TAG: &str = "Vessel";
pub const CONTAINER_TAG: &str = "Container";

/// Reacts only to events whose payload, up to the first delimiter, equals `tag`,
/// e.g. `Vessel:1222` or `Vessel` for the `Vessel` tag. The match is case-sensitive.
pub struct PayloadFilterObserver {
    label: String,
    tag: String,
    delimiter: char,
    sink: Rc<dyn ReactionSink>,
}

impl PayloadFilterObserver {
    pub fn new(
        label: impl Into<String>,
        tag: impl Into<String>,
        delimiter: char,
        sink: Rc<dyn ReactionSink>,
    ) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            bail!("Invalid payload tag: it must not be empty");
        }
        if tag.contains(delimiter) {
            bail!("Invalid payload tag: {tag}; It must not contain the delimiter {delimiter:?}");
        }

        Ok(PayloadFilterObserver {
            label: label.into(),
            tag,
            delimiter,
            sink,
        })
    }

    pub fn vessel(sink: Rc<dyn ReactionSink>) -> Self {
        Self::tagged(VESSEL_TAG, sink)
    }

    pub fn container(sink: Rc<dyn ReactionSink>) -> Self {
        Self::tagged(CONTAINER_TAG, sink)
    }

    fn tagged(tag: &str, sink: Rc<dyn ReactionSink>) -> Self {
        PayloadFilterObserver {
            label: format!("{tag}Observer"),
            tag: tag.to_string(),
            delimiter: DEFAULT_DELIMITER,
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, event: &Event) -> bool {
        event.payload_tag(self.delimiter) == self.tag
    }
}

impl<S: Subject<Event>> Observer<S, Event> for PayloadFilterObserver {
    fn react(&self, _: &S, event: &Event) -> ReactionResult {
        if !self.matches(event) {
            return Ok(());
        }
        self.sink
            .record(Reaction::new(&self.label, event))
            .map_err(|e| ReactionError::Sink {
                observer: self.label.clone(),
                reason: e.to_string(),
            })
    }
}
