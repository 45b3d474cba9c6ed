use std::{cell::RefCell, fmt};

use anyhow::Result;
use log::info;
use notifier::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub observer: String,
    pub event_name: String,
    pub payload: String,
}

impl Reaction {
    pub fn new(observer: &str, event: &Event) -> Self {
        Reaction {
            observer: observer.to_string(),
            event_name: event.name().to_string(),
            payload: event.payload().to_string(),
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Reacted to the event. Event Name: {} Event: {}",
            self.observer, self.event_name, self.payload
        )
    }
}

/// Where observers send their reactions.
pub trait ReactionSink {
    fn record(&self, reaction: Reaction) -> Result<()>;
}

pub struct LogSink;

impl ReactionSink for LogSink {
    fn record(&self, reaction: Reaction) -> Result<()> {
        info!("{reaction}");
        Ok(())
    }
}

/// Keeps reactions in memory, in the order they were recorded.
#[derive(Default)]
pub struct RecordingSink {
    reactions: RefCell<Vec<Reaction>>,
}

impl RecordingSink {
    pub fn reactions(&self) -> Vec<Reaction> {
        self.reactions.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reactions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.borrow().is_empty()
    }

    pub fn count_for(&self, observer: &str) -> usize {
        self.reactions
            .borrow()
            .iter()
            .filter(|r| r.observer == observer)
            .count()
    }
}

impl ReactionSink for RecordingSink {
    fn record(&self, reaction: Reaction) -> Result<()> {
        self.reactions.try_borrow_mut()?.push(reaction);
        Ok(())
    }
}
