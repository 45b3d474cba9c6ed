use std::rc::Rc;

use common::subject_observer::{Observer, ReactionError, ReactionResult, Subject};
use notifier::Event;

use crate::sink::{Reaction, ReactionSink};

/// Reacts to every event it receives.
pub struct UnconditionalObserver {
    label: String,
    sink: Rc<dyn ReactionSink>,
}

impl UnconditionalObserver {
    pub fn new(label: impl Into<String>, sink: Rc<dyn ReactionSink>) -> Self {
        UnconditionalObserver {
            label: label.into(),
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<S: Subject<Event>> Observer<S, Event> for UnconditionalObserver {
    fn react(&self, _: &S, event: &Event) -> ReactionResult {
        self.sink
            .record(Reaction::new(&self.label, event))
            .map_err(|e| ReactionError::Sink {
                observer: self.label.clone(),
                reason: e.to_string(),
            })
    }
}
