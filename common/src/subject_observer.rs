use std::{ptr, rc::Rc};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactionError {
    #[error("{observer} could not record its reaction: {reason}")]
    Sink { observer: String, reason: String },
}

pub type ReactionResult = Result<(), ReactionError>;

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub trait Observer<S: Subject<E>, E> {
    fn react(&self, source: &S, event: &E) -> ReactionResult;
}

/// Something observers can subscribe to.
///
/// Observers are delivered events in subscription order. The same observer may be
/// subscribed more than once, in which case it reacts once per subscription.
pub trait Subject<E>: Sized {
    type Error;

    fn subscribe(&mut self, observer: SharedObserver<Self, E>);

    /// Removes the first subscription of `observer`, compared by reference.
    /// Returns `false` when the observer was not subscribed.
    fn unsubscribe(&mut self, observer: &SharedObserver<Self, E>) -> bool;

    /// Delivers `event` to every subscribed observer and returns how many were invoked.
    fn publish(&self, event: E) -> Result<usize, Self::Error>;
}

/// Reference identity of two observers, ignoring vtables.
pub fn same_observer<S, E>(a: &SharedObserver<S, E>, b: &SharedObserver<S, E>) -> bool
where
    S: Subject<E>,
{
    ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
