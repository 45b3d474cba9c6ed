pub mod payload_filter_observer;
pub mod sink;
pub mod unconditional_observer;

pub use payload_filter_observer::PayloadFilterObserver;
pub use unconditional_observer::UnconditionalObserver;
