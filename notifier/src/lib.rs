use std::fmt;

pub mod bus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    payload: String,
}

impl Event {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Event {
            name: name.into(),
            payload: payload.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Part of the payload before the first `delimiter`, or the whole payload
    /// when it has none.
    pub fn payload_tag(&self, delimiter: char) -> &str {
        self.payload
            .split_once(delimiter)
            .map_or(self.payload.as_str(), |(tag, _)| tag)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.payload)
    }
}
