//! Shared pieces of patient-owned events.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventDate;

/// Internal handle of an event inside its owning patient.
///
/// Never shown to the user; commands address events by filtered position and
/// resolve that position to a handle before mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event owned by exactly one patient.
pub trait OwnedEvent {
    fn id(&self) -> EventId;

    fn date(&self) -> EventDate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_are_unique() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36); // UUID format
    }
}
