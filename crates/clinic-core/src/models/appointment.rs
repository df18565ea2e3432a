//! Appointment models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EventDate, EventId, EventTime, OwnedEvent};

/// A scheduled visit, owned by a single patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentEvent {
    /// Internal handle, regenerated if missing from stored data
    #[serde(default)]
    pub id: EventId,
    /// Day of the visit
    pub date: EventDate,
    /// Time of the visit, if fixed
    #[serde(default)]
    pub time: Option<EventTime>,
}

impl AppointmentEvent {
    /// Create a new appointment with a fresh handle.
    pub fn new(date: EventDate, time: Option<EventTime>) -> Self {
        Self {
            id: EventId::new(),
            date,
            time,
        }
    }
}

impl OwnedEvent for AppointmentEvent {
    fn id(&self) -> EventId {
        self.id
    }

    fn date(&self) -> EventDate {
        self.date
    }
}

impl fmt::Display for AppointmentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}", self.date)?;
        if let Some(time) = &self.time {
            write!(f, "; Time: {}", time)?;
        }
        Ok(())
    }
}

/// Fields supplied to `edit-appt`; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditAppointmentDescriptor {
    pub date: Option<EventDate>,
    pub time: Option<EventTime>,
}

impl EditAppointmentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }

    /// Build the edited appointment, keeping the original handle.
    pub fn apply(&self, appointment: &AppointmentEvent) -> AppointmentEvent {
        AppointmentEvent {
            id: appointment.id,
            date: self.date.unwrap_or(appointment.date),
            time: self.time.or(appointment.time),
        }
    }
}
