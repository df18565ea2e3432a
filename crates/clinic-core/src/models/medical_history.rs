//! Medical history models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EventDate, EventId, MedicalCondition, OwnedEvent, Treatment};

/// A past diagnosis and its treatment, owned by a single patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistoryEvent {
    /// Internal handle, regenerated if missing from stored data
    #[serde(default)]
    pub id: EventId,
    /// Day of diagnosis
    pub date: EventDate,
    /// Diagnosed condition
    pub medical_condition: MedicalCondition,
    /// Treatment given
    pub treatment: Treatment,
}

impl MedicalHistoryEvent {
    /// Create a new medical history event with a fresh handle.
    pub fn new(date: EventDate, medical_condition: MedicalCondition, treatment: Treatment) -> Self {
        Self {
            id: EventId::new(),
            date,
            medical_condition,
            treatment,
        }
    }
}

impl OwnedEvent for MedicalHistoryEvent {
    fn id(&self) -> EventId {
        self.id
    }

    fn date(&self) -> EventDate {
        self.date
    }
}

impl fmt::Display for MedicalHistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}; Medical Condition: {}; Treatment: {}",
            self.date, self.medical_condition, self.treatment
        )
    }
}

/// Fields supplied to `edit-hist`; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditMedicalHistoryDescriptor {
    pub date: Option<EventDate>,
    pub medical_condition: Option<MedicalCondition>,
    pub treatment: Option<Treatment>,
}

impl EditMedicalHistoryDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.date.is_some() || self.medical_condition.is_some() || self.treatment.is_some()
    }

    /// Build the edited event, keeping the original handle.
    pub fn apply(&self, event: &MedicalHistoryEvent) -> MedicalHistoryEvent {
        MedicalHistoryEvent {
            id: event.id,
            date: self.date.unwrap_or(event.date),
            medical_condition: self
                .medical_condition
                .clone()
                .unwrap_or_else(|| event.medical_condition.clone()),
            treatment: self
                .treatment
                .clone()
                .unwrap_or_else(|| event.treatment.clone()),
        }
    }
}
