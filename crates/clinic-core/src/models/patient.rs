//! Patient models.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    Address, AppointmentEvent, Email, EventId, MedicalHistoryEvent, Name, Nric, Phone, Tag,
};

/// A patient record, owning its appointments and medical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Patient name
    pub name: Name,
    /// National ID - the identity key for duplicate detection
    pub nric: Nric,
    /// Contact number
    pub phone: Phone,
    /// Email address
    pub email: Email,
    /// Home address
    pub address: Address,
    /// Labels (set semantics)
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    /// Appointments in insertion order
    #[serde(default)]
    pub appointments: Vec<AppointmentEvent>,
    /// Medical history events in insertion order
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEvent>,
}

impl Patient {
    /// Create a new patient with no events.
    pub fn new(
        name: Name,
        nric: Nric,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            nric,
            phone,
            email,
            address,
            tags,
            appointments: Vec::new(),
            medical_history: Vec::new(),
        }
    }

    /// Check whether two records describe the same person (same NRIC).
    pub fn is_same_patient(&self, other: &Patient) -> bool {
        self.nric == other.nric
    }

    pub fn has_appointment(&self, id: EventId) -> bool {
        self.appointments.iter().any(|a| a.id == id)
    }

    pub fn has_medical_history_event(&self, id: EventId) -> bool {
        self.medical_history.iter().any(|e| e.id == id)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; NRIC: {}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.nric, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// Fields supplied to `edit`; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub nric: Option<Nric>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.nric.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Build the edited patient. Owned events carry over unchanged.
    pub fn apply(&self, patient: &Patient) -> Patient {
        Patient {
            name: self.name.clone().unwrap_or_else(|| patient.name.clone()),
            nric: self.nric.clone().unwrap_or_else(|| patient.nric.clone()),
            phone: self.phone.clone().unwrap_or_else(|| patient.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| patient.email.clone()),
            address: self.address.clone().unwrap_or_else(|| patient.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| patient.tags.clone()),
            appointments: patient.appointments.clone(),
            medical_history: patient.medical_history.clone(),
        }
    }
}
