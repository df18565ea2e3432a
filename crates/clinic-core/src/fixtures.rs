//! Shared builders for unit tests.

use std::collections::BTreeSet;

use crate::models::{AppointmentEvent, MedicalHistoryEvent, Patient};
use crate::store::ClinicBook;

/// A valid patient with placeholder contact details.
pub fn patient(name: &str, nric: &str) -> Patient {
    Patient::new(
        name.parse().unwrap(),
        nric.parse().unwrap(),
        "94351253".parse().unwrap(),
        "alice@example.com".parse().unwrap(),
        "123, Jurong West Ave 6, #08-111".parse().unwrap(),
        BTreeSet::new(),
    )
}

pub fn appointment(date: &str) -> AppointmentEvent {
    AppointmentEvent::new(date.parse().unwrap(), None)
}

pub fn history(date: &str, condition: &str) -> MedicalHistoryEvent {
    MedicalHistoryEvent::new(
        date.parse().unwrap(),
        condition.parse().unwrap(),
        "Rest".parse().unwrap(),
    )
}

/// Alice, Benson and Carl, in that order.
pub fn typical_book() -> ClinicBook {
    ClinicBook::from_patients(vec![
        patient("Alice Pauline", "S1234567A"),
        patient("Benson Meier", "S2345678B"),
        patient("Carl Kurz", "T3456789C"),
    ])
    .unwrap()
}
