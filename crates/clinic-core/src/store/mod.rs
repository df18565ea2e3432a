//! In-memory record store.
//!
//! [`ClinicBook`] is the aggregate root holding every patient; [`Model`] wraps it
//! with the filtered projections that index-based commands address.

mod book;
mod filter;
mod model;

pub use book::*;
pub use filter::*;
pub use model::*;

use thiserror::Error;

use crate::models::{EventId, Nric};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("A patient with NRIC {0} already exists")]
    DuplicatePatient(Nric),

    #[error("No patient with NRIC {0}")]
    PatientNotFound(Nric),

    #[error("Appointment {id} does not belong to patient {nric}")]
    AppointmentNotFound { nric: Nric, id: EventId },

    #[error("Medical history event {id} does not belong to patient {nric}")]
    MedicalHistoryEventNotFound { nric: Nric, id: EventId },

    #[error("Patient {nric} holds more than one event with handle {id}")]
    DuplicateEventId { nric: Nric, id: EventId },
}

pub type StoreResult<T> = Result<T, StoreError>;
