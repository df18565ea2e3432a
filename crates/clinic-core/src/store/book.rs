//! The clinic book: every patient and, through them, every event.

use std::collections::HashSet;

use crate::models::{AppointmentEvent, EventId, MedicalHistoryEvent, Nric, OwnedEvent, Patient};

use super::{StoreError, StoreResult};

/// All patients in insertion order, unique by NRIC.
///
/// Events live inside their patient, so removing a patient removes its events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicBook {
    patients: Vec<Patient>,
}

impl ClinicBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from existing records.
    ///
    /// Rejects duplicate NRICs, and event handles repeated within one patient's
    /// appointments or medical history.
    pub fn from_patients(patients: Vec<Patient>) -> StoreResult<Self> {
        let mut book = Self::new();
        for patient in patients {
            if let Some(id) = first_repeated_id(&patient.appointments)
                .or_else(|| first_repeated_id(&patient.medical_history))
            {
                return Err(StoreError::DuplicateEventId {
                    nric: patient.nric,
                    id,
                });
            }
            book.add_patient(patient)?;
        }
        Ok(book)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Check if a patient with the same identity exists.
    pub fn has_patient(&self, patient: &Patient) -> bool {
        self.patients.iter().any(|p| p.is_same_patient(patient))
    }

    pub fn contains(&self, nric: &Nric) -> bool {
        self.patients.iter().any(|p| &p.nric == nric)
    }

    pub fn patient(&self, nric: &Nric) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.nric == nric)
    }

    fn position(&self, nric: &Nric) -> StoreResult<usize> {
        self.patients
            .iter()
            .position(|p| &p.nric == nric)
            .ok_or_else(|| StoreError::PatientNotFound(nric.clone()))
    }

    fn patient_mut(&mut self, nric: &Nric) -> StoreResult<&mut Patient> {
        let position = self.position(nric)?;
        Ok(&mut self.patients[position])
    }

    /// Append a new patient.
    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        if self.has_patient(&patient) {
            return Err(StoreError::DuplicatePatient(patient.nric));
        }
        self.patients.push(patient);
        Ok(())
    }

    /// Replace the patient identified by `target`, keeping its position.
    ///
    /// The edited record may carry a new NRIC as long as no other patient has it.
    pub fn set_patient(&mut self, target: &Nric, edited: Patient) -> StoreResult<()> {
        let position = self.position(target)?;
        if &edited.nric != target && self.contains(&edited.nric) {
            return Err(StoreError::DuplicatePatient(edited.nric));
        }
        self.patients[position] = edited;
        Ok(())
    }

    /// Remove a patient together with all of its events.
    pub fn remove_patient(&mut self, target: &Nric) -> StoreResult<Patient> {
        let position = self.position(target)?;
        Ok(self.patients.remove(position))
    }

    pub fn clear(&mut self) {
        self.patients.clear();
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    pub fn add_appointment(&mut self, owner: &Nric, appointment: AppointmentEvent) -> StoreResult<()> {
        self.patient_mut(owner)?.appointments.push(appointment);
        Ok(())
    }

    /// Replace an appointment, re-validating that `owner` still holds `id`.
    pub fn set_appointment(
        &mut self,
        owner: &Nric,
        id: EventId,
        edited: AppointmentEvent,
    ) -> StoreResult<()> {
        let patient = self.patient_mut(owner)?;
        let slot = patient
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::AppointmentNotFound {
                nric: owner.clone(),
                id,
            })?;
        *slot = edited;
        Ok(())
    }

    pub fn remove_appointment(&mut self, owner: &Nric, id: EventId) -> StoreResult<AppointmentEvent> {
        let patient = self.patient_mut(owner)?;
        let position = patient
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::AppointmentNotFound {
                nric: owner.clone(),
                id,
            })?;
        Ok(patient.appointments.remove(position))
    }

    // =========================================================================
    // Medical history
    // =========================================================================

    pub fn add_medical_history_event(
        &mut self,
        owner: &Nric,
        event: MedicalHistoryEvent,
    ) -> StoreResult<()> {
        self.patient_mut(owner)?.medical_history.push(event);
        Ok(())
    }

    /// Replace a medical history event, re-validating that `owner` still holds `id`.
    pub fn set_medical_history_event(
        &mut self,
        owner: &Nric,
        id: EventId,
        edited: MedicalHistoryEvent,
    ) -> StoreResult<()> {
        let patient = self.patient_mut(owner)?;
        let slot = patient
            .medical_history
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::MedicalHistoryEventNotFound {
                nric: owner.clone(),
                id,
            })?;
        *slot = edited;
        Ok(())
    }

    pub fn remove_medical_history_event(
        &mut self,
        owner: &Nric,
        id: EventId,
    ) -> StoreResult<MedicalHistoryEvent> {
        let patient = self.patient_mut(owner)?;
        let position = patient
            .medical_history
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::MedicalHistoryEventNotFound {
                nric: owner.clone(),
                id,
            })?;
        Ok(patient.medical_history.remove(position))
    }
}

fn first_repeated_id<E: OwnedEvent>(events: &[E]) -> Option<EventId> {
    let mut seen = HashSet::new();
    events.iter().map(E::id).find(|id| !seen.insert(*id))
}
