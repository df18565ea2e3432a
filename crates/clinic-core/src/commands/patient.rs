//! Execution of the patient commands.

use tracing::debug;

use crate::index::Index;
use crate::models::{EditPatientDescriptor, Patient};
use crate::store::{Model, PatientFilter};

use super::{resolve_patient, CommandError, CommandResult, ExecResult};

pub(super) fn add(model: &mut Model, patient: &Patient) -> ExecResult<CommandResult> {
    if model.has_patient(patient) {
        return Err(CommandError::DuplicatePatient);
    }
    model.add_patient(patient.clone())?;
    Ok(CommandResult::new(format!("New patient added: {}", patient)))
}

/// Replace the patient at `index` with the supplied fields applied.
///
/// The patient list is reset to show everyone and the edited patient becomes
/// active.
pub(super) fn edit(
    model: &mut Model,
    index: Index,
    descriptor: &EditPatientDescriptor,
) -> ExecResult<CommandResult> {
    let target = resolve_patient(model, index)?;
    let edited = match model.clinic_book().patient(&target) {
        Some(patient) => descriptor.apply(patient),
        None => return Err(CommandError::InvalidPatientIndex),
    };

    if edited.nric != target && model.has_patient(&edited) {
        return Err(CommandError::DuplicatePatient);
    }

    let message = format!("Edited Patient: {}", edited);
    let nric = edited.nric.clone();
    model.set_patient(&target, edited)?;
    model.update_patient_filter(PatientFilter::All);
    model.focus_patient(&nric);
    Ok(CommandResult::new(message))
}

/// Remove the patient at `index` along with every event it owns.
pub(super) fn delete(model: &mut Model, index: Index) -> ExecResult<CommandResult> {
    let target = resolve_patient(model, index)?;
    let removed = model.delete_patient(&target)?;
    debug!(
        appointments = removed.appointments.len(),
        medical_history = removed.medical_history.len(),
        "Removed patient with owned events"
    );
    Ok(CommandResult::new(format!("Deleted Patient: {}", removed)))
}

pub(super) fn find(model: &mut Model, keywords: &[String]) -> CommandResult {
    model.update_patient_filter(PatientFilter::NameContainsKeywords(keywords.to_vec()));
    let count = model.filtered_patients().len();
    CommandResult::new(format!("{} patients listed!", count))
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_patient_filter(PatientFilter::All);
    CommandResult::new("Listed all patients")
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.clear();
    CommandResult::new("Clinic book has been cleared!")
}
