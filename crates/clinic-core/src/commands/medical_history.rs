//! Execution of the medical history commands.

use crate::index::Index;
use crate::models::{
    EditMedicalHistoryDescriptor, EventDate, MedicalCondition, MedicalHistoryEvent, Nric,
    Treatment,
};
use crate::store::{EventFilter, Model};

use super::{resolve_patient, CommandError, CommandResult, ExecResult};

pub(super) fn add(
    model: &mut Model,
    patient_index: Index,
    date: EventDate,
    medical_condition: &MedicalCondition,
    treatment: &Treatment,
) -> ExecResult<CommandResult> {
    let owner = resolve_patient(model, patient_index)?;
    let event = MedicalHistoryEvent::new(date, medical_condition.clone(), treatment.clone());
    let message = format!("New medical history event added: {}", event);

    model.add_medical_history_event(&owner, event)?;
    model.focus_patient(&owner);
    model.set_medical_history_filter(EventFilter::All);
    Ok(CommandResult::new(message))
}

pub(super) fn list(
    model: &mut Model,
    patient_index: Index,
    filter: EventFilter,
) -> ExecResult<CommandResult> {
    let owner = resolve_patient(model, patient_index)?;
    model.focus_patient(&owner);
    model.set_medical_history_filter(filter);

    let count = model.filtered_medical_history().len();
    let name = model
        .active_patient()
        .map(|p| p.name.to_string())
        .unwrap_or_default();
    Ok(CommandResult::new(match filter {
        EventFilter::All => format!("Listed all {} medical history events of {}", count, name),
        EventFilter::OnDate(date) => format!(
            "{} medical history events of {} listed on {}",
            count, name, date
        ),
    }))
}

pub(super) fn edit(
    model: &mut Model,
    patient_index: Index,
    event_index: Index,
    descriptor: &EditMedicalHistoryDescriptor,
) -> ExecResult<CommandResult> {
    let (owner, target) = resolve(model, patient_index, event_index)?;
    let edited = descriptor.apply(&target);
    let message = format!("Edited medical history event: {}", edited);

    model.set_medical_history_event(&owner, target.id, edited)?;
    model.focus_patient(&owner);
    Ok(CommandResult::new(message))
}

pub(super) fn delete(
    model: &mut Model,
    patient_index: Index,
    event_index: Index,
) -> ExecResult<CommandResult> {
    let (owner, target) = resolve(model, patient_index, event_index)?;
    let removed = model.delete_medical_history_event(&owner, target.id)?;
    model.focus_patient(&owner);
    Ok(CommandResult::new(format!(
        "Deleted medical history event: {}",
        removed
    )))
}

fn resolve(
    model: &Model,
    patient_index: Index,
    event_index: Index,
) -> ExecResult<(Nric, MedicalHistoryEvent)> {
    let owner = resolve_patient(model, patient_index)?;
    let target = model
        .medical_history_view(&owner)
        .get(event_index.zero_based())
        .map(|e| (*e).clone())
        .ok_or(CommandError::InvalidMedicalHistoryIndex)?;
    Ok((owner, target))
}
