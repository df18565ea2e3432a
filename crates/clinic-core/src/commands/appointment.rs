//! Execution of the appointment commands.
//!
//! The owning patient is resolved against the filtered patient list first,
//! then the appointment against that patient's appointment view. Both
//! resolutions finish before anything is mutated, and the store re-checks that
//! the owner still holds the handle when it mutates.

use crate::index::Index;
use crate::models::{AppointmentEvent, EditAppointmentDescriptor, EventDate, EventTime, Nric};
use crate::store::{EventFilter, Model};

use super::{resolve_patient, CommandError, CommandResult, ExecResult};

pub(super) fn add(
    model: &mut Model,
    patient_index: Index,
    date: EventDate,
    time: Option<EventTime>,
) -> ExecResult<CommandResult> {
    let owner = resolve_patient(model, patient_index)?;
    let appointment = AppointmentEvent::new(date, time);
    let message = format!("New appointment added: {}", appointment);

    model.add_appointment(&owner, appointment)?;
    model.focus_patient(&owner);
    model.set_appointment_filter(EventFilter::All);
    Ok(CommandResult::new(message))
}

pub(super) fn list(
    model: &mut Model,
    patient_index: Index,
    filter: EventFilter,
) -> ExecResult<CommandResult> {
    let owner = resolve_patient(model, patient_index)?;
    model.focus_patient(&owner);
    model.set_appointment_filter(filter);

    let count = model.filtered_appointments().len();
    let name = model
        .active_patient()
        .map(|p| p.name.to_string())
        .unwrap_or_default();
    Ok(CommandResult::new(match filter {
        EventFilter::All => format!("Listed all {} appointments of {}", count, name),
        EventFilter::OnDate(date) => {
            format!("{} appointments of {} listed on {}", count, name, date)
        }
    }))
}

pub(super) fn edit(
    model: &mut Model,
    patient_index: Index,
    appointment_index: Index,
    descriptor: &EditAppointmentDescriptor,
) -> ExecResult<CommandResult> {
    let (owner, target) = resolve(model, patient_index, appointment_index)?;
    let edited = descriptor.apply(&target);
    let message = format!("Edited appointment: {}", edited);

    model.set_appointment(&owner, target.id, edited)?;
    model.focus_patient(&owner);
    Ok(CommandResult::new(message))
}

pub(super) fn delete(
    model: &mut Model,
    patient_index: Index,
    appointment_index: Index,
) -> ExecResult<CommandResult> {
    let (owner, target) = resolve(model, patient_index, appointment_index)?;
    let removed = model.delete_appointment(&owner, target.id)?;
    model.focus_patient(&owner);
    Ok(CommandResult::new(format!("Deleted appointment: {}", removed)))
}

/// Owner NRIC and a copy of the addressed appointment.
fn resolve(
    model: &Model,
    patient_index: Index,
    appointment_index: Index,
) -> ExecResult<(Nric, AppointmentEvent)> {
    let owner = resolve_patient(model, patient_index)?;
    let target = model
        .appointments_view(&owner)
        .get(appointment_index.zero_based())
        .map(|a| (*a).clone())
        .ok_or(CommandError::InvalidAppointmentIndex)?;
    Ok((owner, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{appointment, typical_book};
    use crate::models::UserPreferences;
    use crate::store::ClinicBook;

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    fn date(text: &str) -> EventDate {
        text.parse().unwrap()
    }

    fn alice() -> Nric {
        "S1234567A".parse().unwrap()
    }

    /// Typical book where Alice has appointments on the given dates.
    fn model_with(dates: &[&str]) -> Model {
        let mut model = Model::new(typical_book(), UserPreferences::default());
        for d in dates {
            model.add_appointment(&alice(), appointment(d)).unwrap();
        }
        model
    }

    fn alice_dates(model: &Model) -> Vec<String> {
        model
            .clinic_book()
            .patient(&alice())
            .unwrap()
            .appointments
            .iter()
            .map(|a| a.date.to_string())
            .collect()
    }

    #[test]
    fn test_add_on_missing_patient_appends_nothing() {
        let mut model = Model::new(ClinicBook::new(), UserPreferences::default());
        assert_eq!(
            add(&mut model, index(1), date("2024-01-01"), None),
            Err(CommandError::InvalidPatientIndex)
        );
        assert!(model.clinic_book().is_empty());
    }

    #[test]
    fn test_add_appends_and_focuses() {
        let mut model = model_with(&["2024-01-01"]);

        let result = add(&mut model, index(1), date("2024-03-01"), None).unwrap();
        assert_eq!(result.feedback, "New appointment added: Date: 2024-03-01");
        assert_eq!(alice_dates(&model), ["2024-01-01", "2024-03-01"]);
        assert_eq!(model.filtered_appointments().len(), 2);
    }

    #[test]
    fn test_list_filters_active_patient() {
        let mut model = model_with(&["2024-01-01", "2024-02-01", "2024-01-01"]);

        let result = list(&mut model, index(1), EventFilter::OnDate(date("2024-01-01"))).unwrap();
        assert_eq!(
            result.feedback,
            "2 appointments of Alice Pauline listed on 2024-01-01"
        );
        assert_eq!(model.filtered_appointments().len(), 2);
    }

    #[test]
    fn test_delete_addresses_filtered_position() {
        let mut model = model_with(&["2024-01-01", "2024-02-01", "2024-03-01"]);
        list(&mut model, index(1), EventFilter::OnDate(date("2024-03-01"))).unwrap();

        delete(&mut model, index(1), index(1)).unwrap();
        assert_eq!(alice_dates(&model), ["2024-01-01", "2024-02-01"]);
    }

    #[test]
    fn test_delete_leaves_other_patients_alone() {
        let mut model = model_with(&["2024-01-01"]);
        let benson: Nric = "S2345678B".parse().unwrap();
        model.add_appointment(&benson, appointment("2024-01-01")).unwrap();

        delete(&mut model, index(2), index(1)).unwrap();
        assert_eq!(alice_dates(&model), ["2024-01-01"]);
        assert!(model.clinic_book().patient(&benson).unwrap().appointments.is_empty());
    }

    #[test]
    fn test_invalid_indices_do_not_mutate() {
        let mut model = model_with(&["2024-01-01"]);
        let before = model.clinic_book().clone();

        assert_eq!(
            delete(&mut model, index(1), index(2)),
            Err(CommandError::InvalidAppointmentIndex)
        );
        assert_eq!(
            delete(&mut model, index(9), index(1)),
            Err(CommandError::InvalidPatientIndex)
        );
        assert_eq!(model.clinic_book(), &before);
    }

    #[test]
    fn test_edit_keeps_position_and_handle() {
        let mut model = model_with(&["2024-01-01", "2024-02-01"]);
        let original_id = model.clinic_book().patient(&alice()).unwrap().appointments[1].id;

        let descriptor = EditAppointmentDescriptor {
            time: Some("10:15".parse().unwrap()),
            ..Default::default()
        };
        let result = edit(&mut model, index(1), index(2), &descriptor).unwrap();
        assert_eq!(result.feedback, "Edited appointment: Date: 2024-02-01; Time: 10:15");

        let edited = &model.clinic_book().patient(&alice()).unwrap().appointments[1];
        assert_eq!(edited.id, original_id);
        assert_eq!(edited.time.unwrap().to_string(), "10:15");
    }
}
