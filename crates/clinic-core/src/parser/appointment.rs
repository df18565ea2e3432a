//! Parsers for the appointment commands.

use crate::commands::{Command, CommandWord};
use crate::models::EditAppointmentDescriptor;
use crate::store::EventFilter;

use super::*;

const APPOINTMENT_PREFIXES: [Prefix; 3] = [PREFIX_PATIENT_INDEX, PREFIX_DATE, PREFIX_TIME];

/// `add-appt PATIENT_INDEX d/DATE [tm/TIME]`, patient index also accepted as `pi/`.
pub(super) fn parse_add(args: &str) -> ParseResult<Command> {
    let word = CommandWord::AddAppointment;
    let map = tokenize(args, &APPOINTMENT_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&APPOINTMENT_PREFIXES)?;
    let patient_index = parse_owner_index(&map, word)?;
    let Some(date) = map.value(PREFIX_DATE) else {
        return Err(ParseError::invalid_format(word));
    };

    let in_format = |cause| ParseError::invalid_format_with(word, cause);
    let date = parse_date(date).map_err(in_format)?;
    let time = map
        .value(PREFIX_TIME)
        .map(parse_time)
        .transpose()
        .map_err(in_format)?;

    Ok(Command::AddAppointment {
        patient_index,
        date,
        time,
    })
}

/// `list-appt PATIENT_INDEX [d/DATE]`
pub(super) fn parse_list(args: &str) -> ParseResult<Command> {
    let word = CommandWord::ListAppointments;
    let map = tokenize(args, &[PREFIX_PATIENT_INDEX, PREFIX_DATE]);

    map.verify_no_duplicate_prefixes_for(&[PREFIX_PATIENT_INDEX, PREFIX_DATE])?;
    let patient_index = parse_owner_index(&map, word)?;
    let filter = parse_event_filter(&map, word)?;

    Ok(Command::ListAppointments {
        patient_index,
        filter,
    })
}

/// `edit-appt APPT_INDEX pi/PATIENT_INDEX [d/DATE] [tm/TIME]`
pub(super) fn parse_edit(args: &str) -> ParseResult<Command> {
    let word = CommandWord::EditAppointment;
    let map = tokenize(args, &APPOINTMENT_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&APPOINTMENT_PREFIXES)?;
    let (appointment_index, patient_index) = parse_event_indices(&map, word)?;

    let in_format = |cause| ParseError::invalid_format_with(word, cause);
    let descriptor = EditAppointmentDescriptor {
        date: map.value(PREFIX_DATE).map(parse_date).transpose().map_err(in_format)?,
        time: map.value(PREFIX_TIME).map(parse_time).transpose().map_err(in_format)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::EditAppointment {
        patient_index,
        appointment_index,
        descriptor,
    })
}

/// `delete-appt APPT_INDEX pi/PATIENT_INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<Command> {
    let word = CommandWord::DeleteAppointment;
    let map = tokenize(args, &[PREFIX_PATIENT_INDEX]);

    map.verify_no_duplicate_prefixes_for(&[PREFIX_PATIENT_INDEX])?;
    let (appointment_index, patient_index) = parse_event_indices(&map, word)?;

    Ok(Command::DeleteAppointment {
        patient_index,
        appointment_index,
    })
}

/// Optional `d/DATE` of a list command: absent shows every event.
pub(super) fn parse_event_filter(map: &ArgumentMultimap, word: CommandWord) -> ParseResult<EventFilter> {
    match map.value(PREFIX_DATE) {
        None => Ok(EventFilter::All),
        Some(text) => parse_date(text)
            .map(EventFilter::OnDate)
            .map_err(|cause| ParseError::invalid_format_with(word, cause)),
    }
}
