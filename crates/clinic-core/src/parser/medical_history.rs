//! Parsers for the medical history commands.

use crate::commands::{Command, CommandWord};
use crate::models::EditMedicalHistoryDescriptor;

use super::appointment::parse_event_filter;
use super::*;

const HISTORY_PREFIXES: [Prefix; 4] = [
    PREFIX_PATIENT_INDEX,
    PREFIX_DATE,
    PREFIX_MEDICAL_CONDITION,
    PREFIX_TREATMENT,
];

/// `add-hist PATIENT_INDEX d/DATE mc/CONDITION tr/TREATMENT`, patient index also accepted as `pi/`.
pub(super) fn parse_add(args: &str) -> ParseResult<Command> {
    let word = CommandWord::AddMedicalHistory;
    let map = tokenize(args, &HISTORY_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&HISTORY_PREFIXES)?;
    let patient_index = parse_owner_index(&map, word)?;
    let (Some(date), Some(condition), Some(treatment)) = (
        map.value(PREFIX_DATE),
        map.value(PREFIX_MEDICAL_CONDITION),
        map.value(PREFIX_TREATMENT),
    ) else {
        return Err(ParseError::invalid_format(word));
    };

    let in_format = |cause| ParseError::invalid_format_with(word, cause);
    Ok(Command::AddMedicalHistory {
        patient_index,
        date: parse_date(date).map_err(in_format)?,
        medical_condition: parse_medical_condition(condition).map_err(in_format)?,
        treatment: parse_treatment(treatment).map_err(in_format)?,
    })
}

/// `list-hist PATIENT_INDEX [d/DATE]`
pub(super) fn parse_list(args: &str) -> ParseResult<Command> {
    let word = CommandWord::ListMedicalHistory;
    let map = tokenize(args, &[PREFIX_PATIENT_INDEX, PREFIX_DATE]);

    map.verify_no_duplicate_prefixes_for(&[PREFIX_PATIENT_INDEX, PREFIX_DATE])?;
    let patient_index = parse_owner_index(&map, word)?;
    let filter = parse_event_filter(&map, word)?;

    Ok(Command::ListMedicalHistory {
        patient_index,
        filter,
    })
}

/// `edit-hist EVENT_INDEX pi/PATIENT_INDEX [d/DATE] [mc/CONDITION] [tr/TREATMENT]`
pub(super) fn parse_edit(args: &str) -> ParseResult<Command> {
    let word = CommandWord::EditMedicalHistory;
    let map = tokenize(args, &HISTORY_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&HISTORY_PREFIXES)?;
    let (event_index, patient_index) = parse_event_indices(&map, word)?;

    let descriptor = (|| -> ParseResult<_> {
        Ok(EditMedicalHistoryDescriptor {
            date: map.value(PREFIX_DATE).map(parse_date).transpose()?,
            medical_condition: map
                .value(PREFIX_MEDICAL_CONDITION)
                .map(parse_medical_condition)
                .transpose()?,
            treatment: map.value(PREFIX_TREATMENT).map(parse_treatment).transpose()?,
        })
    })()
    .map_err(|cause| ParseError::invalid_format_with(word, cause))?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::EditMedicalHistory {
        patient_index,
        event_index,
        descriptor,
    })
}

/// `delete-hist EVENT_INDEX pi/PATIENT_INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<Command> {
    let word = CommandWord::DeleteMedicalHistory;
    let map = tokenize(args, &[PREFIX_PATIENT_INDEX]);

    map.verify_no_duplicate_prefixes_for(&[PREFIX_PATIENT_INDEX])?;
    let (event_index, patient_index) = parse_event_indices(&map, word)?;

    Ok(Command::DeleteMedicalHistory {
        patient_index,
        event_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::models::FieldError;
    use crate::store::EventFilter;

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    #[test]
    fn test_add_all_fields() {
        let Ok(Command::AddMedicalHistory {
            patient_index,
            date,
            medical_condition,
            treatment,
        }) = parse_add(" pi/2 d/2023-06-15 mc/Influenza tr/Rest and fluids")
        else {
            panic!("expected an add-hist command");
        };

        assert_eq!(patient_index, index(2));
        assert_eq!(date.to_string(), "2023-06-15");
        assert_eq!(medical_condition.as_str(), "Influenza");
        assert_eq!(treatment.as_str(), "Rest and fluids");
    }

    #[test]
    fn test_tag_token_is_not_treatment() {
        // t/ is not a history prefix, so it stays part of the condition text.
        let Ok(Command::AddMedicalHistory {
            medical_condition, ..
        }) = parse_add(" 1 d/2023-06-15 mc/Flu t/x tr/Rest")
        else {
            panic!("expected an add-hist command");
        };
        assert_eq!(medical_condition.as_str(), "Flu t/x");
    }

    #[test]
    fn test_add_missing_treatment() {
        assert_eq!(
            parse_add(" 1 d/2023-06-15 mc/Influenza"),
            Err(ParseError::invalid_format(CommandWord::AddMedicalHistory))
        );
    }

    #[test]
    fn test_add_blank_condition_is_wrapped() {
        assert_eq!(
            parse_add(" 1 d/2023-06-15 mc/ tr/Rest"),
            Err(ParseError::invalid_format_with(
                CommandWord::AddMedicalHistory,
                ParseError::InvalidField(FieldError::MedicalCondition)
            ))
        );
    }

    #[test]
    fn test_conflicting_patient_indices() {
        assert!(matches!(
            parse_add(" 1 pi/2 d/2023-06-15 mc/Flu tr/Rest"),
            Err(ParseError::InvalidFormat { word: CommandWord::AddMedicalHistory, cause: Some(_) })
        ));
    }

    #[test]
    fn test_list_filters_by_date() {
        assert_eq!(
            parse_list(" pi/1 d/2023-06-15"),
            Ok(Command::ListMedicalHistory {
                patient_index: index(1),
                filter: EventFilter::OnDate("2023-06-15".parse().unwrap()),
            })
        );
    }

    #[test]
    fn test_edit_and_delete() {
        let Ok(Command::EditMedicalHistory { descriptor, .. }) = parse_edit(" 1 pi/1 tr/Antivirals") else {
            panic!("expected an edit-hist command");
        };
        assert_eq!(descriptor.treatment.unwrap().as_str(), "Antivirals");

        assert_eq!(parse_edit(" 1 pi/1"), Err(ParseError::NoFieldEdited));
        assert_eq!(
            parse_delete(" 1 pi/4"),
            Ok(Command::DeleteMedicalHistory {
                patient_index: index(4),
                event_index: index(1),
            })
        );
    }
}
