//! Parsers for the patient commands.

use crate::commands::{Command, CommandWord};
use crate::models::{EditPatientDescriptor, Patient};

use super::*;

const PATIENT_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];

/// Every patient prefix except the repeatable tag.
const SINGLE_VALUED: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
];

/// `add n/NAME ic/NRIC p/PHONE e/EMAIL a/ADDRESS [t/TAG]...`
pub(super) fn parse_add(args: &str) -> ParseResult<Command> {
    let word = CommandWord::Add;
    let map = tokenize(args, &PATIENT_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;
    if !map.contains_all(&SINGLE_VALUED) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(word));
    }

    let field = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    let patient = (|| -> ParseResult<Patient> {
        Ok(Patient::new(
            parse_name(field(PREFIX_NAME))?,
            parse_nric(field(PREFIX_NRIC))?,
            parse_phone(field(PREFIX_PHONE))?,
            parse_email(field(PREFIX_EMAIL))?,
            parse_address(field(PREFIX_ADDRESS))?,
            parse_tags(map.all_values(PREFIX_TAG))?,
        ))
    })()
    .map_err(|cause| ParseError::invalid_format_with(word, cause))?;

    Ok(Command::AddPatient(patient))
}

/// `edit INDEX [n/NAME] [ic/NRIC] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...`
pub(super) fn parse_edit(args: &str) -> ParseResult<Command> {
    let word = CommandWord::Edit;
    let map = tokenize(args, &PATIENT_PREFIXES);

    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;
    let in_format = |cause| ParseError::invalid_format_with(word, cause);
    let index = parse_index(map.preamble()).map_err(in_format)?;

    let descriptor = (|| -> ParseResult<_> {
        Ok(EditPatientDescriptor {
            name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
            nric: map.value(PREFIX_NRIC).map(parse_nric).transpose()?,
            phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        })
    })()
    .map_err(in_format)?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::EditPatient { index, descriptor })
}

/// `delete INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<Command> {
    let index = parse_index(args)
        .map_err(|cause| ParseError::invalid_format_with(CommandWord::Delete, cause))?;
    Ok(Command::DeletePatient { index })
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub(super) fn parse_find(args: &str) -> ParseResult<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(CommandWord::Find));
    }
    Ok(Command::FindPatients { keywords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::models::FieldError;

    const VALID_ADD: &str = " n/Amy Bee ic/s7654321b p/11111111 e/amy@example.com a/Block 312, Amy Street 1 t/friend";

    #[test]
    fn test_add_all_fields_present() {
        let Ok(Command::AddPatient(patient)) = parse_add(VALID_ADD) else {
            panic!("expected an add command");
        };

        assert_eq!(patient.name.as_str(), "Amy Bee");
        assert_eq!(patient.nric.as_str(), "S7654321B");
        assert_eq!(patient.address.as_str(), "Block 312, Amy Street 1");
        assert_eq!(patient.tags.len(), 1);
        assert!(patient.appointments.is_empty());
    }

    #[test]
    fn test_add_multiple_tags_accepted() {
        let input = format!("{VALID_ADD} t/husband t/friend");
        let Ok(Command::AddPatient(patient)) = parse_add(&input) else {
            panic!("expected an add command");
        };
        assert_eq!(patient.tags.len(), 2);
    }

    #[test]
    fn test_add_missing_field_is_invalid_format() {
        let input = " n/Amy Bee ic/S7654321B p/11111111 a/Block 312";
        assert_eq!(parse_add(input), Err(ParseError::invalid_format(CommandWord::Add)));
    }

    #[test]
    fn test_add_non_empty_preamble_is_invalid_format() {
        let input = format!(" some preamble{VALID_ADD}");
        assert_eq!(parse_add(&input), Err(ParseError::invalid_format(CommandWord::Add)));
    }

    #[test]
    fn test_add_duplicates_reported_before_missing_fields() {
        assert_eq!(
            parse_add(" n/Amy n/Bob p/123 p/456"),
            Err(ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]))
        );
    }

    #[test]
    fn test_add_invalid_field_is_wrapped() {
        let input = VALID_ADD.replace("p/11111111", "p/91a");
        assert_eq!(
            parse_add(&input),
            Err(ParseError::invalid_format_with(
                CommandWord::Add,
                ParseError::InvalidField(FieldError::Phone)
            ))
        );
    }

    #[test]
    fn test_edit_subset_of_fields() {
        let Ok(Command::EditPatient { index, descriptor }) = parse_edit("2 p/91234567 t/") else {
            panic!("expected an edit command");
        };

        assert_eq!(index, Index::from_zero_based(1));
        assert_eq!(descriptor.phone.unwrap().as_str(), "91234567");
        assert_eq!(descriptor.tags, Some(Default::default()));
        assert!(descriptor.name.is_none());
    }

    #[test]
    fn test_edit_without_fields() {
        assert_eq!(parse_edit("1"), Err(ParseError::NoFieldEdited));
    }

    #[test]
    fn test_edit_bad_index() {
        assert_eq!(
            parse_edit("0 n/Amy"),
            Err(ParseError::invalid_format_with(CommandWord::Edit, ParseError::InvalidIndex))
        );
        assert_eq!(
            parse_edit("n/Amy"),
            Err(ParseError::invalid_format_with(CommandWord::Edit, ParseError::InvalidIndex))
        );
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            parse_delete(" 1 "),
            Ok(Command::DeletePatient {
                index: Index::from_zero_based(0)
            })
        );
        assert!(matches!(
            parse_delete("a"),
            Err(ParseError::InvalidFormat { word: CommandWord::Delete, .. })
        ));
    }

    #[test]
    fn test_find_splits_keywords() {
        assert_eq!(
            parse_find(" \n Alice \t Bob  "),
            Ok(Command::FindPatients {
                keywords: vec!["Alice".into(), "Bob".into()]
            })
        );
        assert_eq!(parse_find("   "), Err(ParseError::invalid_format(CommandWord::Find)));
    }
}
