//! Field parsers: raw argument text to validated values.
//!
//! Every parser trims its input first. Format failures surface as
//! [`ParseError::InvalidField`] carrying the field's constraint message.

use std::collections::BTreeSet;

use crate::commands::CommandWord;
use crate::index::Index;
use crate::models::{
    Address, Email, EventDate, EventTime, MedicalCondition, Name, Nric, Phone, Tag, Treatment,
};

use super::{ArgumentMultimap, ParseError, ParseResult, PREFIX_PATIENT_INDEX};

/// Parse a 1-based index. Zero, signs and non-digits are rejected.
pub fn parse_index(text: &str) -> ParseResult<Index> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(text: &str) -> ParseResult<Name> {
    Ok(text.trim().parse()?)
}

pub fn parse_nric(text: &str) -> ParseResult<Nric> {
    Ok(text.trim().parse()?)
}

pub fn parse_phone(text: &str) -> ParseResult<Phone> {
    Ok(text.trim().parse()?)
}

pub fn parse_email(text: &str) -> ParseResult<Email> {
    Ok(text.trim().parse()?)
}

pub fn parse_address(text: &str) -> ParseResult<Address> {
    Ok(text.trim().parse()?)
}

pub fn parse_tag(text: &str) -> ParseResult<Tag> {
    Ok(text.trim().parse()?)
}

/// Parse every tag value into a set; repeated tags collapse.
pub fn parse_tags<S: AsRef<str>>(values: &[S]) -> ParseResult<BTreeSet<Tag>> {
    values.iter().map(|v| parse_tag(v.as_ref())).collect()
}

/// Tags for an edit: `None` leaves tags alone, a single empty `t/` clears them.
pub fn parse_tags_for_edit<S: AsRef<str>>(values: &[S]) -> ParseResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.as_ref().trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

pub fn parse_date(text: &str) -> ParseResult<EventDate> {
    Ok(text.trim().parse()?)
}

pub fn parse_time(text: &str) -> ParseResult<EventTime> {
    Ok(text.trim().parse()?)
}

pub fn parse_medical_condition(text: &str) -> ParseResult<MedicalCondition> {
    Ok(text.trim().parse()?)
}

pub fn parse_treatment(text: &str) -> ParseResult<Treatment> {
    Ok(text.trim().parse()?)
}

/// Patient index of a command that takes no event index.
///
/// The index may be given as the preamble, as `pi/`, or both if they agree.
pub fn parse_owner_index(map: &ArgumentMultimap, word: CommandWord) -> ParseResult<Index> {
    let in_format = |cause| ParseError::invalid_format_with(word, cause);

    let prefixed = map
        .value(PREFIX_PATIENT_INDEX)
        .map(parse_index)
        .transpose()
        .map_err(in_format)?;
    let preamble = match map.preamble() {
        "" => None,
        text => Some(parse_index(text).map_err(in_format)?),
    };

    match (preamble, prefixed) {
        (Some(preamble), Some(prefixed)) if preamble != prefixed => {
            Err(in_format(ParseError::ConflictingPatientIndex { preamble, prefixed }))
        }
        (_, Some(index)) | (Some(index), None) => Ok(index),
        (None, None) => Err(ParseError::invalid_format(word)),
    }
}

/// Event index (preamble) and patient index (`pi/`) of an event command.
pub fn parse_event_indices(map: &ArgumentMultimap, word: CommandWord) -> ParseResult<(Index, Index)> {
    let in_format = |cause| ParseError::invalid_format_with(word, cause);

    let event_index = parse_index(map.preamble()).map_err(in_format)?;
    let patient_index = map
        .value(PREFIX_PATIENT_INDEX)
        .ok_or_else(|| ParseError::invalid_format(word))
        .and_then(|text| parse_index(text).map_err(in_format))?;

    Ok((event_index, patient_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldError;
    use crate::parser::tokenize;
    use proptest::prelude::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1"), Ok(Index::from_zero_based(0)));
        assert_eq!(parse_index("  10  "), Ok(Index::from_zero_based(9)));
        assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("+1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("a"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index(""), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("1 2"), Err(ParseError::InvalidIndex));
        assert_eq!(
            parse_index("99999999999999999999999999"),
            Err(ParseError::InvalidIndex)
        );
    }

    #[test]
    fn test_field_parsers_trim() {
        assert_eq!(parse_name("  Rachel Walker ").unwrap().as_str(), "Rachel Walker");
        assert_eq!(parse_phone(" 123456 ").unwrap().as_str(), "123456");
        assert_eq!(parse_date(" 2024-03-04 ").unwrap().to_string(), "2024-03-04");
    }

    #[test]
    fn test_field_parsers_report_constraints() {
        assert_eq!(
            parse_name("R@chel"),
            Err(ParseError::InvalidField(FieldError::Name))
        );
        assert_eq!(
            parse_email("example.com"),
            Err(ParseError::InvalidField(FieldError::Email))
        );
        assert_eq!(
            parse_treatment("   "),
            Err(ParseError::InvalidField(FieldError::Treatment))
        );
    }

    #[test]
    fn test_parse_tags_collapses_repeats() {
        let tags = parse_tags(&["friend", "neighbour", "friend"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags(&["friend", ""]).is_err());
    }

    #[test]
    fn test_parse_tags_for_edit() {
        assert_eq!(parse_tags_for_edit::<&str>(&[]), Ok(None));
        assert_eq!(parse_tags_for_edit(&[""]), Ok(Some(BTreeSet::new())));
        assert_eq!(parse_tags_for_edit(&["vip"]).unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_owner_index_from_preamble_or_prefix() {
        let word = CommandWord::AddAppointment;
        let expected = Index::from_zero_based(1);

        assert_eq!(parse_owner_index(&tokenize("2", &[PREFIX_PATIENT_INDEX]), word), Ok(expected));
        assert_eq!(parse_owner_index(&tokenize("pi/2", &[PREFIX_PATIENT_INDEX]), word), Ok(expected));
        assert_eq!(parse_owner_index(&tokenize("2 pi/2", &[PREFIX_PATIENT_INDEX]), word), Ok(expected));

        assert!(matches!(
            parse_owner_index(&tokenize("1 pi/2", &[PREFIX_PATIENT_INDEX]), word),
            Err(ParseError::InvalidFormat { cause: Some(_), .. })
        ));
        assert_eq!(
            parse_owner_index(&tokenize("", &[PREFIX_PATIENT_INDEX]), word),
            Err(ParseError::invalid_format(word))
        );
    }

    #[test]
    fn test_event_indices_require_both() {
        let word = CommandWord::DeleteAppointment;

        assert_eq!(
            parse_event_indices(&tokenize("3 pi/1", &[PREFIX_PATIENT_INDEX]), word),
            Ok((Index::from_zero_based(2), Index::from_zero_based(0)))
        );
        assert_eq!(
            parse_event_indices(&tokenize("3", &[PREFIX_PATIENT_INDEX]), word),
            Err(ParseError::invalid_format(word))
        );
        assert_eq!(
            parse_event_indices(&tokenize("pi/1", &[PREFIX_PATIENT_INDEX]), word),
            Err(ParseError::invalid_format_with(word, ParseError::InvalidIndex))
        );
    }

    proptest! {
        #[test]
        fn prop_positive_integers_parse_to_zero_based(n in 1usize..1_000_000) {
            let index = parse_index(&n.to_string()).unwrap();
            prop_assert_eq!(index.zero_based(), n - 1);
            prop_assert_eq!(index.one_based(), n);
        }

        #[test]
        fn prop_non_digit_text_is_rejected(text in "[a-zA-Z/-]{1,10}") {
            prop_assert_eq!(parse_index(&text), Err(ParseError::InvalidIndex));
        }
    }
}
