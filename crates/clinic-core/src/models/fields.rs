//! Validated field values.
//!
//! Every value type checks its format on construction, both from command text
//! (`FromStr`) and from stored JSON (`serde(try_from = "String")`), so a
//! `Patient` or event can never hold a malformed field.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar format for dates in command text and storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 24-hour clock format for appointment times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Field constraint violations. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,

    #[error("NRIC should start with S, T, F, G or M, followed by 7 digits and a letter")]
    Nric,

    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    Phone,

    #[error(
        "Emails should be of the format local-part@domain. The local-part should only contain \
         alphanumeric characters and +_.- and may not start or end with a special character. \
         The domain is made of labels separated by periods, and the last label must be at least \
         2 characters long"
    )]
    Email,

    #[error("Addresses can take any values, and it should not be blank")]
    Address,

    #[error("Tags can take any values, and it should not be blank")]
    Tag,

    #[error("Dates should be of the format YYYY-MM-DD and be a valid calendar date")]
    Date,

    #[error("Times should be of the format HH:MM on a 24-hour clock")]
    Time,

    #[error("Medical conditions can take any values, and it should not be blank")]
    MedicalCondition,

    #[error("Treatments can take any values, and it should not be blank")]
    Treatment,
}

pub type FieldResult<T> = Result<T, FieldError>;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").unwrap());

static NRIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[STFGM][0-9]{7}[A-Z]$").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.\-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*[[:alnum:]]{2,}(-[[:alnum:]]+)*$",
    )
    .unwrap()
});

fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Declares a string-backed field type whose values are checked by `$valid`.
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $error:expr, $valid:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Check a raw value against this field's format.
            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $valid;
                check(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(value: &str) -> FieldResult<Self> {
                if Self::is_valid(value) {
                    Ok(Self(value.to_string()))
                } else {
                    Err($error)
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> FieldResult<Self> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    /// Patient name.
    Name,
    FieldError::Name,
    |value| NAME_PATTERN.is_match(value)
);

text_field!(
    /// Contact number.
    Phone,
    FieldError::Phone,
    |value| value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
);

text_field!(
    /// Email address.
    Email,
    FieldError::Email,
    |value| EMAIL_PATTERN.is_match(value)
);

text_field!(
    /// Postal address, free text.
    Address,
    FieldError::Address,
    is_not_blank
);

text_field!(
    /// Label attached to a patient.
    Tag,
    FieldError::Tag,
    is_not_blank
);

text_field!(
    /// Diagnosis recorded in a medical history event.
    MedicalCondition,
    FieldError::MedicalCondition,
    is_not_blank
);

text_field!(
    /// Treatment recorded in a medical history event.
    Treatment,
    FieldError::Treatment,
    is_not_blank
);

/// National identity number, the identity key of a patient.
///
/// Input is accepted in any case and stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nric(String);

impl Nric {
    pub fn is_valid(value: &str) -> bool {
        NRIC_PATTERN.is_match(&value.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Nric {
    type Err = FieldError;

    fn from_str(value: &str) -> FieldResult<Self> {
        let upper = value.to_uppercase();
        if NRIC_PATTERN.is_match(&upper) {
            Ok(Self(upper))
        } else {
            Err(FieldError::Nric)
        }
    }
}

impl TryFrom<String> for Nric {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        value.parse()
    }
}

impl From<Nric> for String {
    fn from(value: Nric) -> Self {
        value.0
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(NaiveDate);

impl EventDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for EventDate {
    type Err = FieldError;

    fn from_str(value: &str) -> FieldResult<Self> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::Date)
    }
}

impl TryFrom<String> for EventDate {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        value.parse()
    }
}

impl From<EventDate> for String {
    fn from(value: EventDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Time of day of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTime(NaiveTime);

impl EventTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for EventTime {
    type Err = FieldError;

    fn from_str(value: &str) -> FieldResult<Self> {
        NaiveTime::parse_from_str(value, TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::Time)
    }
}

impl TryFrom<String> for EventTime {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        value.parse()
    }
}

impl From<EventTime> for String {
    fn from(value: EventTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}
