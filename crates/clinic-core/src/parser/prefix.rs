//! Argument prefixes of the command grammar.

use std::fmt;

/// A token such as `n/` that marks the start of a named argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_NRIC: Prefix = Prefix::new("ic/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TIME: Prefix = Prefix::new("tm/");
pub const PREFIX_MEDICAL_CONDITION: Prefix = Prefix::new("mc/");
pub const PREFIX_TREATMENT: Prefix = Prefix::new("tr/");
pub const PREFIX_PATIENT_INDEX: Prefix = Prefix::new("pi/");
