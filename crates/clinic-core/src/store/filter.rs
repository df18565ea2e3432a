//! Predicates behind the filtered views.

use crate::models::{EventDate, OwnedEvent, Patient};

/// Which patients the filtered patient list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatientFilter {
    #[default]
    All,
    /// Any name word equals any keyword, ignoring case
    NameContainsKeywords(Vec<String>),
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(patient.name.as_str(), keyword)),
        }
    }
}

/// Which events of the active patient the event lists show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    OnDate(EventDate),
}

impl EventFilter {
    pub fn matches<E: OwnedEvent>(&self, event: &E) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::OnDate(date) => event.date() == *date,
        }
    }
}

/// Whole-word, case-insensitive match of `word` among the words of `sentence`.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}
