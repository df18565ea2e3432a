//! Splits argument text into a preamble and prefixed values.
//!
//! A prefix is recognised where it follows whitespace or opens the argument
//! text. Each value runs up to the next recognised prefix and is trimmed.

use std::collections::HashMap;

use super::{ParseError, ParseResult, Prefix};

/// Values found for each prefix, in order of occurrence, plus the preamble.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    ///
    /// `None` when the prefix never occurs; `Some("")` when it occurs without text.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of occurrence.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }

    /// Fail if any of `prefixes` occurs more than once, naming every offender.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let mut duplicates: Vec<Prefix> = Vec::new();
        for prefix in prefixes {
            if self.all_values(*prefix).len() > 1 && !duplicates.contains(prefix) {
                duplicates.push(*prefix);
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicates))
        }
    }
}

/// Tokenize `args` against the prefixes a command declares.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // The leading space lets a prefix at the very start be recognised.
    let text = format!(" {}", args);

    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| find_prefix_positions(&text, *prefix))
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(text.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        values: HashMap::new(),
        preamble: text[..preamble_end].trim().to_string(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(text.len(), |(next, _)| *next);
        let value = text[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

fn find_prefix_positions(text: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    text.match_indices(prefix.as_str())
        .filter(|(start, _)| {
            text[..*start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
        .map(|(start, _)| (start, prefix))
        .collect()
}
