//! Command text to typed [`Command`]s.
//!
//! Parsing never touches the model: the same text always yields the same
//! command or the same error.

mod appointment;
mod fields;
mod medical_history;
mod patient;
mod prefix;
mod tokenizer;

pub use fields::*;
pub use prefix::*;
pub use tokenizer::*;

use strsim::jaro_winkler;
use thiserror::Error;
use tracing::debug;

use crate::commands::{Command, CommandWord};
use crate::index::Index;
use crate::models::FieldError;

/// Minimum Jaro-Winkler similarity for an unknown word to earn a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Malformed or incomplete command text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unknown command{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        word: String,
        suggestion: Option<CommandWord>,
    },

    #[error("Invalid command format! {}\n{}", cause_detail(.cause), usage_of(.word))]
    InvalidFormat {
        word: CommandWord,
        #[source]
        cause: Option<Box<ParseError>>,
    },

    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.0)
    )]
    DuplicatePrefixes(Vec<Prefix>),

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,

    #[error("Patient index given as both {preamble} and pi/{prefixed}")]
    ConflictingPatientIndex { preamble: Index, prefixed: Index },

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// The command is malformed; show its usage.
    pub fn invalid_format(word: CommandWord) -> Self {
        ParseError::InvalidFormat { word, cause: None }
    }

    /// The command is malformed because of `cause`; show both.
    pub fn invalid_format_with(word: CommandWord, cause: ParseError) -> Self {
        ParseError::InvalidFormat {
            word,
            cause: Some(Box::new(cause)),
        }
    }
}

fn suggestion_hint(suggestion: &Option<CommandWord>) -> String {
    suggestion
        .map(|word| format!(". Did you mean `{}`?", word.as_str()))
        .unwrap_or_default()
}

fn cause_detail(cause: &Option<Box<ParseError>>) -> String {
    cause.as_ref().map(|c| c.to_string()).unwrap_or_default()
}

fn usage_of(word: &CommandWord) -> &'static str {
    word.usage()
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse one command line.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };

    if word.is_empty() {
        return Err(ParseError::invalid_format(CommandWord::Help));
    }

    debug!(word, args, "Parsing command");

    let Some(command_word) = CommandWord::from_word(word) else {
        debug!(word, "Unknown command word");
        return Err(ParseError::UnknownCommand {
            word: word.to_string(),
            suggestion: suggest(word),
        });
    };

    match command_word {
        CommandWord::Add => patient::parse_add(args),
        CommandWord::Edit => patient::parse_edit(args),
        CommandWord::Delete => patient::parse_delete(args),
        CommandWord::Find => patient::parse_find(args),
        CommandWord::List => Ok(Command::ListPatients),
        CommandWord::Clear => Ok(Command::Clear),
        CommandWord::Exit => Ok(Command::Exit),
        CommandWord::Help => Ok(Command::Help),
        CommandWord::AddAppointment => appointment::parse_add(args),
        CommandWord::ListAppointments => appointment::parse_list(args),
        CommandWord::EditAppointment => appointment::parse_edit(args),
        CommandWord::DeleteAppointment => appointment::parse_delete(args),
        CommandWord::AddMedicalHistory => medical_history::parse_add(args),
        CommandWord::ListMedicalHistory => medical_history::parse_list(args),
        CommandWord::EditMedicalHistory => medical_history::parse_edit(args),
        CommandWord::DeleteMedicalHistory => medical_history::parse_delete(args),
    }
}

/// Closest known command word, if any is similar enough.
fn suggest(word: &str) -> Option<CommandWord> {
    CommandWord::ALL
        .iter()
        .map(|candidate| (*candidate, jaro_winkler(word, candidate.as_str())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}
