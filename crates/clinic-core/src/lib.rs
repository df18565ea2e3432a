//! Clinic Book Core Library
//!
//! Single-user clinic records driven by short text commands.
//!
//! # Architecture
//!
//! ```text
//! "delete-appt 1 pi/2"
//!         │
//!         ▼
//!  Tokenizer → Field parsers → Command parser      (parser)
//!                                   │
//!                                   ▼
//!                         Command::execute(&mut Model)   (commands)
//!                                   │
//!                 ┌─────────────────┼──────────────────┐
//!                 ▼                 ▼                  ▼
//!            ClinicBook      filtered patients   active patient's
//!          (patients own     (find / list)      appointments and
//!            their events)                      medical history
//!                                   │
//!                                   ▼
//!                        Storage::save_clinic_book      (storage)
//! ```
//!
//! # Core Principle
//!
//! **Positions are resolved to records before anything changes.** Commands
//! address the list the user is looking at; the position is turned into an
//! NRIC or event handle first and re-checked by the store on mutation.
//!
//! # Modules
//!
//! - [`models`]: Validated fields, Patient, appointment and medical history events, preferences
//! - [`parser`]: Command-line grammar
//! - [`commands`]: Typed commands and their execution
//! - [`store`]: ClinicBook aggregate and the filtered Model
//! - [`storage`]: JSON persistence and sample data
//! - [`logic`]: Facade tying the above together

pub mod commands;
pub mod index;
pub mod logic;
pub mod models;
pub mod parser;
pub mod storage;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use commands::{Command, CommandError, CommandResult, CommandWord};
pub use index::Index;
pub use logic::Logic;
pub use models::{
    AppointmentEvent, GuiSettings, MedicalHistoryEvent, Patient, UserPreferences,
};
pub use parser::{parse_command, ParseError};
pub use storage::{sample_clinic_book, JsonStorage, Storage, StorageError};
pub use store::{ClinicBook, EventFilter, Model, PatientFilter};

use thiserror::Error;

/// Any failure of a command line, ready to show to the user.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0}")]
    Save(#[source] StorageError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;
