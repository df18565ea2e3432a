//! Typed commands and their execution against the [`Model`].
//!
//! Every command word maps to one [`Command`] variant carrying only the
//! values it needs. [`Command::execute`] is the single dispatch point; each
//! variant either succeeds with a [`CommandResult`] or fails before touching
//! the model.

mod appointment;
mod medical_history;
mod patient;

use thiserror::Error;

use crate::index::Index;
use crate::models::{
    EditAppointmentDescriptor, EditMedicalHistoryDescriptor, EditPatientDescriptor, EventDate,
    EventTime, MedicalCondition, Nric, Patient, Treatment,
};
use crate::store::{EventFilter, Model, StoreError};

// =========================================================================
// Command words
// =========================================================================

/// The first word of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Edit,
    Delete,
    Clear,
    Find,
    List,
    Exit,
    Help,
    AddAppointment,
    ListAppointments,
    EditAppointment,
    DeleteAppointment,
    AddMedicalHistory,
    ListMedicalHistory,
    EditMedicalHistory,
    DeleteMedicalHistory,
}

impl CommandWord {
    pub const ALL: [CommandWord; 16] = [
        CommandWord::Add,
        CommandWord::Edit,
        CommandWord::Delete,
        CommandWord::Clear,
        CommandWord::Find,
        CommandWord::List,
        CommandWord::Exit,
        CommandWord::Help,
        CommandWord::AddAppointment,
        CommandWord::ListAppointments,
        CommandWord::EditAppointment,
        CommandWord::DeleteAppointment,
        CommandWord::AddMedicalHistory,
        CommandWord::ListMedicalHistory,
        CommandWord::EditMedicalHistory,
        CommandWord::DeleteMedicalHistory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Edit => "edit",
            CommandWord::Delete => "delete",
            CommandWord::Clear => "clear",
            CommandWord::Find => "find",
            CommandWord::List => "list",
            CommandWord::Exit => "exit",
            CommandWord::Help => "help",
            CommandWord::AddAppointment => "add-appt",
            CommandWord::ListAppointments => "list-appt",
            CommandWord::EditAppointment => "edit-appt",
            CommandWord::DeleteAppointment => "delete-appt",
            CommandWord::AddMedicalHistory => "add-hist",
            CommandWord::ListMedicalHistory => "list-hist",
            CommandWord::EditMedicalHistory => "edit-hist",
            CommandWord::DeleteMedicalHistory => "delete-hist",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == word)
    }

    /// Usage text shown when the command is malformed.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Add => {
                "add: Adds a patient to the clinic book.\n\
                 Parameters: n/NAME ic/NRIC p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
                 Example: add n/John Doe ic/S1234567A p/98765432 e/johnd@example.com \
                 a/311, Clementi Ave 2, #02-25 t/diabetic"
            }
            CommandWord::Edit => {
                "edit: Edits the patient identified by the index number used in the displayed \
                 patient list. Existing values will be overwritten by the input values.\n\
                 Parameters: INDEX (must be a positive integer) [n/NAME] [ic/NRIC] [p/PHONE] \
                 [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
                 Example: edit 1 p/91234567 e/johndoe@example.com"
            }
            CommandWord::Delete => {
                "delete: Deletes the patient identified by the index number used in the \
                 displayed patient list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete 1"
            }
            CommandWord::Clear => "clear: Removes every patient from the clinic book.",
            CommandWord::Find => {
                "find: Finds all patients whose names contain any of the specified keywords \
                 (case-insensitive) and displays them as a list with index numbers.\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find alice bob charlie"
            }
            CommandWord::List => "list: Lists all patients.",
            CommandWord::Exit => "exit: Exits the program.",
            CommandWord::Help => "help: Shows program usage instructions.\nExample: help",
            CommandWord::AddAppointment => {
                "add-appt: Adds an appointment to the patient identified by the index number \
                 used in the displayed patient list.\n\
                 Parameters: PATIENT_INDEX (must be a positive integer) d/DATE [tm/TIME]\n\
                 Example: add-appt 1 d/2024-01-01 tm/14:30"
            }
            CommandWord::ListAppointments => {
                "list-appt: Lists the appointments of the patient identified by the index \
                 number used in the displayed patient list.\n\
                 Parameters: PATIENT_INDEX (must be a positive integer) [d/DATE]\n\
                 Example: list-appt 1"
            }
            CommandWord::EditAppointment => {
                "edit-appt: Edits the appointment identified by the index number used in the \
                 displayed appointment list.\n\
                 Parameters: INDEX (must be a positive integer) pi/PATIENT_INDEX [d/DATE] [tm/TIME]\n\
                 Example: edit-appt 1 pi/1 d/2024-01-02"
            }
            CommandWord::DeleteAppointment => {
                "delete-appt: Deletes the appointment identified by the index number used in \
                 the displayed appointment list.\n\
                 Parameters: INDEX (must be a positive integer) pi/PATIENT_INDEX\n\
                 Example: delete-appt 1 pi/1"
            }
            CommandWord::AddMedicalHistory => {
                "add-hist: Adds a medical history event to the patient identified by the index \
                 number used in the displayed patient list.\n\
                 Parameters: PATIENT_INDEX (must be a positive integer) d/DATE mc/MEDICAL_CONDITION \
                 tr/TREATMENT\n\
                 Example: add-hist 1 d/2023-06-15 mc/Influenza tr/Rest and fluids"
            }
            CommandWord::ListMedicalHistory => {
                "list-hist: Lists the medical history of the patient identified by the index \
                 number used in the displayed patient list.\n\
                 Parameters: PATIENT_INDEX (must be a positive integer) [d/DATE]\n\
                 Example: list-hist 1"
            }
            CommandWord::EditMedicalHistory => {
                "edit-hist: Edits the medical history event identified by the index number used \
                 in the displayed medical history list.\n\
                 Parameters: INDEX (must be a positive integer) pi/PATIENT_INDEX [d/DATE] \
                 [mc/MEDICAL_CONDITION] [tr/TREATMENT]\n\
                 Example: edit-hist 1 pi/1 tr/Antivirals"
            }
            CommandWord::DeleteMedicalHistory => {
                "delete-hist: Deletes the medical history event identified by the index number \
                 used in the displayed medical history list.\n\
                 Parameters: INDEX (must be a positive integer) pi/PATIENT_INDEX\n\
                 Example: delete-hist 1 pi/1"
            }
        }
    }
}

// =========================================================================
// Results and errors
// =========================================================================

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message for the user
    pub feedback: String,
    /// The display should show usage help
    pub show_help: bool,
    /// The application should terminate
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// A well-formed command that cannot run against the current state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("The patient index provided is invalid")]
    InvalidPatientIndex,

    #[error("The appointment index provided is invalid")]
    InvalidAppointmentIndex,

    #[error("The medical history event index provided is invalid")]
    InvalidMedicalHistoryIndex,

    #[error("This patient already exists in the clinic book")]
    DuplicatePatient,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ExecResult<T> = Result<T, CommandError>;

// =========================================================================
// Commands
// =========================================================================

/// A fully validated operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPatient(Patient),
    EditPatient {
        index: Index,
        descriptor: EditPatientDescriptor,
    },
    DeletePatient {
        index: Index,
    },
    FindPatients {
        keywords: Vec<String>,
    },
    ListPatients,
    Clear,
    Exit,
    Help,

    AddAppointment {
        patient_index: Index,
        date: EventDate,
        time: Option<EventTime>,
    },
    ListAppointments {
        patient_index: Index,
        filter: EventFilter,
    },
    EditAppointment {
        patient_index: Index,
        appointment_index: Index,
        descriptor: EditAppointmentDescriptor,
    },
    DeleteAppointment {
        patient_index: Index,
        appointment_index: Index,
    },

    AddMedicalHistory {
        patient_index: Index,
        date: EventDate,
        medical_condition: MedicalCondition,
        treatment: Treatment,
    },
    ListMedicalHistory {
        patient_index: Index,
        filter: EventFilter,
    },
    EditMedicalHistory {
        patient_index: Index,
        event_index: Index,
        descriptor: EditMedicalHistoryDescriptor,
    },
    DeleteMedicalHistory {
        patient_index: Index,
        event_index: Index,
    },
}

impl Command {
    /// The command word this command was parsed from.
    pub fn word(&self) -> CommandWord {
        match self {
            Command::AddPatient(_) => CommandWord::Add,
            Command::EditPatient { .. } => CommandWord::Edit,
            Command::DeletePatient { .. } => CommandWord::Delete,
            Command::FindPatients { .. } => CommandWord::Find,
            Command::ListPatients => CommandWord::List,
            Command::Clear => CommandWord::Clear,
            Command::Exit => CommandWord::Exit,
            Command::Help => CommandWord::Help,
            Command::AddAppointment { .. } => CommandWord::AddAppointment,
            Command::ListAppointments { .. } => CommandWord::ListAppointments,
            Command::EditAppointment { .. } => CommandWord::EditAppointment,
            Command::DeleteAppointment { .. } => CommandWord::DeleteAppointment,
            Command::AddMedicalHistory { .. } => CommandWord::AddMedicalHistory,
            Command::ListMedicalHistory { .. } => CommandWord::ListMedicalHistory,
            Command::EditMedicalHistory { .. } => CommandWord::EditMedicalHistory,
            Command::DeleteMedicalHistory { .. } => CommandWord::DeleteMedicalHistory,
        }
    }

    /// Run the command. On error the model is unchanged.
    pub fn execute(&self, model: &mut Model) -> ExecResult<CommandResult> {
        match self {
            Command::AddPatient(patient) => patient::add(model, patient),
            Command::EditPatient { index, descriptor } => patient::edit(model, *index, descriptor),
            Command::DeletePatient { index } => patient::delete(model, *index),
            Command::FindPatients { keywords } => Ok(patient::find(model, keywords)),
            Command::ListPatients => Ok(patient::list(model)),
            Command::Clear => Ok(patient::clear(model)),
            Command::Exit => Ok(CommandResult::exit(
                "Exiting Clinic Book as requested ...",
            )),
            Command::Help => Ok(CommandResult::help("Opened help window.")),

            Command::AddAppointment {
                patient_index,
                date,
                time,
            } => appointment::add(model, *patient_index, *date, *time),
            Command::ListAppointments {
                patient_index,
                filter,
            } => appointment::list(model, *patient_index, *filter),
            Command::EditAppointment {
                patient_index,
                appointment_index,
                descriptor,
            } => appointment::edit(model, *patient_index, *appointment_index, descriptor),
            Command::DeleteAppointment {
                patient_index,
                appointment_index,
            } => appointment::delete(model, *patient_index, *appointment_index),

            Command::AddMedicalHistory {
                patient_index,
                date,
                medical_condition,
                treatment,
            } => medical_history::add(
                model,
                *patient_index,
                *date,
                medical_condition,
                treatment,
            ),
            Command::ListMedicalHistory {
                patient_index,
                filter,
            } => medical_history::list(model, *patient_index, *filter),
            Command::EditMedicalHistory {
                patient_index,
                event_index,
                descriptor,
            } => medical_history::edit(model, *patient_index, *event_index, descriptor),
            Command::DeleteMedicalHistory {
                patient_index,
                event_index,
            } => medical_history::delete(model, *patient_index, *event_index),
        }
    }
}

/// NRIC of the patient at `index` in the filtered patient list.
fn resolve_patient(model: &Model, index: Index) -> ExecResult<Nric> {
    model
        .filtered_patients()
        .get(index.zero_based())
        .map(|patient| patient.nric.clone())
        .ok_or(CommandError::InvalidPatientIndex)
}
