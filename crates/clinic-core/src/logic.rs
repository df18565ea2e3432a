//! The facade the display layer talks to.

use std::path::Path;

use tracing::{info, warn};

use crate::commands::CommandResult;
use crate::models::{AppointmentEvent, GuiSettings, MedicalHistoryEvent, Patient};
use crate::parser::parse_command;
use crate::storage::Storage;
use crate::store::{ClinicBook, Model};
use crate::{ClinicError, ClinicResult};

/// Parses and executes command lines, saving the clinic book after each one.
pub struct Logic<S: Storage> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Run one command line.
    ///
    /// A parse or command failure leaves the model untouched. A save failure
    /// is reported after the command has taken effect in memory.
    pub fn execute(&mut self, command_text: &str) -> ClinicResult<CommandResult> {
        let command = parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;
        info!(command = command.word().as_str(), "Executed command");

        if let Err(e) = self.storage.save_clinic_book(self.model.clinic_book()) {
            warn!(
                path = %self.storage.clinic_book_file_path().display(),
                error = %e,
                "Failed to save clinic book"
            );
            return Err(ClinicError::Save(e));
        }

        Ok(result)
    }

    /// Persist the current preferences.
    pub fn save_user_prefs(&self) -> ClinicResult<()> {
        self.storage
            .save_user_prefs(self.model.user_prefs())
            .map_err(ClinicError::Save)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clinic_book(&self) -> &ClinicBook {
        self.model.clinic_book()
    }

    pub fn filtered_patients(&self) -> Vec<&Patient> {
        self.model.filtered_patients()
    }

    pub fn active_patient(&self) -> Option<&Patient> {
        self.model.active_patient()
    }

    pub fn filtered_appointments(&self) -> Vec<&AppointmentEvent> {
        self.model.filtered_appointments()
    }

    pub fn filtered_medical_history(&self) -> Vec<&MedicalHistoryEvent> {
        self.model.filtered_medical_history()
    }

    pub fn clinic_book_file_path(&self) -> &Path {
        self.model.clinic_book_file_path()
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.model.set_gui_settings(gui_settings);
    }
}
