//! JSON file storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Patient, UserPreferences};
use crate::store::{ClinicBook, StoreError};

use super::{Storage, StorageError, StorageResult};

/// On-disk shape of the clinic book.
#[derive(Debug, Serialize, Deserialize)]
struct JsonClinicBook {
    #[serde(default)]
    patients: Vec<Patient>,
}

impl JsonClinicBook {
    fn from_book(book: &ClinicBook) -> Self {
        Self {
            patients: book.patients().to_vec(),
        }
    }

    fn into_book(self) -> StorageResult<ClinicBook> {
        ClinicBook::from_patients(self.patients).map_err(|e| match e {
            StoreError::DuplicatePatient(nric) => {
                StorageError::IllegalValue(format!("Patients list contains duplicate NRIC {}", nric))
            }
            StoreError::DuplicateEventId { nric, id } => StorageError::IllegalValue(format!(
                "Patient {} has more than one event with id {}",
                nric, id
            )),
            other => StorageError::IllegalValue(other.to_string()),
        })
    }
}

/// Clinic book and preferences kept in two JSON files.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    clinic_book_path: PathBuf,
    user_prefs_path: PathBuf,
}

impl JsonStorage {
    pub fn new(clinic_book_path: impl Into<PathBuf>, user_prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            clinic_book_path: clinic_book_path.into(),
            user_prefs_path: user_prefs_path.into(),
        }
    }

    /// Point the clinic book at another file, e.g. after preferences load.
    pub fn set_clinic_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.clinic_book_path = path.into();
    }
}

impl Storage for JsonStorage {
    fn clinic_book_file_path(&self) -> &Path {
        &self.clinic_book_path
    }

    fn read_clinic_book(&self) -> StorageResult<Option<ClinicBook>> {
        read_json_file::<JsonClinicBook>(&self.clinic_book_path)?
            .map(JsonClinicBook::into_book)
            .transpose()
    }

    fn save_clinic_book(&self, book: &ClinicBook) -> StorageResult<()> {
        write_json_file(&self.clinic_book_path, &JsonClinicBook::from_book(book))
    }

    fn user_prefs_file_path(&self) -> &Path {
        &self.user_prefs_path
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPreferences>> {
        read_json_file(&self.user_prefs_path)
    }

    fn save_user_prefs(&self, prefs: &UserPreferences) -> StorageResult<()> {
        write_json_file(&self.user_prefs_path, prefs)
    }
}

/// Read and deserialize `path`; `None` if the file does not exist.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Data file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Serialize `value` to `path` atomically: write a temp file, then rename.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    debug!(path = %path.display(), "Saved data file");
    Ok(())
}
