//! Persistence of the clinic book and user preferences.

mod json;
mod sample;

pub use json::*;
pub use sample::*;

use std::path::Path;

use thiserror::Error;

use crate::models::UserPreferences;
use crate::store::ClinicBook;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file contains illegal values: {0}")]
    IllegalValue(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Load/save contract for the clinic book and preferences.
///
/// Reads return `Ok(None)` when the file does not exist yet, so callers can
/// tell a first run apart from a damaged file.
pub trait Storage {
    fn clinic_book_file_path(&self) -> &Path;

    fn read_clinic_book(&self) -> StorageResult<Option<ClinicBook>>;

    fn save_clinic_book(&self, book: &ClinicBook) -> StorageResult<()>;

    fn user_prefs_file_path(&self) -> &Path;

    fn read_user_prefs(&self) -> StorageResult<Option<UserPreferences>>;

    fn save_user_prefs(&self, prefs: &UserPreferences) -> StorageResult<()>;
}
