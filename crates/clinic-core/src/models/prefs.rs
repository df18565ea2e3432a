//! User preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default location of the clinic book data file, relative to the working directory.
pub const DEFAULT_CLINIC_BOOK_FILE: &str = "data/clinicbook.json";

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// Top-left corner, if the window was ever placed
    pub window_coordinates: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740.0,
            window_height: 600.0,
            window_coordinates: None,
        }
    }
}

/// Preferences persisted alongside the clinic book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    #[serde(default)]
    gui_settings: GuiSettings,
    #[serde(default = "default_clinic_book_file_path")]
    clinic_book_file_path: PathBuf,
}

fn default_clinic_book_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_CLINIC_BOOK_FILE)
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            clinic_book_file_path: default_clinic_book_file_path(),
        }
    }
}

impl UserPreferences {
    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn clinic_book_file_path(&self) -> &Path {
        &self.clinic_book_file_path
    }

    pub fn set_clinic_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.clinic_book_file_path = path.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.clinic_book_file_path(), Path::new(DEFAULT_CLINIC_BOOK_FILE));
        assert_eq!(prefs.gui_settings().window_width, 740.0);
        assert_eq!(prefs.gui_settings().window_coordinates, None);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_setters() {
        let mut prefs = UserPreferences::default();
        prefs.set_clinic_book_file_path("other/book.json");
        prefs.set_gui_settings(GuiSettings {
            window_width: 1024.0,
            window_height: 768.0,
            window_coordinates: Some((10, 20)),
        });

        assert_eq!(prefs.clinic_book_file_path(), Path::new("other/book.json"));
        assert_eq!(prefs.gui_settings().window_coordinates, Some((10, 20)));
    }
}
