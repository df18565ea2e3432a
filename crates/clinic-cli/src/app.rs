//! Bootstrap and the interactive loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clinic_core::models::DEFAULT_CLINIC_BOOK_FILE;
use clinic_core::{
    sample_clinic_book, ClinicBook, CommandResult, CommandWord, JsonStorage, Logic, Model,
    Storage, UserPreferences,
};
use tracing::{info, warn};

/// Load preferences and the clinic book, falling back instead of failing.
///
/// Missing preferences or an unreadable preferences file give defaults. A
/// missing data file gives the sample book; an unreadable one gives an empty
/// book.
pub fn init_logic(user_prefs_path: &Path, data_override: Option<PathBuf>) -> Logic<JsonStorage> {
    let mut storage = JsonStorage::new(DEFAULT_CLINIC_BOOK_FILE, user_prefs_path);

    let mut prefs = match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!(path = %user_prefs_path.display(), "Preferences file not found, using defaults");
            UserPreferences::default()
        }
        Err(e) => {
            warn!(error = %e, "Preferences file could not be loaded, using defaults");
            UserPreferences::default()
        }
    };
    if let Some(path) = data_override {
        prefs.set_clinic_book_file_path(path);
    }
    storage.set_clinic_book_file_path(prefs.clinic_book_file_path());

    let book = match storage.read_clinic_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("Data file not found, starting with a sample clinic book");
            sample_clinic_book().unwrap_or_else(|e| {
                warn!(error = %e, "Sample clinic book is invalid, starting empty");
                ClinicBook::new()
            })
        }
        Err(e) => {
            warn!(error = %e, "Data file could not be loaded, starting with an empty clinic book");
            ClinicBook::new()
        }
    };

    info!(
        patients = book.len(),
        path = %storage.clinic_book_file_path().display(),
        "Clinic book ready"
    );
    Logic::new(Model::new(book, prefs), storage)
}

/// Run a single command line and print the outcome.
pub fn run_once<S: Storage, W: Write>(
    logic: &mut Logic<S>,
    command: &str,
    out: &mut W,
) -> anyhow::Result<bool> {
    let ok = execute_and_render(logic, command, out)?.is_some();
    save_prefs(logic);
    Ok(ok)
}

/// Read command lines from `input` until `exit` or end of input.
pub fn run_repl<S: Storage, R: BufRead, W: Write>(
    logic: &mut Logic<S>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    render(logic, out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        if let Some(result) = execute_and_render(logic, &line, out)? {
            if result.exit {
                break;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    save_prefs(logic);
    Ok(())
}

fn execute_and_render<S: Storage, W: Write>(
    logic: &mut Logic<S>,
    command: &str,
    out: &mut W,
) -> anyhow::Result<Option<CommandResult>> {
    match logic.execute(command) {
        Ok(result) => {
            writeln!(out, "{}", result.feedback)?;
            if result.show_help {
                writeln!(out, "{}", help_text())?;
            }
            if !result.exit {
                render(logic, out)?;
            }
            Ok(Some(result))
        }
        Err(e) => {
            writeln!(out, "{}", e)?;
            Ok(None)
        }
    }
}

fn save_prefs<S: Storage>(logic: &Logic<S>) {
    if let Err(e) = logic.save_user_prefs() {
        warn!(error = %e, "Failed to save preferences");
    }
}

/// Usage of every command, one block each.
pub fn help_text() -> String {
    CommandWord::ALL
        .iter()
        .map(CommandWord::usage)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Print the filtered patient list and the active patient's event lists.
pub fn render<S: Storage, W: Write>(logic: &Logic<S>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Patients:")?;
    for (i, patient) in logic.filtered_patients().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, patient)?;
    }

    if let Some(patient) = logic.active_patient() {
        writeln!(out, "Appointments of {}:", patient.name)?;
        for (i, appointment) in logic.filtered_appointments().iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, appointment)?;
        }
        writeln!(out, "Medical history of {}:", patient.name)?;
        for (i, event) in logic.filtered_medical_history().iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, event)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn logic_in(dir: &TempDir) -> Logic<JsonStorage> {
        init_logic(
            &dir.path().join("preferences.json"),
            Some(dir.path().join("clinicbook.json")),
        )
    }

    #[test]
    fn test_missing_data_file_starts_with_sample() {
        let dir = TempDir::new().unwrap();
        let logic = logic_in(&dir);

        let names: Vec<_> = logic.clinic_book().patients().iter().map(|p| &p.name).collect();
        let sample = sample_clinic_book().unwrap();
        let expected: Vec<_> = sample.patients().iter().map(|p| &p.name).collect();
        assert_eq!(names, expected);
        assert_eq!(logic.clinic_book_file_path(), dir.path().join("clinicbook.json"));
    }

    #[test]
    fn test_invalid_data_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("clinicbook.json"), "not json").unwrap();

        let logic = logic_in(&dir);
        assert!(logic.clinic_book().is_empty());
    }

    #[test]
    fn test_invalid_preferences_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("preferences.json"), "[1, 2]").unwrap();

        let logic = init_logic(&dir.path().join("preferences.json"), None);
        assert_eq!(logic.clinic_book_file_path(), Path::new(DEFAULT_CLINIC_BOOK_FILE));
    }

    #[test]
    fn test_repl_runs_until_exit() {
        let dir = TempDir::new().unwrap();
        let mut logic = logic_in(&dir);
        let input = Cursor::new("clear\n\nadd n/Amy ic/S1234567A p/123 e/a@b.com a/Blk 1\nbogus\nexit\nlist\n");
        let mut out = Vec::new();

        run_repl(&mut logic, input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Clinic book has been cleared!"));
        assert!(out.contains("  1. Amy; NRIC: S1234567A"));
        assert!(out.contains("Unknown command"));
        assert!(!out.contains("Listed all patients"));
        assert!(dir.path().join("preferences.json").exists());
    }

    #[test]
    fn test_run_once_reports_failure() {
        let dir = TempDir::new().unwrap();
        let mut logic = logic_in(&dir);
        let mut out = Vec::new();

        assert!(!run_once(&mut logic, "delete 999", &mut out).unwrap());
        assert!(run_once(&mut logic, "list-appt 3", &mut out).unwrap());

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("The patient index provided is invalid"));
        assert!(out.contains("Appointments of Charlotte Oliveiro:"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for word in CommandWord::ALL {
            assert!(help.contains(word.usage()));
        }
    }
}
