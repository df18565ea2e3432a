//! `clinic`: a text-command front end for the clinic book.

mod app;
mod config;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(
    about = "Single-user clinic records driven by short text commands",
    long_about = "Manage patients, appointments and medical history with commands such as \
                  `add n/NAME ic/NRIC p/PHONE e/EMAIL a/ADDRESS` or `delete-appt 1 pi/2`. \
                  Without a command, starts an interactive session."
)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.clinicbook/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clinic book data file, overriding the one in preferences
    #[arg(long)]
    data: Option<PathBuf>,

    /// Run this single command instead of the interactive session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::default_config_path);

    let loaded = Config::read(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!("Clinic book starting v{}", env!("CARGO_PKG_VERSION"));

    let needs_write = match loaded {
        Ok(Some(_)) => false,
        Ok(None) => {
            info!(path = %config_path.display(), "Config file not found, creating one");
            true
        }
        Err(e) => {
            warn!(error = %e, "Config file could not be loaded, using defaults");
            true
        }
    };
    if needs_write {
        if let Err(e) = config.save(&config_path) {
            warn!(error = %e, "Failed to write config file");
        }
    }

    let mut logic = app::init_logic(&config.user_prefs_file_path, cli.data);
    let mut stdout = io::stdout();

    if cli.command.is_empty() {
        app::run_repl(&mut logic, io::stdin().lock(), &mut stdout)
            .context("interactive session failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let ok = app::run_once(&mut logic, &cli.command.join(" "), &mut stdout)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
