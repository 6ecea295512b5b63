//! Kheti Guru binary entrypoint kept minimal. Commands live in `args`.

mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use kheti_guru::config::{self, Settings};

fn main() -> ExitCode {
    let args = args::Args::parse();

    let config_dir = config::config_dir();
    logging::init(
        &config::logs_dir(&config_dir),
        &args::determine_log_level(&args),
    );

    let settings_path = args
        .config
        .clone()
        .unwrap_or_else(|| config::settings_path(&config_dir));
    let settings = Settings::load(&settings_path);
    tracing::debug!(
        config_dir = %config_dir.display(),
        settings = %settings_path.display(),
        "Kheti Guru starting"
    );

    match args::run(&args.command, &settings, &config_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("kheti-guru: {err}");
            ExitCode::FAILURE
        }
    }
}
