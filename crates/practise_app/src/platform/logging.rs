//! Logger initialization for the `practise` binary.
//!
//! Logs go to stderr so stdout carries only command output.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use practise_logging::practise_error;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination<'a> {
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both the terminal and the given file.
    Both(&'a Path),
}

/// Initialize the logger with the specified destination.
pub fn initialize(level: LevelFilter, destination: LogDestination<'_>) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    let mut file_error = None;
    if let LogDestination::Both(path) = destination {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => file_error = Some((path, err)),
        }
    }

    let _ = CombinedLogger::init(loggers);

    // Reported once the terminal logger is live.
    if let Some((path, err)) = file_error {
        practise_error!("Could not create log file at {:?}: {}", path, err);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
