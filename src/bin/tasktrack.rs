//! Command-line entry point for the task tracker.
//!
//! Usage:
//!
//! ```text
//! tasktrack [--store <PATH>] <command> [args...]
//! ```
//!
//! Each invocation prints one result line (or one line per listed record)
//! to standard output. Failures print `error: <message>` to standard error
//! and exit with a non-zero status.

use clap::Parser;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tasktrack::cli::{Cli, CommandError, Dispatcher, TrackerConfig, init_logging};
use tasktrack::tracker::{
    adapters::json_file::JsonFileStore, ports::DatasetStore, services::TrackerError,
};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = TrackerConfig::from_cli(&cli);
    init_logging(&config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let CommandError::Tracker(TrackerError::CorruptStore { location, .. }) = &err {
                error!(path = %location, "task store is unusable; operation aborted");
            }
            let mut stderr = io::stderr().lock();
            if writeln!(stderr, "error: {err}").is_err() {
                return ExitCode::from(2);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &TrackerConfig) -> Result<(), CommandError> {
    let store = JsonFileStore::open(config.store_path()).map_err(TrackerError::from)?;
    store.ensure_initialized().map_err(TrackerError::from)?;

    let dispatcher = Dispatcher::new(Arc::new(store), Arc::new(DefaultClock));
    let mut stdout = io::stdout().lock();
    dispatcher.execute(&cli.command, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
