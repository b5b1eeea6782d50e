//! Command-line surface: argument parsing, logging setup and the run entry.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::convert::convert;
use crate::error::NoteResult;

/// Convert between note names and frequencies.
#[derive(Debug, Parser)]
#[command(name = "notefreq", version, about)]
pub struct Cli {
    /// Pitch (e.g. C#4, Bb2, A♯4) or frequency in hertz (e.g. 445, 329.63)
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Settings file (default: ~/.notefreq/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive: `-v` beats the settings file.
    pub fn log_filter(&self, settings: &Settings) -> String {
        match self.verbose {
            0 => settings.log_level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `fallback`.
pub fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Run one conversion and return the line to print.
pub fn run(cli: &Cli) -> NoteResult<String> {
    convert(&cli.value).map(|conversion| conversion.to_string())
}
