//! notefreq — convert between pitch names and frequencies.
//!
//! Prints one line: `440.00 Hz` for a note name, `A4 (+19.56 cents)` for a
//! frequency. Exits with status 1 and a diagnostic on malformed input.

use clap::Parser;
use tracing::warn;

use notefreq::cli::{init_logging, run, Cli};
use notefreq::config::{default_config_path, load_settings};

fn main() {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(default_config_path);
    let loaded = load_settings(&path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&cli.log_filter(&settings));

    // A failed conversion reports only its own diagnostic.
    match run(&cli) {
        Ok(line) => {
            if let Err(e) = loaded {
                warn!(path = %path.display(), "ignoring config file: {e}");
            }
            println!("{line}");
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
