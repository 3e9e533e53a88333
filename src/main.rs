//! pitchcore CLI - Pitch and Spectrum Analysis
//!
//! Command-line interface for the pitchcore analysis engines.

use clap::Parser;
use env_logger::Env;
use log::info;

use pitchcore::cli::{commands, Cli, Commands};
use pitchcore::Result;

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("pitchcore v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = handle_command(cli.command) {
        eprintln!("error: {e}");
        eprintln!("hint: {}", e.recovery_hint());
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Pitch {
            file,
            window,
            hop,
            threshold,
            lowpass,
            json,
        } => commands::track_pitch(&file, window, hop, threshold, lowpass, json),
        Commands::Spectrum {
            file,
            size,
            at,
            peaks,
            json,
        } => commands::show_spectrum(&file, size, at, peaks, json),
    }
}
