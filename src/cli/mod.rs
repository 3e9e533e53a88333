//! CLI Module
//!
//! Command-line interface for offline pitch and spectrum analysis of WAV files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::dsp::yin::DEFAULT_THRESHOLD;

/// pitchcore - YIN pitch detection and spectral analysis
#[derive(Parser, Debug)]
#[command(name = "pitchcore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track pitch over a WAV file with a sliding analysis window
    #[command(name = "pitch")]
    Pitch {
        /// Input WAV file
        file: PathBuf,

        /// Analysis window length in samples
        #[arg(short, long, default_value_t = 2048)]
        window: usize,

        /// Hop between consecutive windows in samples
        #[arg(long, default_value_t = 512)]
        hop: usize,

        /// CMND acceptance threshold
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f32,

        /// Low-pass cutoff in Hz applied before analysis
        #[arg(long)]
        lowpass: Option<f32>,

        /// Emit the pitch track as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the magnitude spectrum of a single frame
    #[command(name = "spectrum")]
    Spectrum {
        /// Input WAV file
        file: PathBuf,

        /// Transform size in samples
        #[arg(short, long, default_value_t = 4096)]
        size: usize,

        /// Frame start offset in seconds
        #[arg(long, default_value_t = 0.0)]
        at: f32,

        /// Number of strongest bins to list
        #[arg(short, long, default_value_t = 8)]
        peaks: usize,

        /// Emit the peak list as JSON
        #[arg(long)]
        json: bool,
    },
}
