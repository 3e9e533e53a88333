//! pitchcore - Pitch Detection and Spectral Analysis
//!
//! pitchcore estimates the fundamental frequency of audio frames using the
//! YIN algorithm and computes FFT magnitude spectra, for use by tuners and
//! other frame-based analysis front ends.
//!
//! # Architecture
//!
//! Two independent engines consume the same kind of input (one fixed-length
//! frame of samples plus a sample rate):
//! - [`dsp::YinDetector`]: squared-difference function, cumulative mean
//!   normalization, valley selection, lag-to-frequency conversion
//! - [`dsp::SpectrumAnalyzer`]: forward FFT reduced to per-bin magnitudes
//!
//! Both rebuild their internal state transparently when the frame size or
//! sample rate changes between calls.

pub mod audio;
pub mod cli;
pub mod dsp;
pub mod error;

// Re-export commonly used types
pub use audio::AudioBuffer;
pub use dsp::{SpectrumAnalyzer, YinDetector, NO_PITCH};
pub use error::{PitchError, Result};
