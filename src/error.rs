//! Error types for pitchcore
//!
//! All fallible operations in the crate return [`PitchError`], providing
//! consistent error handling with recovery paths. An undetected pitch is not
//! an error: `get_pitch` reports it through the [`NO_PITCH`](crate::dsp::NO_PITCH)
//! sentinel instead.

use thiserror::Error;

/// Result type alias using PitchError
pub type Result<T> = std::result::Result<T, PitchError>;

/// All possible errors in pitchcore
#[derive(Error, Debug)]
pub enum PitchError {
    // Audio I/O errors
    #[error("Failed to read audio file: {path}")]
    AudioReadError { path: String, #[source] source: hound::Error },

    #[error("Failed to write audio file: {path}")]
    AudioWriteError { path: String, #[source] source: hound::Error },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    // Input validation errors
    #[error("Audio buffer is empty")]
    EmptyBuffer,

    #[error("Analysis window too short: {len} samples (need at least 2)")]
    WindowTooShort { len: usize },

    #[error("Invalid sample rate: {rate} Hz (must be positive)")]
    InvalidSampleRate { rate: f32 },

    #[error("Invalid detection threshold: {threshold} (valid range: 0..1 exclusive)")]
    InvalidThreshold { threshold: f32 },

    // Spectral engine errors
    #[error("FFT backend could not be initialized for transform size {size}")]
    BackendInitFailed { size: usize },

    // Generic I/O
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PitchError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::AudioReadError { .. } => "Check that the file exists and is a valid WAV file",
            Self::UnsupportedFormat { .. } => "Convert to WAV format (16/24/32-bit, mono or stereo)",
            Self::EmptyBuffer => "Provide at least one frame of audio",
            Self::WindowTooShort { .. } => "Use an analysis window of at least 2 samples",
            Self::InvalidSampleRate { .. } => "Pass the capture sample rate in Hz (e.g. 44100)",
            Self::InvalidThreshold { .. } => "Pick a threshold strictly between 0 and 1 (typically 0.1-0.2)",
            Self::BackendInitFailed { .. } => "Use a non-empty window for spectral analysis",
            _ => "Check the error details and try again",
        }
    }
}
