//! DSP engines
//!
//! Pitch estimation (YIN), spectral magnitude analysis, and preprocessing
//! filters. All engines are synchronous call-and-return with no internal
//! locking; instances own their scratch state and are cheap to create one
//! per thread.

pub mod filter;
pub mod spectrum;
pub mod yin;

pub use spectrum::SpectrumAnalyzer;
pub use yin::{YinDetector, DEFAULT_THRESHOLD, NO_PITCH};
