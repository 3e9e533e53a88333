//! Spectral magnitude analysis
//!
//! Reduces an analysis window to its magnitude spectrum via a forward FFT.
//! The transform plan is cached for the configured size and rebuilt whenever
//! a window of a different length arrives, following the same reconfigure
//! discipline as the pitch detector.

use std::sync::Arc;

use log::debug;
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::error::{PitchError, Result};

/// Magnitude spectrum engine with a cached transform plan.
///
/// Holds mutable scratch state; a single instance must be serialized by the
/// caller, independent instances share nothing.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f32>,
    plan: Option<CachedPlan>,
}

struct CachedPlan {
    size: usize,
    fft: Arc<dyn Fft<f32>>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer with no plan; the first call plans for its window size
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            plan: None,
        }
    }

    /// Compute the magnitude spectrum of one analysis window.
    ///
    /// Returns `floor(N/2) + 1` non-negative magnitudes, one per bin of the
    /// positive-frequency half of the transform (the mirrored half is
    /// discarded). An empty window cannot be planned and fails with
    /// [`PitchError::BackendInitFailed`]; no partial spectrum is returned.
    pub fn magnitude_spectrum(&mut self, window: &[f32]) -> Result<Vec<f32>> {
        let fft = self.plan_for(window.len())?;

        let mut buffer: Vec<Complex<f32>> = window
            .iter()
            .map(|&sample| Complex { re: sample, im: 0.0 })
            .collect();
        fft.process(&mut buffer);

        Ok(buffer
            .iter()
            .take(window.len() / 2 + 1)
            .map(|c| c.norm()) // .norm() is sqrt(re^2 + im^2)
            .collect())
    }

    /// Size the cached plan is built for, if any
    pub fn planned_size(&self) -> Option<usize> {
        self.plan.as_ref().map(|p| p.size)
    }

    fn plan_for(&mut self, size: usize) -> Result<Arc<dyn Fft<f32>>> {
        if size == 0 {
            return Err(PitchError::BackendInitFailed { size });
        }
        match &self.plan {
            Some(cached) if cached.size == size => Ok(Arc::clone(&cached.fft)),
            _ => {
                if let Some(old) = &self.plan {
                    debug!("replanning FFT: {} -> {} points", old.size, size);
                }
                let fft = self.planner.plan_fft_forward(size);
                self.plan = Some(CachedPlan {
                    size,
                    fft: Arc::clone(&fft),
                });
                Ok(fft)
            }
        }
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
