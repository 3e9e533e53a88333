//! YIN fundamental-frequency estimation
//!
//! Implements the YIN algorithm (de Cheveigne & Kawahara, 2002): a squared
//! difference function over candidate lags, cumulative mean normalization,
//! and selection of the first sub-threshold valley with parabolic sub-sample
//! refinement.
//!
//! A [`YinDetector`] owns its scratch buffer and reuses it across calls, so a
//! single instance must not be shared between threads without external
//! synchronization. Independent instances share no state.

use log::debug;

use crate::error::{PitchError, Result};

/// Sentinel frequency returned when no periodicity is found.
///
/// Kept as a plain value rather than an error so real-time callers can test
/// for it with a single comparison.
pub const NO_PITCH: f32 = -1.0;

/// Default CMND acceptance threshold
pub const DEFAULT_THRESHOLD: f32 = 0.15;

/// YIN pitch detector with reusable scratch state.
///
/// The detector is configured for one window size and sample rate at a time.
/// A call with a different window length or rate transparently rebuilds the
/// internal state before processing, so callers may vary both call-to-call.
#[derive(Debug, Clone)]
pub struct YinDetector {
    sample_rate: f32,
    window_size: usize,
    threshold: f32,
    /// Difference function, overwritten with the CMND in place.
    /// Index 0 is a sentinel and never enters the lag search.
    buffer: Vec<f32>,
}

impl YinDetector {
    /// Create a detector with the default threshold
    pub fn new(sample_rate: f32, window_size: usize) -> Result<Self> {
        Self::with_threshold(sample_rate, window_size, DEFAULT_THRESHOLD)
    }

    /// Create a detector with an explicit CMND threshold (typically 0.1-0.2)
    pub fn with_threshold(sample_rate: f32, window_size: usize, threshold: f32) -> Result<Self> {
        if window_size < 2 {
            return Err(PitchError::WindowTooShort { len: window_size });
        }
        if sample_rate <= 0.0 {
            return Err(PitchError::InvalidSampleRate { rate: sample_rate });
        }
        if threshold <= 0.0 || threshold >= 1.0 {
            return Err(PitchError::InvalidThreshold { threshold });
        }
        Ok(Self {
            sample_rate,
            window_size,
            threshold,
            buffer: vec![0.0; window_size],
        })
    }

    /// Get the configured sample rate
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Get the configured window size in samples
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Get the CMND acceptance threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Estimate the fundamental frequency of one analysis window.
    ///
    /// Returns the frequency in Hz, or [`NO_PITCH`] when no lag produces a
    /// CMND valley below the threshold. The result is deterministic:
    /// identical input always yields a bit-identical output.
    pub fn get_pitch(&mut self, window: &[f32], sample_rate: f32) -> Result<f32> {
        if window.len() < 2 {
            return Err(PitchError::WindowTooShort { len: window.len() });
        }
        if sample_rate <= 0.0 {
            return Err(PitchError::InvalidSampleRate { rate: sample_rate });
        }
        if window.len() != self.window_size || sample_rate != self.sample_rate {
            self.reconfigure(sample_rate, window.len());
        }

        self.difference(window);
        self.cumulative_mean_normalized();

        Ok(match self.select_lag() {
            Some(lag) => self.sample_rate / lag,
            None => NO_PITCH,
        })
    }

    /// Rebuild internal state for a new configuration.
    ///
    /// The scratch buffer is reallocated whole, never resized in place, so
    /// the state is either the old configuration or the new one.
    fn reconfigure(&mut self, sample_rate: f32, window_size: usize) {
        debug!(
            "rebuilding YIN state: {} samples @ {} Hz -> {} samples @ {} Hz",
            self.window_size, self.sample_rate, window_size, sample_rate
        );
        self.sample_rate = sample_rate;
        self.window_size = window_size;
        self.buffer = vec![0.0; window_size];
    }

    /// Squared difference function: buffer[tau] = sum((w[j] - w[j+tau])^2)
    fn difference(&mut self, window: &[f32]) {
        let n = self.window_size;
        for tau in 1..n {
            let mut sum = 0.0f32;
            for j in 0..n - tau {
                let d = window[j] - window[j + tau];
                sum += d * d;
            }
            self.buffer[tau] = sum;
        }
    }

    /// Cumulative mean normalized difference, computed in place.
    fn cumulative_mean_normalized(&mut self) {
        self.buffer[0] = 1.0;
        let mut acc = 0.0f32;
        for tau in 1..self.window_size {
            acc += self.buffer[tau];
            // Zero energy (e.g. silence) leaves acc at 0; treat as non-periodic
            // instead of dividing into NaN.
            self.buffer[tau] = if acc > 0.0 {
                self.buffer[tau] * tau as f32 / acc
            } else {
                1.0
            };
        }
    }

    /// Find the first CMND valley below the threshold.
    ///
    /// A valley requires descent-then-ascent: a bare threshold crossing fires
    /// on the descending edge before the true minimum and biases the lag
    /// short. The scan starts at tau = 2 so interpolation never reads the
    /// index-0 sentinel.
    fn select_lag(&self) -> Option<f32> {
        let n = self.window_size;
        for tau in 2..n.saturating_sub(1) {
            if self.buffer[tau] < self.threshold && self.buffer[tau] < self.buffer[tau + 1] {
                return Some(parabolic_interpolation(&self.buffer, tau));
            }
        }
        None
    }
}

/// Refine an integer lag to sub-sample precision.
///
/// Fits a parabola through (tau-1, tau, tau+1) and returns the abscissa of
/// its minimum. Collinear points (zero denominator) and refinements that land
/// outside [tau-1, tau+1] return the integer lag unchanged.
fn parabolic_interpolation(cmnd: &[f32], tau: usize) -> f32 {
    let y_left = cmnd[tau - 1];
    let y_center = cmnd[tau];
    let y_right = cmnd[tau + 1];

    let denominator = y_left - 2.0 * y_center + y_right;
    if denominator == 0.0 {
        return tau as f32;
    }

    let refined = tau as f32 - 0.5 * (y_right - y_left) / denominator;
    if refined < (tau - 1) as f32 || refined > (tau + 1) as f32 {
        tau as f32
    } else {
        refined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolation_collinear_points_keep_integer_lag() {
        let cmnd = [1.0, 0.5, 0.5, 0.5, 1.0];
        assert_eq!(parabolic_interpolation(&cmnd, 2), 2.0);
    }

    #[test]
    fn test_interpolation_recovers_offset_minimum() {
        // Parabola with true minimum at x = 2.3
        let f = |x: f32| (x - 2.3) * (x - 2.3);
        let cmnd = [f(0.0), f(1.0), f(2.0), f(3.0), f(4.0)];
        assert_relative_eq!(parabolic_interpolation(&cmnd, 2), 2.3, epsilon = 1e-5);
    }

    #[test]
    fn test_interpolation_symmetric_valley_stays_centered() {
        let cmnd = [1.0, 0.4, 0.1, 0.4, 1.0];
        assert_eq!(parabolic_interpolation(&cmnd, 2), 2.0);
    }

    #[test]
    fn test_constructor_rejects_bad_config() {
        assert!(matches!(
            YinDetector::new(44100.0, 1),
            Err(PitchError::WindowTooShort { len: 1 })
        ));
        assert!(matches!(
            YinDetector::new(0.0, 1024),
            Err(PitchError::InvalidSampleRate { .. })
        ));
        assert!(matches!(
            YinDetector::with_threshold(44100.0, 1024, 1.5),
            Err(PitchError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_get_pitch_rejects_bad_input() {
        let mut detector = YinDetector::new(44100.0, 1024).unwrap();
        assert!(matches!(
            detector.get_pitch(&[], 44100.0),
            Err(PitchError::WindowTooShort { len: 0 })
        ));
        assert!(matches!(
            detector.get_pitch(&[0.0; 1024], -1.0),
            Err(PitchError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn test_silence_hits_zero_accumulator_fallback() {
        let mut detector = YinDetector::new(44100.0, 512).unwrap();
        let silence = vec![0.0; 512];
        assert_eq!(detector.get_pitch(&silence, 44100.0).unwrap(), NO_PITCH);
    }

    #[test]
    fn test_two_sample_window_has_no_searchable_lag() {
        let mut detector = YinDetector::new(44100.0, 2).unwrap();
        assert_eq!(detector.get_pitch(&[0.5, -0.5], 44100.0).unwrap(), NO_PITCH);
    }

    #[test]
    fn test_transparent_reconfiguration() {
        let mut detector = YinDetector::new(44100.0, 256).unwrap();
        assert_eq!(detector.window_size(), 256);

        let window = vec![0.0; 1024];
        detector.get_pitch(&window, 48000.0).unwrap();
        assert_eq!(detector.window_size(), 1024);
        assert_eq!(detector.sample_rate(), 48000.0);
    }
}
