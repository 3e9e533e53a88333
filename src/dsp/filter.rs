//! Time-domain preprocessing filters

use std::f32::consts::PI;

/// Number of cascaded first-order passes in [`lowpass`]
const LOWPASS_PASSES: usize = 4;

/// Apply a low-pass filter to a signal in place.
///
/// Four cascaded passes of a first-order IIR filter with
/// `alpha = 1 / (1 + rate / (2*pi*cutoff))`. Useful for suppressing
/// harmonics above the fundamental before pitch tracking low-pitched
/// material.
pub fn lowpass(samples: &mut [f32], sample_rate: f32, cutoff_hz: f32) {
    if samples.is_empty() || sample_rate <= 0.0 || cutoff_hz <= 0.0 {
        return;
    }

    let rc = 1.0 / (2.0 * PI * cutoff_hz);
    let alpha = 1.0 / (1.0 + sample_rate * rc);

    for _ in 0..LOWPASS_PASSES {
        for i in 1..samples.len() {
            samples[i] = alpha * samples[i] + (1.0 - alpha) * samples[i - 1];
        }
    }
}
