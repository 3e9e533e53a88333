//! Pitch Detection Integration Tests
//!
//! End-to-end tests for the YIN estimation path: synthetic signals in,
//! frequency or sentinel out.

use pitchcore::audio::AudioBuffer;
use pitchcore::dsp::{YinDetector, NO_PITCH};

/// Deterministic pseudo-noise so the noise tests are reproducible.
fn white_noise(len: usize, seed: u64) -> Vec<f32> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f32 / (1u64 << 31) as f32) * 2.0 - 1.0
        })
        .collect()
}

#[test]
fn test_pure_sine_within_one_percent() {
    let mut detector = YinDetector::new(44100.0, 4096).unwrap();

    for target in [110.0, 220.0, 440.0, 880.0] {
        let tone = AudioBuffer::sine_wave(target, 0.2, 44100);
        let window = &tone.samples()[..4096];

        let detected = detector.get_pitch(window, 44100.0).unwrap();
        let relative_error = (detected - target).abs() / target;
        assert!(
            relative_error < 0.01,
            "{} Hz detected as {} Hz ({}% off)",
            target,
            detected,
            relative_error * 100.0
        );
    }
}

#[test]
fn test_sine_accuracy_at_other_sample_rates() {
    for rate in [22050u32, 48000, 96000] {
        let mut detector = YinDetector::new(rate as f32, 4096).unwrap();
        let tone = AudioBuffer::sine_wave(330.0, 0.2, rate);
        let window = &tone.samples()[..4096];

        let detected = detector.get_pitch(window, rate as f32).unwrap();
        assert!(
            (detected - 330.0).abs() / 330.0 < 0.01,
            "330 Hz @ {} Hz detected as {} Hz",
            rate,
            detected
        );
    }
}

#[test]
fn test_silence_returns_sentinel() {
    let mut detector = YinDetector::new(44100.0, 2048).unwrap();
    let silence = AudioBuffer::silence(0.1, 1, 44100);

    let result = detector.get_pitch(&silence.samples()[..2048], 44100.0).unwrap();
    assert_eq!(result, NO_PITCH);
}

#[test]
fn test_white_noise_never_produces_nan_or_infinity() {
    let mut detector = YinDetector::new(44100.0, 2048).unwrap();

    for seed in 1..=16 {
        let noise = white_noise(2048, seed);
        let result = detector.get_pitch(&noise, 44100.0).unwrap();

        assert!(result.is_finite(), "seed {} produced {}", seed, result);
        assert!(
            result == NO_PITCH || result > 0.0,
            "seed {} produced {}",
            seed,
            result
        );
    }
}

#[test]
fn test_identical_input_is_bit_identical() {
    let tone = AudioBuffer::sine_wave(261.63, 0.1, 44100);
    let window = &tone.samples()[..2048];

    let mut detector = YinDetector::new(44100.0, 2048).unwrap();
    let first = detector.get_pitch(window, 44100.0).unwrap();
    let second = detector.get_pitch(window, 44100.0).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_reconfiguration_matches_fresh_detector() {
    let warmup = AudioBuffer::sine_wave(523.25, 0.1, 48000);
    let tone = AudioBuffer::sine_wave(440.0, 0.2, 44100);
    let window = &tone.samples()[..4096];

    // Instance that has already processed a different size and rate
    let mut reused = YinDetector::new(48000.0, 1024).unwrap();
    reused.get_pitch(&warmup.samples()[..1024], 48000.0).unwrap();
    let reused_result = reused.get_pitch(window, 44100.0).unwrap();

    let mut fresh = YinDetector::new(44100.0, 4096).unwrap();
    let fresh_result = fresh.get_pitch(window, 44100.0).unwrap();

    assert_eq!(reused_result.to_bits(), fresh_result.to_bits());
}

#[test]
fn test_odd_window_sizes_are_handled() {
    let mut detector = YinDetector::new(44100.0, 1023).unwrap();
    let tone = AudioBuffer::sine_wave(440.0, 0.1, 44100);

    let detected = detector.get_pitch(&tone.samples()[..1023], 44100.0).unwrap();
    assert!((detected - 440.0).abs() / 440.0 < 0.01);
}

#[test]
fn test_stricter_threshold_still_locks_clean_tone() {
    let mut detector = YinDetector::with_threshold(44100.0, 4096, 0.1).unwrap();
    let tone = AudioBuffer::sine_wave(196.0, 0.2, 44100);

    let detected = detector.get_pitch(&tone.samples()[..4096], 44100.0).unwrap();
    assert!((detected - 196.0).abs() / 196.0 < 0.01);
}

#[test]
fn test_frequency_too_low_for_window_returns_sentinel() {
    // 30 Hz needs a ~1470-sample period at 44100 Hz; a 1024-sample window
    // cannot contain one full cycle shift, so no valley can form.
    let mut detector = YinDetector::new(44100.0, 1024).unwrap();
    let tone = AudioBuffer::sine_wave(30.0, 0.1, 44100);

    let result = detector.get_pitch(&tone.samples()[..1024], 44100.0).unwrap();
    assert_eq!(result, NO_PITCH);
}
