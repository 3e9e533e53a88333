//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::audio::load_wav;
use crate::dsp::{filter, SpectrumAnalyzer, YinDetector};
use crate::error::{PitchError, Result};

/// One entry of a pitch track
#[derive(Debug, Serialize)]
pub struct PitchFrame {
    /// Window start time in seconds
    pub time_secs: f32,
    /// Detected frequency in Hz; None when no periodicity was found
    pub frequency_hz: Option<f32>,
}

/// One spectral peak of a frame
#[derive(Debug, Serialize)]
pub struct SpectrumPeak {
    pub bin: usize,
    pub frequency_hz: f32,
    pub magnitude: f32,
}

/// Track pitch over a WAV file with a sliding window.
pub fn track_pitch(
    path: &Path,
    window: usize,
    hop: usize,
    threshold: f32,
    lowpass_cutoff: Option<f32>,
    json: bool,
) -> Result<()> {
    info!("Tracking pitch: {}", path.display());

    let buffer = load_wav(path)?;
    let rate = buffer.sample_rate() as f32;
    let mut mono = buffer.to_mono();

    if let Some(cutoff) = lowpass_cutoff {
        info!("Applying {} Hz low-pass filter", cutoff);
        filter::lowpass(&mut mono, rate, cutoff);
    }

    let mut detector = YinDetector::with_threshold(rate, window, threshold)?;
    let hop = hop.max(1);

    let mut frames = Vec::new();
    let mut start = 0;
    while start + window <= mono.len() {
        let frequency = detector.get_pitch(&mono[start..start + window], rate)?;
        frames.push(PitchFrame {
            time_secs: start as f32 / rate,
            frequency_hz: (frequency > 0.0).then_some(frequency),
        });
        start += hop;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        println!("{} windows of {} samples @ {} Hz", frames.len(), window, rate);
        for frame in &frames {
            match frame.frequency_hz {
                Some(f) => println!("{:8.3}s  {:9.2} Hz", frame.time_secs, f),
                None => println!("{:8.3}s          -", frame.time_secs),
            }
        }
    }

    Ok(())
}

/// Print the strongest bins of one frame's magnitude spectrum.
pub fn show_spectrum(path: &Path, size: usize, at: f32, peaks: usize, json: bool) -> Result<()> {
    info!("Computing spectrum: {}", path.display());

    let buffer = load_wav(path)?;
    let rate = buffer.sample_rate() as f32;
    let mono = buffer.to_mono();

    let start = (at.max(0.0) * rate) as usize;
    let end = start + size;
    if end > mono.len() {
        return Err(PitchError::WindowTooShort {
            len: mono.len().saturating_sub(start),
        });
    }

    let mut analyzer = SpectrumAnalyzer::new();
    let spectrum = analyzer.magnitude_spectrum(&mono[start..end])?;

    let bin_hz = rate / size as f32;
    let mut ranked: Vec<SpectrumPeak> = spectrum
        .iter()
        .enumerate()
        .map(|(bin, &magnitude)| SpectrumPeak {
            bin,
            frequency_hz: bin as f32 * bin_hz,
            magnitude,
        })
        .collect();
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked.truncate(peaks);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("Top {} of {} bins ({:.2} Hz per bin)", ranked.len(), spectrum.len(), bin_hz);
        for peak in &ranked {
            println!(
                "bin {:5}  {:9.2} Hz  magnitude {:.4}",
                peak.bin, peak.frequency_hz, peak.magnitude
            );
        }
    }

    Ok(())
}
