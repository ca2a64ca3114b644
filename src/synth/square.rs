//! Square wave generator.
//!
//! Synthesizes a fixed-frequency square wave as quantized 16-bit samples.

use std::f32::consts::TAU;

use crate::config::SynthParams;

/// Peak quantized amplitude for 16-bit samples.
const PEAK_AMPLITUDE: f32 = 32767.0;

/// Returns the number of samples for a duration at a sample rate.
///
/// Computed as `floor(sample_rate * duration)`: the sampling interval is
/// half-open, so the instant at `duration` itself is excluded.
pub fn sample_count(sample_rate: u32, duration: f32) -> usize {
    (f64::from(sample_rate) * f64::from(duration)).floor() as usize
}

/// Generates a square wave as quantized 16-bit samples.
///
/// Sample `i` is taken at `t = i / sample_rate`. The continuous waveform
/// is `sign(sin(2π * frequency * t))` scaled by 0.5, so amplitudes lie in
/// {-0.5, 0, +0.5}: the instants where the sine is exactly zero produce a
/// zero sample rather than either plateau level. Each value is then
/// scaled by `volume * 32767` and quantized.
///
/// Pure and deterministic: identical parameters yield bit-identical
/// output.
///
/// # Example
///
/// ```
/// use beepgen::config::SynthParams;
/// use beepgen::synth::generate_square_wave;
///
/// let samples = generate_square_wave(&SynthParams::default());
/// assert_eq!(samples.len(), 44100);
/// assert_eq!(samples[0], 0);
/// ```
pub fn generate_square_wave(params: &SynthParams) -> Vec<i16> {
    let n = sample_count(params.sample_rate, params.duration);
    let rate = params.sample_rate as f32;

    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f32 / rate;
        let sine = (TAU * params.frequency * t).sin();
        // signum maps ±0.0 to ±1.0; the zero crossings must stay at zero
        let amplitude = if sine == 0.0 { 0.0 } else { 0.5 * sine.signum() };
        samples.push(quantize(amplitude * params.volume));
    }
    samples
}

/// Quantizes a [-1.0, 1.0] amplitude to a 16-bit sample.
///
/// Uses Rust's float-to-integer cast: truncation toward zero, saturating
/// at the i16 bounds for out-of-range input (volume above 1.0).
fn quantize(value: f32) -> i16 {
    (value * PEAK_AMPLITUDE) as i16
}
