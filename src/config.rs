//! Synthesis parameter configuration.
//!
//! Contains the immutable parameter set for a single beep generation,
//! constructed from command-line arguments at startup.

use serde::{Deserialize, Serialize};

use crate::error::{BeepError, Result};

/// Default tone frequency in Hz (concert A).
pub const DEFAULT_FREQUENCY: f32 = 440.0;

/// Default tone duration in seconds.
pub const DEFAULT_DURATION: f32 = 1.0;

/// Default gain factor.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Default sample rate in Hz (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Parameters for a single square wave synthesis run.
///
/// Built once from CLI input, passed by value into the generator, and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthParams {
    /// Tone frequency in Hz. Must be finite and positive.
    pub frequency: f32,

    /// Duration in seconds. Must be finite and non-negative; zero
    /// produces an empty (but valid) output file.
    pub duration: f32,

    /// Gain factor, nominally in [0.0, 1.0]. Values above 1.0 are not
    /// clamped; quantization saturates at the 16-bit range instead.
    pub volume: f32,

    /// Sample rate in Hz. Must be positive.
    pub sample_rate: u32,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            duration: DEFAULT_DURATION,
            volume: DEFAULT_VOLUME,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl SynthParams {
    /// Validates the parameter set.
    ///
    /// Rejects degenerate numeric input that would otherwise silently
    /// produce a garbage waveform. A duration of exactly zero passes
    /// validation and yields an empty sample sequence.
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(BeepError::invalid_frequency(self.frequency));
        }

        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(BeepError::invalid_duration(self.duration));
        }

        if self.sample_rate == 0 {
            return Err(BeepError::invalid_sample_rate(self.sample_rate));
        }

        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(BeepError::invalid_volume(self.volume));
        }

        Ok(())
    }

    /// Returns true if this volume will clip against the 16-bit range.
    pub fn clips(&self) -> bool {
        self.volume > 1.0
    }
}
