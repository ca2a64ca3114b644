//! CLI argument parser.
//!
//! Provides the command-line interface for generating a beep asset
//! from synthesis parameters.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    SynthParams, DEFAULT_DURATION, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE, DEFAULT_VOLUME,
};

/// beepgen: generate a square wave beep as a WAV file
#[derive(Parser, Debug)]
#[command(name = "beepgen")]
#[command(about = "Generate a square wave .wav file")]
#[command(version)]
pub struct Cli {
    /// Frequency of the tone in Hz
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: f32,

    /// Duration in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION)]
    pub duration: f32,

    /// Volume (0.0 to 1.0)
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub samplerate: u32,

    /// Output WAV file
    #[arg(long, default_value = "chip8_beep.wav")]
    pub output: PathBuf,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the synthesis parameters selected on the command line.
    pub fn synth_params(&self) -> SynthParams {
        SynthParams {
            frequency: self.frequency,
            duration: self.duration,
            volume: self.volume,
            sample_rate: self.samplerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tool() {
        let cli = Cli::parse_from(["beepgen"]);
        assert_eq!(cli.frequency, 440.0);
        assert_eq!(cli.duration, 1.0);
        assert_eq!(cli.volume, 0.5);
        assert_eq!(cli.samplerate, 44100);
        assert_eq!(cli.output, PathBuf::from("chip8_beep.wav"));
    }

    #[test]
    fn defaults_form_valid_params() {
        let cli = Cli::parse_from(["beepgen"]);
        assert!(cli.synth_params().validate().is_ok());
        assert_eq!(cli.synth_params(), SynthParams::default());
    }

    #[test]
    fn flags_map_to_params() {
        let cli = Cli::parse_from([
            "beepgen",
            "--frequency",
            "880",
            "--duration",
            "0.25",
            "--volume",
            "0.8",
            "--samplerate",
            "48000",
            "--output",
            "/tmp/tone.wav",
        ]);

        let params = cli.synth_params();
        assert_eq!(params.frequency, 880.0);
        assert_eq!(params.duration, 0.25);
        assert_eq!(params.volume, 0.8);
        assert_eq!(params.sample_rate, 48000);
        assert_eq!(cli.output, PathBuf::from("/tmp/tone.wav"));
    }
}
