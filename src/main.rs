//! beepgen: standalone square wave beep generator.
//!
//! Parses synthesis parameters from the command line, generates the
//! sample sequence, and writes it to a WAV file. Progress goes to
//! stderr; the resolved output path goes to stdout.

use beepgen::audio::{samples_to_duration, write_wav};
use beepgen::cli::Cli;
use beepgen::error::Result;
use beepgen::synth::generate_square_wave;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let params = cli.synth_params();
    params.validate()?;

    eprintln!("=== beepgen ===");
    eprintln!("Frequency: {} Hz", params.frequency);
    eprintln!("Duration: {}s", params.duration);
    eprintln!("Volume: {}", params.volume);
    eprintln!("Sample rate: {} Hz", params.sample_rate);
    eprintln!("Output: {}", cli.output.display());
    eprintln!();

    if params.clips() {
        eprintln!(
            "Warning: volume {} exceeds 1.0; clipped samples saturate at the 16-bit range.",
            params.volume
        );
    }

    let samples = generate_square_wave(&params);
    eprintln!(
        "Generated {} samples ({:.2}s of audio)",
        samples.len(),
        samples_to_duration(samples.len(), params.sample_rate)
    );

    write_wav(&samples, &cli.output, params.sample_rate)?;

    // The file exists at this point, so canonicalize normally succeeds;
    // fall back to the path as given if the parent cannot be resolved.
    let resolved = cli.output.canonicalize().unwrap_or_else(|_| cli.output.clone());
    println!("Beep sound written to {}", resolved.display());

    Ok(())
}
