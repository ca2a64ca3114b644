//! WAV file writer for synthesized audio.
//!
//! Writes quantized samples to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{BeepError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample in the output container.
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes quantized samples to a WAV file.
///
/// Creates or overwrites the file at `path` with a mono, 16-bit signed
/// little-endian PCM payload at `sample_rate`. The header is finalized
/// before returning, so a successful return means a complete file. On
/// error the partial file, if any, is left in place.
///
/// # Arguments
///
/// * `samples` - Quantized audio samples
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use beepgen::audio::write_wav;
///
/// let samples = vec![0i16, 8191, -8191, 0];
/// write_wav(&samples, Path::new("beep.wav"), 44100)?;
/// # Ok::<(), beepgen::error::BeepError>(())
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        BeepError::wav_write_failed(format!("Failed to create WAV file: {}", e))
    })?;

    for sample in samples {
        writer.write_sample(*sample).map_err(|e| {
            BeepError::wav_write_failed(format!("Failed to write sample: {}", e))
        })?;
    }

    writer.finalize().map_err(|e| {
        BeepError::wav_write_failed(format!("Failed to finalize WAV file: {}", e))
    })?;

    Ok(())
}

/// Writes quantized samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let cursor = std::io::Cursor::new(&mut buffer);
    let buf_writer = std::io::BufWriter::new(cursor);

    let mut writer = WavWriter::new(buf_writer, wav_spec(sample_rate)).map_err(|e| {
        BeepError::wav_write_failed(format!("Failed to create WAV writer: {}", e))
    })?;

    for sample in samples {
        writer.write_sample(*sample).map_err(|e| {
            BeepError::wav_write_failed(format!("Failed to write sample: {}", e))
        })?;
    }

    writer.finalize().map_err(|e| {
        BeepError::wav_write_failed(format!("Failed to finalize WAV buffer: {}", e))
    })?;

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 8191, -8191, 0];
        write_wav(&samples, &path, 44100).unwrap();

        assert!(path.exists());

        // Verify file is valid WAV with the expected header fields
        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, BITS_PER_SAMPLE);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(reader.len(), samples.len() as u32);
    }

    #[test]
    fn write_wav_round_trips_sample_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.wav");

        let samples = vec![0i16, 1, -1, i16::MAX, i16::MIN, 8191];
        write_wav(&samples, &path, 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn write_wav_accepts_empty_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        write_wav(&[], &path, 44100).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.spec().channels, CHANNELS);
    }

    #[test]
    fn write_wav_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.wav");

        write_wav(&[1i16; 100], &path, 44100).unwrap();
        write_wav(&[2i16; 10], &path, 22050).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 10);
        assert_eq!(reader.spec().sample_rate, 22050);
    }

    #[test]
    fn write_wav_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.wav");

        let err = write_wav(&[0i16], &path, 44100).unwrap_err();
        assert_eq!(err.code, ErrorCode::WavWriteFailed);
    }

    #[test]
    fn write_wav_to_buffer_returns_valid_wav() {
        let samples = vec![0i16, 8191, -8191, 0];
        let buffer = write_wav_to_buffer(&samples, 44100).unwrap();

        assert!(!buffer.is_empty());
        // WAV files start with "RIFF"
        assert_eq!(&buffer[0..4], b"RIFF");

        let reader = hound::WavReader::new(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(reader.len(), samples.len() as u32);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(88200, 44100), 2.0);
        assert_eq!(samples_to_duration(22050, 44100), 0.5);
    }
}
