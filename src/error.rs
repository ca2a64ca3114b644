//! Error types for beepgen.
//!
//! Defines all error codes and types used throughout the tool for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by beepgen.
///
/// These codes identify the failure class so callers (and the process
/// exit path) can report errors consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Frequency parameter is unusable.
    /// Trigger: zero, negative, or non-finite frequency.
    InvalidFrequency,

    /// Duration parameter is unusable.
    /// Trigger: negative or non-finite duration (zero is allowed and
    /// produces an empty file).
    InvalidDuration,

    /// Sample rate parameter is unusable.
    /// Trigger: sample rate of zero.
    InvalidSampleRate,

    /// Volume parameter is unusable.
    /// Trigger: negative or non-finite volume.
    InvalidVolume,

    /// Failed to encode or write the output WAV file.
    /// Trigger: unwritable path, missing parent directory, disk full.
    WavWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "INVALID_FREQUENCY",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::InvalidVolume => "INVALID_VOLUME",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "Frequency must be a finite value greater than zero",
            ErrorCode::InvalidDuration => "Duration must be a finite, non-negative value",
            ErrorCode::InvalidSampleRate => "Sample rate must be greater than zero",
            ErrorCode::InvalidVolume => "Volume must be a finite, non-negative value",
            ErrorCode::WavWriteFailed => "Failed to write the output WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => {
                "Pass a positive tone frequency in Hz (e.g., --frequency 440.0)"
            }
            ErrorCode::InvalidDuration => {
                "Pass a non-negative duration in seconds (e.g., --duration 1.0)"
            }
            ErrorCode::InvalidSampleRate => {
                "Pass a positive sample rate in Hz (e.g., --samplerate 44100)"
            }
            ErrorCode::InvalidVolume => {
                "Pass a non-negative gain factor, normally between 0.0 and 1.0 \
                 (e.g., --volume 0.5)"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists, the path is writable, \
                 and the disk is not full"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for beepgen operations.
#[derive(Debug)]
pub struct BeepError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BeepError {
    /// Creates a new BeepError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new BeepError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_FREQUENCY error.
    pub fn invalid_frequency(frequency: f32) -> Self {
        Self::new(
            ErrorCode::InvalidFrequency,
            format!(
                "Invalid frequency: {} Hz (must be finite and positive)",
                frequency
            ),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration: f32) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!(
                "Invalid duration: {} seconds (must be finite and non-negative)",
                duration
            ),
        )
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(sample_rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!("Invalid sample rate: {} Hz (must be positive)", sample_rate),
        )
    }

    /// Creates an INVALID_VOLUME error.
    pub fn invalid_volume(volume: f32) -> Self {
        Self::new(
            ErrorCode::InvalidVolume,
            format!("Invalid volume: {} (must be finite and non-negative)", volume),
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::WavWriteFailed,
            format!("WAV write failed: {}", reason.into()),
        )
    }
}

impl fmt::Display for BeepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for BeepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using BeepError.
pub type Result<T> = std::result::Result<T, BeepError>;
