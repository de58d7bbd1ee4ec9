//! Error handling for the splice decoder
//!
//! Only the fixed-layout part of a pattern file can fail to decode. Track
//! records that run out of data end decoding normally and never surface here.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for splice operations
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Fixed-layout header field that was being read when decoding failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// 6-byte `SPLICE` magic
    Magic,
    /// 8-byte big-endian payload length
    PayloadLength,
    /// 32-byte NUL-padded version string
    Version,
    /// 4-byte little-endian tempo
    Tempo,
}

impl HeaderField {
    /// Width of the field in bytes
    pub fn width(self) -> usize {
        match self {
            HeaderField::Magic => 6,
            HeaderField::PayloadLength => 8,
            HeaderField::Version => 32,
            HeaderField::Tempo => 4,
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::Magic => "magic",
            HeaderField::PayloadLength => "payload length",
            HeaderField::Version => "version",
            HeaderField::Tempo => "tempo",
        };
        f.write_str(name)
    }
}

/// Main error type for splice operations
#[derive(Error, Debug)]
pub enum SpliceError {
    // Format Errors
    #[error("Invalid header: expected \"SPLICE\", found {found:?}")]
    InvalidHeader { found: Vec<u8> },

    #[error("Truncated header: {field} needs {expected} bytes, only {available} available")]
    TruncatedHeader {
        field: HeaderField,
        expected: usize,
        available: usize,
    },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration Errors
    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SpliceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SpliceError::InvalidHeader { .. } => "INVALID_HEADER",
            SpliceError::TruncatedHeader { .. } => "TRUNCATED_HEADER",
            SpliceError::FileNotFound { .. } => "FILE_NOT_FOUND",
            SpliceError::FileReadError { .. } => "FILE_READ_ERROR",
            SpliceError::InvalidConfig { .. } => "INVALID_CONFIG",
            SpliceError::Io(_) => "IO_ERROR",
            SpliceError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for failures caused by a malformed fixed-layout header
    pub fn is_fatal_parse_error(&self) -> bool {
        matches!(
            self,
            SpliceError::InvalidHeader { .. } | SpliceError::TruncatedHeader { .. }
        )
    }

    /// The header field that failed, if this is a header-format error
    pub fn header_field(&self) -> Option<HeaderField> {
        match self {
            SpliceError::InvalidHeader { .. } => Some(HeaderField::Magic),
            SpliceError::TruncatedHeader { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SpliceError::InvalidHeader { .. } => vec![
                "Check that the file is a drum machine .splice pattern",
                "The first six bytes must read SPLICE",
            ],
            SpliceError::TruncatedHeader { .. } => vec![
                "The file is shorter than the 50-byte fixed header",
                "Re-export the pattern from the device",
            ],
            SpliceError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            SpliceError::InvalidConfig { .. } => vec![
                "The config file must be a JSON object",
                "Known keys: honor_payload_length, max_tracks",
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SpliceError::InvalidHeader {
            found: b"SPLICX".to_vec(),
        };
        assert_eq!(err.error_code(), "INVALID_HEADER");
        assert!(err.is_fatal_parse_error());
        assert_eq!(err.header_field(), Some(HeaderField::Magic));
    }

    #[test]
    fn test_truncated_header_names_field() {
        let err = SpliceError::TruncatedHeader {
            field: HeaderField::Tempo,
            expected: 4,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Truncated header: tempo needs 4 bytes, only 1 available"
        );
        assert_eq!(err.header_field(), Some(HeaderField::Tempo));
    }

    #[test]
    fn test_file_errors_are_not_parse_errors() {
        let err = SpliceError::FileNotFound {
            path: PathBuf::from("missing.splice"),
        };
        assert!(!err.is_fatal_parse_error());
        assert!(err.header_field().is_none());
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn test_header_field_widths_sum_to_fixed_header() {
        let total: usize = [
            HeaderField::Magic,
            HeaderField::PayloadLength,
            HeaderField::Version,
            HeaderField::Tempo,
        ]
        .iter()
        .map(|f| f.width())
        .sum();
        assert_eq!(total, 50);
    }
}
