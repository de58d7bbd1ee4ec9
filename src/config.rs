//! Decoder configuration
//!
//! Defaults reproduce the canonical decoding behaviour. A config can also be
//! loaded from a JSON file, e.g.
//!
//! ```json
//! { "honor_payload_length": false, "max_tracks": 32 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpliceError};

/// Options controlling how track records are scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Stop scanning for tracks at the declared payload length.
    /// When false, tracks are decoded until the stream ends.
    pub honor_payload_length: bool,
    /// Stop after this many tracks
    pub max_tracks: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            honor_payload_length: true,
            max_tracks: None,
        }
    }
}

impl DecoderConfig {
    /// Config that ignores the declared payload length
    pub fn until_end_of_stream() -> Self {
        DecoderConfig {
            honor_payload_length: false,
            ..Default::default()
        }
    }

    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpliceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| SpliceError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| SpliceError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_honors_payload_length() {
        let config = DecoderConfig::default();
        assert!(config.honor_payload_length);
        assert!(config.max_tracks.is_none());
        assert!(!DecoderConfig::until_end_of_stream().honor_payload_length);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("decoder.json");
        fs::write(&path, r#"{ "max_tracks": 4 }"#).unwrap();

        let config = DecoderConfig::load(&path).unwrap();
        assert!(config.honor_payload_length);
        assert_eq!(config.max_tracks, Some(4));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let err = DecoderConfig::load(&temp_dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("decoder.json");
        fs::write(&path, "honor_payload_length = false").unwrap();

        let err = DecoderConfig::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
