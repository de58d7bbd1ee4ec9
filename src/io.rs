//! Pattern file access
//!
//! Opens `.splice` files and hands them to the decoder. The file handle is
//! scoped to the call and released on every exit path.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::DecoderConfig;
use crate::decoder::decode_with_config;
use crate::error::{Result, SpliceError};
use crate::pattern::Pattern;

/// Extension used by pattern files
pub const PATTERN_EXTENSION: &str = "splice";

/// Decode the pattern file at `path` with the default configuration
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `FileReadError` - If the file cannot be opened
/// * `InvalidHeader` / `TruncatedHeader` - If the header is malformed
pub fn decode_file(path: &Path) -> Result<Pattern> {
    decode_file_with_config(path, &DecoderConfig::default())
}

/// Decode the pattern file at `path`
pub fn decode_file_with_config(path: &Path, config: &DecoderConfig) -> Result<Pattern> {
    if !path.exists() {
        return Err(SpliceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| SpliceError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Decoding pattern file: {}", path.display());
    decode_with_config(BufReader::new(file), config)
}

/// List every pattern file below `dir`, sorted by path
pub fn find_pattern_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(SpliceError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            SpliceError::FileReadError {
                path,
                source: e.into(),
            }
        })?;

        let is_pattern = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == PATTERN_EXTENSION);
        if entry.file_type().is_file() && is_pattern {
            files.push(entry.into_path());
        }
    }

    info!("Found {} pattern file(s) in {}", files.len(), dir.display());
    Ok(files)
}
