//! CLI Command Implementations
//!
//! Each command writes its report to `out` so it can be captured in tests.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::DecoderConfig;
use crate::error::{Result, SpliceError};
use crate::io::{decode_file_with_config, find_pattern_files};

/// Outcome of a directory scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub decoded: usize,
    pub failed: usize,
}

/// Print the recovery suggestions for a failed command, one per line.
pub fn report_suggestions(err: &SpliceError, out: &mut impl Write) -> io::Result<()> {
    for suggestion in err.recovery_suggestions() {
        writeln!(out, "  - {}", suggestion)?;
    }
    Ok(())
}

/// Build the decoder config from an optional file and CLI overrides.
pub fn load_config(path: Option<&Path>, ignore_payload_length: bool) -> Result<DecoderConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading decoder config: {}", path.display());
            DecoderConfig::load(path)?
        }
        None => DecoderConfig::default(),
    };
    if ignore_payload_length {
        config.honor_payload_length = false;
    }
    Ok(config)
}

/// Print each pattern in its canonical text form.
pub fn show(paths: &[PathBuf], config: &DecoderConfig, out: &mut impl Write) -> Result<()> {
    for path in paths {
        info!("Decoding: {}", path.display());
        let pattern = decode_file_with_config(path, config)?;
        write!(out, "{}", pattern)?;
    }
    Ok(())
}

/// Print one pattern as pretty JSON.
pub fn json(path: &Path, config: &DecoderConfig, out: &mut impl Write) -> Result<()> {
    let pattern = decode_file_with_config(path, config)?;
    serde_json::to_writer_pretty(&mut *out, &pattern)?;
    writeln!(out)?;
    Ok(())
}

/// Decode every pattern file under `dir`, one summary line per file.
///
/// Files that fail to decode are reported by error code and counted; they do
/// not stop the scan.
pub fn scan(dir: &Path, config: &DecoderConfig, out: &mut impl Write) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for path in find_pattern_files(dir)? {
        match decode_file_with_config(&path, config) {
            Ok(pattern) => {
                writeln!(
                    out,
                    "{}: {}, {} bpm, {} track(s)",
                    path.display(),
                    pattern.version(),
                    crate::pattern::format_tempo(pattern.tempo()),
                    pattern.tracks().len()
                )?;
                summary.decoded += 1;
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                writeln!(out, "{}: {}", path.display(), e.error_code())?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
