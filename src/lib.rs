//! Splice - Drum Machine Pattern Decoder
//!
//! Decodes the binary `.splice` pattern files written by a hardware drum
//! machine and renders them to their canonical text form.
//!
//! # Format
//!
//! A fixed 50-byte header (magic, payload length, version, tempo) followed by
//! track records until the declared payload or the data runs out. See
//! [`decoder`] for the byte layout.
//!
//! # Example
//! ```
//! let mut data = b"SPLICE".to_vec();
//! data.extend_from_slice(&36i64.to_be_bytes());
//! let mut version = [0u8; 32];
//! version[..3].copy_from_slice(b"808");
//! data.extend_from_slice(&version);
//! data.extend_from_slice(&120.0f32.to_le_bytes());
//!
//! let pattern = splice::decode_bytes(&data).unwrap();
//! assert_eq!(pattern.to_string(), "Saved with HW Version: 808\nTempo: 120\n");
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod io;
pub mod pattern;

pub use config::DecoderConfig;
pub use decoder::{decode, decode_bytes, decode_header, decode_with_config, Header};
pub use error::{HeaderField, Result, SpliceError};
pub use io::{decode_file, decode_file_with_config, find_pattern_files};
pub use pattern::{Pattern, Steps, Track};
