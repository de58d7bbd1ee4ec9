//! Pattern Decoder
//!
//! Single forward pass over a byte source positioned at offset 0:
//!
//! | Offset | Size | Encoding              | Field                  |
//! |--------|------|-----------------------|------------------------|
//! | 0      | 6    | ASCII                 | magic `SPLICE`         |
//! | 6      | 8    | big-endian i64        | payload length         |
//! | 14     | 32   | ASCII, NUL-padded     | version                |
//! | 46     | 4    | little-endian f32     | tempo                  |
//! | 50     | ...  | see [`tracks`]        | track records          |
//!
//! The payload length covers version, tempo and tracks. It bounds the track
//! scan but is not checked against the real stream length.

pub mod source;
pub mod tracks;

use std::io::Read;

use log::{debug, warn};

use crate::config::DecoderConfig;
use crate::error::{HeaderField, Result, SpliceError};
use crate::pattern::Pattern;

use self::source::{read_header_field, trim_nul_padding};
pub use self::tracks::{read_record, RecordEnd, TrackRecords};

// ============================================================================
// Constants
// ============================================================================

/// File magic
pub const MAGIC: &[u8; 6] = b"SPLICE";

/// Width of the version field
pub const VERSION_LEN: usize = 32;

/// Bytes consumed before the first track record
pub const FIXED_HEADER_LEN: usize = 6 + 8 + VERSION_LEN + 4;

/// Bytes of the payload taken by version and tempo
const PAYLOAD_METADATA_LEN: i64 = (VERSION_LEN + 4) as i64;

// ============================================================================
// Header
// ============================================================================

/// The fixed-layout part of a pattern file
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Declared size of version + tempo + tracks
    pub payload_length: i64,
    pub version: String,
    pub tempo: f32,
}

impl Header {
    /// Upper bound on the bytes holding track records
    ///
    /// A declared length too small to cover version and tempo leaves no room
    /// for tracks.
    pub fn track_section_len(&self) -> u64 {
        let len = self.payload_length.saturating_sub(PAYLOAD_METADATA_LEN);
        u64::try_from(len).unwrap_or(0)
    }

    /// True when the declared length cannot even cover version and tempo
    pub fn payload_too_short(&self) -> bool {
        self.payload_length < PAYLOAD_METADATA_LEN
    }
}

/// Decode the 50-byte fixed header
///
/// # Errors
/// * `TruncatedHeader` - the source ends inside a header field
/// * `InvalidHeader` - the magic is not `SPLICE`
/// * `Io` - the source itself failed
pub fn decode_header<R: Read>(reader: &mut R) -> Result<Header> {
    let magic: [u8; 6] = read_header_field(reader, HeaderField::Magic)?;
    if &magic != MAGIC {
        return Err(SpliceError::InvalidHeader {
            found: magic.to_vec(),
        });
    }

    let length: [u8; 8] = read_header_field(reader, HeaderField::PayloadLength)?;
    let payload_length = i64::from_be_bytes(length);

    let version: [u8; VERSION_LEN] = read_header_field(reader, HeaderField::Version)?;
    let version = trim_nul_padding(&version);

    let tempo: [u8; 4] = read_header_field(reader, HeaderField::Tempo)?;
    let tempo = f32::from_le_bytes(tempo);

    debug!(
        "Header: version={:?} tempo={} payload_length={}",
        version, tempo, payload_length
    );

    Ok(Header {
        payload_length,
        version,
        tempo,
    })
}

// ============================================================================
// Pattern decoding
// ============================================================================

/// Decode a pattern with the default configuration
///
/// # Example
/// ```ignore
/// let file = std::fs::File::open("pattern_1.splice")?;
/// let pattern = splice::decode(std::io::BufReader::new(file))?;
/// print!("{}", pattern);
/// ```
pub fn decode<R: Read>(reader: R) -> Result<Pattern> {
    decode_with_config(reader, &DecoderConfig::default())
}

/// Decode a pattern held in memory
pub fn decode_bytes(data: &[u8]) -> Result<Pattern> {
    decode(data)
}

/// Decode a pattern
///
/// Header failures abort decoding. Track decoding stops quietly at the
/// payload bound, at end of data, or at the first incomplete record.
pub fn decode_with_config<R: Read>(mut reader: R, config: &DecoderConfig) -> Result<Pattern> {
    let header = decode_header(&mut reader)?;

    let bound = if config.honor_payload_length {
        header.track_section_len()
    } else {
        u64::MAX
    };
    if config.honor_payload_length && header.payload_too_short() {
        warn!(
            "Payload length {} leaves no room for tracks",
            header.payload_length
        );
    }

    let tracks: Vec<_> =
        TrackRecords::with_limit(reader.take(bound), config.max_tracks).collect();
    debug!("Decoded {} track(s)", tracks.len());

    Ok(Pattern::new(header.version, header.tempo, tracks))
}
