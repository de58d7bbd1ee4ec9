//! Track record decoding
//!
//! The format has no track count. Records follow the fixed header back to
//! back until the payload bound or the stream runs out:
//!
//! ```text
//! [id: u8][name_len: i32 BE][name: name_len bytes][steps: 16 bytes]
//! ```
//!
//! A record that cannot be read completely ends the sequence. It is never an
//! error.

use std::io::{self, Read};

use log::{debug, warn};

use crate::decoder::source::{read_array, read_bytes};
use crate::pattern::{Steps, Track, STEPS_PER_TRACK};

/// Why a record could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEnd {
    /// No bytes left where the next record would start
    Exhausted,
    /// Data ran out inside a record
    Incomplete(&'static str),
    /// The name length field is negative
    NegativeNameLength(i32),
}

/// Lazy, fused sequence of track records read from a byte source
///
/// The source should already be limited to the track section, e.g. with
/// [`Read::take`].
pub struct TrackRecords<R> {
    reader: R,
    remaining: Option<usize>,
    done: bool,
}

impl<R: Read> TrackRecords<R> {
    /// Decode records until `reader` is exhausted
    pub fn new(reader: R) -> Self {
        TrackRecords {
            reader,
            remaining: None,
            done: false,
        }
    }

    /// Decode at most `max_tracks` records
    pub fn with_limit(reader: R, max_tracks: Option<usize>) -> Self {
        TrackRecords {
            reader,
            remaining: max_tracks,
            done: false,
        }
    }
}

impl<R: Read> Iterator for TrackRecords<R> {
    type Item = Track;

    fn next(&mut self) -> Option<Track> {
        if self.done {
            return None;
        }
        if self.remaining == Some(0) {
            debug!("Track limit reached");
            self.done = true;
            return None;
        }

        match read_record(&mut self.reader) {
            Ok(Ok(track)) => {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                Some(track)
            }
            Ok(Err(end)) => {
                match end {
                    RecordEnd::Exhausted => debug!("Track section exhausted"),
                    RecordEnd::Incomplete(field) => {
                        debug!("Track record ends inside {}, stopping", field)
                    }
                    RecordEnd::NegativeNameLength(len) => {
                        debug!("Negative track name length {}, stopping", len)
                    }
                }
                self.done = true;
                None
            }
            Err(e) => {
                warn!("Read error while decoding tracks, stopping: {}", e);
                self.done = true;
                None
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for TrackRecords<R> {}

/// Decode one record from the current position
///
/// The outer error is a failing source; the inner one is a normal end of the
/// track section.
pub fn read_record<R: Read>(reader: &mut R) -> io::Result<std::result::Result<Track, RecordEnd>> {
    let Some([id]) = read_array::<_, 1>(reader)? else {
        return Ok(Err(RecordEnd::Exhausted));
    };

    let Some(len_bytes) = read_array::<_, 4>(reader)? else {
        return Ok(Err(RecordEnd::Incomplete("name length")));
    };
    let name_len = i32::from_be_bytes(len_bytes);
    if name_len < 0 {
        return Ok(Err(RecordEnd::NegativeNameLength(name_len)));
    }

    let Some(name) = read_bytes(reader, name_len as usize)? else {
        return Ok(Err(RecordEnd::Incomplete("name")));
    };

    let Some(step_bytes) = read_array::<_, STEPS_PER_TRACK>(reader)? else {
        return Ok(Err(RecordEnd::Incomplete("steps")));
    };

    Ok(Ok(Track::new(
        id,
        String::from_utf8_lossy(&name).into_owned(),
        Steps::from_bytes(&step_bytes),
    )))
}
