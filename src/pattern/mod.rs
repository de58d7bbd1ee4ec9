//! Decoded Pattern Model
//!
//! Immutable value types produced by the decoder and consumed by the text
//! renderer. A `Pattern` is one drum machine file: the hardware version it
//! was saved with, its tempo, and its tracks in file order.

pub mod tempo;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use tempo::format_tempo;

// ============================================================================
// Constants
// ============================================================================

/// Number of sixteenth-note slots in every track
pub const STEPS_PER_TRACK: usize = 16;

/// Steps are rendered in groups of this many between `|` separators
pub const STEPS_PER_GROUP: usize = 4;

// ============================================================================
// Steps
// ============================================================================

/// The 16 on/off slots of a track, in playback order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Steps([bool; STEPS_PER_TRACK]);

impl Steps {
    /// Create steps from explicit booleans
    pub fn new(steps: [bool; STEPS_PER_TRACK]) -> Self {
        Steps(steps)
    }

    /// Map raw step bytes: any nonzero byte is an active step
    pub fn from_bytes(bytes: &[u8; STEPS_PER_TRACK]) -> Self {
        let mut steps = [false; STEPS_PER_TRACK];
        for (step, byte) in steps.iter_mut().zip(bytes) {
            *step = *byte != 0;
        }
        Steps(steps)
    }

    /// Whether the step at `index` is active. Out of range is inactive.
    pub fn is_active(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of active steps
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|s| **s).count()
    }

    /// Iterate over the steps in playback order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl From<[bool; STEPS_PER_TRACK]> for Steps {
    fn from(steps: [bool; STEPS_PER_TRACK]) -> Self {
        Steps(steps)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, active) in self.iter().enumerate() {
            if i % STEPS_PER_GROUP == 0 {
                f.write_str("|")?;
            }
            f.write_str(if active { "x" } else { "-" })?;
        }
        f.write_str("|")
    }
}

// ============================================================================
// Track
// ============================================================================

/// One instrument lane. Ids are not unique within a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    id: u8,
    name: String,
    steps: Steps,
}

impl Track {
    /// Create a new track
    pub fn new(id: u8, name: impl Into<String>, steps: impl Into<Steps>) -> Self {
        Track {
            id,
            name: name.into(),
            steps: steps.into(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Track name as text
    ///
    /// Decoded as lossy UTF-8: bytes that are not valid UTF-8 show up as
    /// U+FFFD rather than being kept raw.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.name, self.steps)
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// A fully decoded pattern file
///
/// Rendering through `Display` produces the canonical text form:
///
/// ```text
/// Saved with HW Version: 0.808-alpha
/// Tempo: 120
///
/// (0) kick	|x---|x---|x---|x---|
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    version: String,
    tempo: f32,
    tracks: Vec<Track>,
}

impl Pattern {
    /// Create a pattern. Tracks keep the given order.
    pub fn new(version: impl Into<String>, tempo: f32, tracks: Vec<Track>) -> Self {
        Pattern {
            version: version.into(),
            tempo,
            tracks,
        }
    }

    /// Hardware version string, without trailing NUL padding
    ///
    /// Decoded as lossy UTF-8, like track names.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tempo exactly as stored in the file
    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Tracks in file order, duplicates included
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", format_tempo(self.tempo))?;
        // blank line separates the track block from the metadata
        if !self.tracks.is_empty() {
            writeln!(f)?;
        }
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_fourth() -> Steps {
        let mut steps = [false; STEPS_PER_TRACK];
        for i in (0..STEPS_PER_TRACK).step_by(4) {
            steps[i] = true;
        }
        Steps::new(steps)
    }

    #[test]
    fn test_steps_from_bytes_nonzero_is_active() {
        let mut bytes = [0u8; STEPS_PER_TRACK];
        bytes[0] = 0x01;
        bytes[5] = 0x80;
        bytes[15] = 0xFF;

        let steps = Steps::from_bytes(&bytes);
        assert!(steps.is_active(0));
        assert!(steps.is_active(5));
        assert!(steps.is_active(15));
        assert!(!steps.is_active(1));
        assert_eq!(steps.active_count(), 3);
    }

    #[test]
    fn test_steps_out_of_range_inactive() {
        let steps = Steps::new([true; STEPS_PER_TRACK]);
        assert!(!steps.is_active(STEPS_PER_TRACK));
    }

    #[test]
    fn test_steps_iter_playback_order() {
        let steps = every_fourth();
        let active: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect();
        assert_eq!(active, vec![0, 4, 8, 12]);
        assert_eq!(steps.iter().count(), STEPS_PER_TRACK);
    }

    #[test]
    fn test_steps_display_groups_of_four() {
        assert_eq!(every_fourth().to_string(), "|x---|x---|x---|x---|");
        assert_eq!(Steps::default().to_string(), "|----|----|----|----|");
    }

    #[test]
    fn test_track_display() {
        let track = Track::new(40, "snare", every_fourth());
        assert_eq!(track.to_string(), "(40) snare\t|x---|x---|x---|x---|");
    }

    #[test]
    fn test_track_empty_name() {
        let track = Track::new(3, "", Steps::default());
        assert_eq!(track.to_string(), "(3) \t|----|----|----|----|");
    }

    #[test]
    fn test_pattern_display_without_tracks() {
        let pattern = Pattern::new("808", 33.0, Vec::new());
        assert_eq!(pattern.to_string(), "Saved with HW Version: 808\nTempo: 33\n");
    }

    #[test]
    fn test_pattern_display_end_to_end() {
        let pattern = Pattern::new(
            "0.808-alpha",
            120.0,
            vec![Track::new(0, "kick", every_fourth())],
        );
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha\nTempo: 120\n\n(0) kick\t|x---|x---|x---|x---|\n"
        );
    }

    #[test]
    fn test_pattern_display_multiple_tracks() {
        let pattern = Pattern::new(
            "0.909",
            240.0,
            vec![
                Track::new(0, "kick", every_fourth()),
                Track::new(1, "hh", Steps::default()),
            ],
        );
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.909\nTempo: 240\n\n(0) kick\t|x---|x---|x---|x---|\n(1) hh\t|----|----|----|----|\n"
        );
    }

    #[test]
    fn test_pattern_keeps_duplicate_ids_in_order() {
        let pattern = Pattern::new(
            "0.909",
            98.6,
            vec![
                Track::new(1, "clap", Steps::default()),
                Track::new(1, "clap", every_fourth()),
            ],
        );
        assert_eq!(pattern.tracks().len(), 2);
        assert_eq!(pattern.tracks()[0].steps().active_count(), 0);
        assert_eq!(pattern.tracks()[1].steps().active_count(), 4);
    }

    #[test]
    fn test_pattern_json_roundtrip() {
        let pattern = Pattern::new("0.808", 120.0, vec![Track::new(0, "kick", every_fourth())]);
        let json = serde_json::to_string(&pattern).unwrap();
        let restored: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, pattern);
    }
}
