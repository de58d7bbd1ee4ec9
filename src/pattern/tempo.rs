//! Tempo rendering
//!
//! Hardware tempos are nearly always whole numbers, but the float32 stored in
//! the file can carry representation noise. Tempos are snapped to the nearest
//! half beat for display; a tempo that is already on that grid prints as an
//! integer, anything else prints with one decimal.

/// Tempo display resolution in BPM
pub const TEMPO_RESOLUTION: f64 = 0.5;

/// Round a tempo to the nearest multiple of [`TEMPO_RESOLUTION`]
///
/// Halfway values round up, and the intermediate is truncated toward zero,
/// matching how the device firmware reports tempos.
#[inline]
pub fn round_tempo(tempo: f32) -> f64 {
    let tempo = f64::from(tempo);
    ((tempo / TEMPO_RESOLUTION + 0.5) as i64) as f64 * TEMPO_RESOLUTION
}

/// Render a tempo for the text output
///
/// # Examples
/// ```
/// use splice::pattern::format_tempo;
///
/// assert_eq!(format_tempo(120.0), "120");
/// assert_eq!(format_tempo(98.6), "98.5");
/// ```
pub fn format_tempo(tempo: f32) -> String {
    let rounded = round_tempo(tempo);
    if rounded == f64::from(tempo) {
        (tempo as i64).to_string()
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_whole_tempos_render_as_integers() {
        assert_eq!(format_tempo(120.0), "120");
        assert_eq!(format_tempo(33.0), "33");
        assert_eq!(format_tempo(0.0), "0");
    }

    #[test]
    fn test_fractional_tempo_snaps_to_half() {
        assert_eq!(format_tempo(98.6), "98.5");
        assert_eq!(format_tempo(98.8), "99.0");
        assert_eq!(format_tempo(240.2), "240.0");
    }

    #[test]
    fn test_on_grid_half_truncates() {
        // 98.5 already lies on the grid, so it takes the integer branch.
        assert_eq!(format_tempo(98.5), "98");
    }

    #[test]
    fn test_noise_near_integer_shows_one_decimal() {
        assert_eq!(format_tempo(120.00001), "120.0");
        assert_relative_eq!(round_tempo(120.00001), 120.0);
    }

    #[test]
    fn test_round_tempo() {
        assert_relative_eq!(round_tempo(98.6), 98.5);
        assert_relative_eq!(round_tempo(98.75), 99.0);
        assert_relative_eq!(round_tempo(118.2), 118.0);
    }
}
