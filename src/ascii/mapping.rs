//! Brightness to character mapping.

use super::charset::Ramp;

/// Ramp index for a brightness value.
///
/// Computes `floor(brightness / 255 * (levels - 1))` and clamps the result
/// to `[0, levels - 1]`. The division truncates; brightness 0 always maps
/// to index 0 and brightness 255 to the last index.
///
/// Integer arithmetic gives the exact floor without float rounding at
/// ramp boundaries.
#[inline]
pub fn pixel_to_char_index(brightness: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let idx = (brightness as usize * (levels - 1)) / 255;
    idx.min(levels - 1)
}

/// Character of `ramp` representing a brightness value.
#[inline]
pub fn pixel_to_char(brightness: u8, ramp: &Ramp) -> char {
    ramp.glyph(pixel_to_char_index(brightness, ramp.levels()))
}

/// Map brightness values to characters from a ramp.
///
/// # Example
/// ```ignore
/// let ramp = Ramp::named(RampName::Minimal); // "@. "
/// let chars = map_to_chars(&[0, 127, 128, 255], &ramp);
/// assert_eq!(chars, vec!['@', '@', '.', ' ']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &Ramp) -> Vec<char> {
    let mut out = Vec::new();
    map_to_chars_into(brightness, ramp, &mut out);
    out
}

/// Map brightness values to characters, reusing an existing buffer.
///
/// # Returns
/// The number of characters written to the buffer.
pub fn map_to_chars_into(brightness: &[u8], ramp: &Ramp, buffer: &mut Vec<char>) -> usize {
    buffer.clear();
    buffer.reserve(brightness.len());
    buffer.extend(brightness.iter().map(|&b| pixel_to_char(b, ramp)));
    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RampName;

    #[test]
    fn test_index_endpoints() {
        for levels in 2..=16 {
            assert_eq!(pixel_to_char_index(0, levels), 0);
            assert_eq!(pixel_to_char_index(255, levels), levels - 1);
        }
    }

    #[test]
    fn test_index_single_level() {
        assert_eq!(pixel_to_char_index(0, 1), 0);
        assert_eq!(pixel_to_char_index(255, 1), 0);
    }

    #[test]
    fn test_index_truncates() {
        // 127/255*2 = 0.996 -> 0, 128/255*2 = 1.004 -> 1
        assert_eq!(pixel_to_char_index(127, 3), 0);
        assert_eq!(pixel_to_char_index(128, 3), 1);
        assert_eq!(pixel_to_char_index(254, 3), 1);
    }

    #[test]
    fn test_index_matches_float_formula_for_named_ramps() {
        for name in RampName::ALL {
            let levels = Ramp::named(name).levels();
            for b in 0..=255u8 {
                let expected = ((b as f64 / 255.0) * (levels - 1) as f64).floor() as usize;
                assert_eq!(pixel_to_char_index(b, levels), expected.min(levels - 1));
            }
        }
    }

    #[test]
    fn test_map_to_chars_into_reuses_buffer() {
        let ramp = Ramp::named(RampName::Minimal);
        let mut buf = vec!['x'; 8];
        assert_eq!(map_to_chars_into(&[0, 255], &ramp, &mut buf), 2);
        assert_eq!(buf, vec!['@', ' ']);
    }
}
