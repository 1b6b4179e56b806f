//! Frame to text conversion.

use crate::camera::Frame;

use super::charset::Ramp;
use super::downsample::{downsample, downsample_into};
use super::error::ConvertError;
use super::grayscale::{to_grayscale, to_grayscale_into};
use super::mapping::{map_to_chars, map_to_chars_into, pixel_to_char};

/// Converts color frames to ASCII art with a fixed ramp.
///
/// The ramp orientation is decided once at construction: with `invert`
/// set, the ramp is reversed (`"@. "` becomes `" .@"`). Brightness values
/// are never flipped per pixel.
///
/// The grayscale, sample and glyph buffers are kept between calls so a
/// running session does not reallocate them every frame.
#[derive(Debug, Clone)]
pub struct AsciiConverter {
    ramp: Ramp,
    inverted: bool,
    gray: Vec<u8>,
    samples: Vec<u8>,
    glyphs: Vec<char>,
}

impl AsciiConverter {
    pub fn new(ramp: Ramp, invert: bool) -> Self {
        let ramp = if invert { ramp.reversed() } else { ramp };
        Self {
            ramp,
            inverted: invert,
            gray: Vec::new(),
            samples: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    /// The ramp in effect, after any inversion.
    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn pixel_to_char(&self, brightness: u8) -> char {
        pixel_to_char(brightness, &self.ramp)
    }

    /// Render a frame as `height` lines of `width` characters.
    ///
    /// # Errors
    /// * `ConvertError::InvalidDimensions` - width or height is zero
    /// * `ConvertError::EmptyFrame` - the frame has no pixels
    /// * `ConvertError::MalformedFrame` - the data length does not match a
    ///   3-channel image of the frame's dimensions
    pub fn frame_to_ascii(
        &mut self,
        frame: &Frame,
        width: u16,
        height: u16,
    ) -> Result<String, ConvertError> {
        check_target(width, height)?;
        validate_frame(frame)?;

        to_grayscale_into(frame, &mut self.gray);
        downsample_into(
            &self.gray,
            frame.width,
            frame.height,
            width,
            height,
            &mut self.samples,
        );
        map_to_chars_into(&self.samples, &self.ramp, &mut self.glyphs);

        Ok(join_rows(&self.glyphs, width))
    }
}

impl Default for AsciiConverter {
    fn default() -> Self {
        Self::new(Ramp::default(), false)
    }
}

/// Check that a frame holds a non-empty 3-channel image.
pub fn validate_frame(frame: &Frame) -> Result<(), ConvertError> {
    if frame.width == 0 || frame.height == 0 {
        return Err(ConvertError::EmptyFrame {
            width: frame.width,
            height: frame.height,
        });
    }

    let expected = frame.pixel_count() * frame.bytes_per_pixel();
    if frame.data.len() != expected {
        return Err(ConvertError::MalformedFrame {
            width: frame.width,
            height: frame.height,
            expected,
            actual: frame.data.len(),
        });
    }

    Ok(())
}

fn check_target(width: u16, height: u16) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Rows of `width` glyphs joined with `\n`, no trailing newline.
fn join_rows(glyphs: &[char], width: u16) -> String {
    let width = width as usize;
    let mut out = String::with_capacity(glyphs.len() + glyphs.len() / width);
    for (i, row) in glyphs.chunks(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row);
    }
    out
}

/// Render a frame with an explicit ramp.
///
/// Grayscale conversion, area-averaged resize to exactly `width` x
/// `height`, then one ramp glyph per sample. Rows are joined with `\n`
/// and there is no trailing newline. Allocates fresh buffers on every
/// call; use [`AsciiConverter`] for repeated frames.
pub fn frame_to_ascii(
    frame: &Frame,
    width: u16,
    height: u16,
    ramp: &Ramp,
) -> Result<String, ConvertError> {
    check_target(width, height)?;
    validate_frame(frame)?;

    let gray = to_grayscale(frame);
    let samples = downsample(&gray, frame.width, frame.height, width, height);
    debug_assert_eq!(samples.len(), width as usize * height as usize);

    Ok(join_rows(&map_to_chars(&samples, ramp), width))
}
