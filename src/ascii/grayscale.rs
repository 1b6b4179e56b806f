//! RGB/BGR to grayscale conversion using the ITU-R BT.601 luma formula.

use crate::camera::{Frame, FrameFormat};

/// Luma of one pixel given its red, green and blue channels.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, computed with integer math
/// (coefficients scaled by 1000, 299 + 587 + 114 = 1000) and rounded to
/// the nearest integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Convert a color frame to grayscale, one byte per pixel.
///
/// Honors the frame's channel order, so BGR sources produce the same
/// intensities as their RGB equivalents.
pub fn to_grayscale(frame: &Frame) -> Vec<u8> {
    let mut gray = Vec::new();
    to_grayscale_into(frame, &mut gray);
    gray
}

/// Convert a color frame to grayscale, reusing an existing buffer.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(frame: &Frame, buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(frame.pixel_count());

    let bpp = frame.bytes_per_pixel();
    for px in frame.data.chunks_exact(bpp) {
        let y = match frame.format {
            FrameFormat::Rgb => luma(px[0], px[1], px[2]),
            FrameFormat::Bgr => luma(px[2], px[1], px[0]),
        };
        buffer.push(y);
    }

    buffer.len()
}
