//! ASCII converter for camera frames.
//!
//! The conversion pipeline:
//!
//! 1. **Grayscale conversion** - RGB/BGR to luma using BT.601
//! 2. **Downsampling** - area-averaged resize to the character grid
//! 3. **Character mapping** - truncating brightness to ramp index mapping
//!
//! # Ramps
//!
//! Built-in ramps are available via [`RampName`]:
//! - `Standard` - 10-level density ramp `@%#*+=-:. `
//! - `Dense` - 12-level ramp `@#$%&*+=-:. `
//! - `Light` - the standard ramp reversed
//! - `Minimal` - 3-level `@. `

mod charset;
mod convert;
mod downsample;
mod error;
mod grayscale;
mod mapping;

pub use charset::{Ramp, RampName, DENSE_RAMP, LIGHT_RAMP, MINIMAL_RAMP, STANDARD_RAMP};
pub use convert::{frame_to_ascii, validate_frame, AsciiConverter};
pub use downsample::{downsample, downsample_into};
pub use error::ConvertError;
pub use grayscale::{luma, to_grayscale, to_grayscale_into};
pub use mapping::{map_to_chars, map_to_chars_into, pixel_to_char, pixel_to_char_index};
