//! Error type for ASCII conversion.

/// Invalid input handed to the converter or to ramp construction.
///
/// Every variant is a configuration or input problem; none of them is
/// transient, so callers should fail fast instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("output dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("source frame is empty ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("malformed frame: expected {expected} bytes for {width}x{height} 3-channel image, got {actual}")]
    MalformedFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("character ramp must contain at least one character")]
    EmptyRamp,

    #[error("unknown ramp '{0}' (available: standard, dense, light, minimal)")]
    UnknownRamp(String),
}
