//! Character ramps ordered from darkest/densest to lightest/sparsest glyph.

use std::fmt;
use std::str::FromStr;

use super::error::ConvertError;

/// Standard density ramp (10 levels).
pub const STANDARD_RAMP: &str = "@%#*+=-:. ";

/// Dense ramp (12 levels) with a few extra heavy glyphs.
pub const DENSE_RAMP: &str = "@#$%&*+=-:. ";

/// Standard ramp in reverse order (10 levels), for light-on-dark looks.
pub const LIGHT_RAMP: &str = " .:-=+*#%@";

/// Minimal ramp (3 levels).
pub const MINIMAL_RAMP: &str = "@. ";

/// Named ramps selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampName {
    #[default]
    Standard,
    Dense,
    Light,
    Minimal,
}

impl RampName {
    /// Every named ramp, in display order.
    pub const ALL: [RampName; 4] = [
        RampName::Standard,
        RampName::Dense,
        RampName::Light,
        RampName::Minimal,
    ];

    /// The glyphs of this ramp, darkest first.
    pub fn chars(&self) -> &'static str {
        match self {
            RampName::Standard => STANDARD_RAMP,
            RampName::Dense => DENSE_RAMP,
            RampName::Light => LIGHT_RAMP,
            RampName::Minimal => MINIMAL_RAMP,
        }
    }

    /// Lowercase name as used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            RampName::Standard => "standard",
            RampName::Dense => "dense",
            RampName::Light => "light",
            RampName::Minimal => "minimal",
        }
    }
}

impl fmt::Display for RampName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RampName {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RampName::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| ConvertError::UnknownRamp(s.to_string()))
    }
}

/// An immutable, non-empty character ramp.
///
/// Index 0 is the darkest/densest glyph under the ramp's current
/// orientation, the last index the lightest/sparsest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from an ordered character sequence.
    ///
    /// # Errors
    /// * `ConvertError::EmptyRamp` - if the sequence has no characters
    pub fn new<I>(chars: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(ConvertError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    /// One of the built-in ramps.
    pub fn named(name: RampName) -> Self {
        Self {
            chars: name.chars().chars().collect(),
        }
    }

    /// Look up a built-in ramp by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        name.parse::<RampName>().map(Self::named)
    }

    /// The same glyphs in the opposite order.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    /// Number of brightness levels (always at least 1).
    pub fn levels(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Glyph at `index`, clamped to the last entry.
    #[inline]
    pub fn glyph(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::named(RampName::Standard)
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
