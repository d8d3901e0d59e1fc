//! Severity categories keyed by floored magnitude.

use std::fmt;

use serde::Serialize;

/// Opaque severity key used by the rendering layer to pick a color.
///
/// The key strings match the names a palette is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MagnitudeCategory {
    #[serde(rename = "magnitude1")]
    Magnitude1,
    #[serde(rename = "magnitude2")]
    Magnitude2,
    #[serde(rename = "magnitude3")]
    Magnitude3,
    #[serde(rename = "magnitude4")]
    Magnitude4,
    #[serde(rename = "magnitude5")]
    Magnitude5,
    #[serde(rename = "magnitude6")]
    Magnitude6,
    #[serde(rename = "magnitude7")]
    Magnitude7,
    #[serde(rename = "magnitude8")]
    Magnitude8,
    #[serde(rename = "magnitude9")]
    Magnitude9,
    #[serde(rename = "magnitude10plus")]
    Magnitude10Plus,
}

impl MagnitudeCategory {
    /// Every category, lowest severity first.
    pub const ALL: [Self; 10] = [
        Self::Magnitude1,
        Self::Magnitude2,
        Self::Magnitude3,
        Self::Magnitude4,
        Self::Magnitude5,
        Self::Magnitude6,
        Self::Magnitude7,
        Self::Magnitude8,
        Self::Magnitude9,
        Self::Magnitude10Plus,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Magnitude1 => "magnitude1",
            Self::Magnitude2 => "magnitude2",
            Self::Magnitude3 => "magnitude3",
            Self::Magnitude4 => "magnitude4",
            Self::Magnitude5 => "magnitude5",
            Self::Magnitude6 => "magnitude6",
            Self::Magnitude7 => "magnitude7",
            Self::Magnitude8 => "magnitude8",
            Self::Magnitude9 => "magnitude9",
            Self::Magnitude10Plus => "magnitude10plus",
        }
    }

    /// Look a category up by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for MagnitudeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Map a magnitude to its category by mathematical floor.
///
/// Floors of 1 and below all share the lowest bucket: 0, 1 and negative
/// magnitudes are shown alike. Floors of 10 and above, and NaN, fall into
/// [`MagnitudeCategory::Magnitude10Plus`].
pub fn magnitude_category(magnitude: f64) -> MagnitudeCategory {
    let floor = magnitude.floor();

    if floor <= 1.0 {
        return MagnitudeCategory::Magnitude1;
    }
    if floor.is_nan() || floor >= 10.0 {
        return MagnitudeCategory::Magnitude10Plus;
    }

    // 2.0 <= floor < 10.0 here, so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let floor = floor as u8;

    match floor {
        2 => MagnitudeCategory::Magnitude2,
        3 => MagnitudeCategory::Magnitude3,
        4 => MagnitudeCategory::Magnitude4,
        5 => MagnitudeCategory::Magnitude5,
        6 => MagnitudeCategory::Magnitude6,
        7 => MagnitudeCategory::Magnitude7,
        8 => MagnitudeCategory::Magnitude8,
        9 => MagnitudeCategory::Magnitude9,
        _ => MagnitudeCategory::Magnitude10Plus,
    }
}
