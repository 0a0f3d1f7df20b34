//! Interpolation methods for resampling.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Resampling method for masks and images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Nearest neighbor (hard edges, binary masks stay binary)
    #[default]
    Nearest,
    /// Bilinear (triangle filter)
    Linear,
    /// Area averaging when shrinking, bilinear when enlarging
    Area,
    /// Lanczos with a window of 3
    Lanczos,
}

impl Interpolation {
    /// The `image` crate filter used for generic resampling.
    ///
    /// `Area` maps to the triangle filter here; the shrinking case is
    /// handled separately by [`resize_image`](crate::resize_image).
    pub fn filter(self) -> FilterType {
        match self {
            Interpolation::Nearest => FilterType::Nearest,
            Interpolation::Linear | Interpolation::Area => FilterType::Triangle,
            Interpolation::Lanczos => FilterType::Lanczos3,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Linear => "linear",
            Interpolation::Area => "area",
            Interpolation::Lanczos => "lanczos",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an interpolation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interpolation '{0}' (expected nearest, linear, area or lanczos)")]
pub struct ParseInterpolationError(pub String);

impl FromStr for Interpolation {
    type Err = ParseInterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Interpolation::Nearest),
            "linear" | "bilinear" => Ok(Interpolation::Linear),
            "area" => Ok(Interpolation::Area),
            "lanczos" | "lanczos3" => Ok(Interpolation::Lanczos),
            _ => Err(ParseInterpolationError(s.to_string())),
        }
    }
}
