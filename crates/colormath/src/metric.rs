use core::str::FromStr;

use crate::error::ArgumentError;
use crate::Float;

/// The algorithm for computing contrast or distance between two colors.
///
/// Both ΔE metrics operate on CIELAB and report perceptual distance, with
/// smaller values meaning more similar colors. The naive metric operates on
/// RGB and reports legibility, with values above roughly 0.22 likely to be
/// legible. It is symmetric, as is ΔE*2000. ΔE*94 treats its first argument
/// as the reference color and hence is not symmetric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastAlgorithm {
    /// A weighted blend of brightness, hue, and luminosity differences.
    Naive,
    /// The CIE94 color difference.
    #[default]
    DeltaE94,
    /// The CIEDE2000 color difference.
    DeltaE2000,
}

impl ContrastAlgorithm {
    /// Get this algorithm's name, which is also accepted by
    /// [`ContrastAlgorithm::from_str`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::DeltaE94 => "delta_e94",
            Self::DeltaE2000 => "delta_e2000",
        }
    }
}

impl FromStr for ContrastAlgorithm {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "delta_e94" => Ok(Self::DeltaE94),
            "delta_e2000" => Ok(Self::DeltaE2000),
            _ => Err(ArgumentError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl core::fmt::Display for ContrastAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The application-specific weights of ΔE*94.
///
/// CIE94 defines two sets, one for graphic arts and one for textiles. The
/// former is the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaE94Weights {
    /// The chroma weight applied to the reference chroma.
    pub k1: Float,
    /// The hue weight applied to the reference chroma.
    pub k2: Float,
    /// The lightness factor.
    pub kl: Float,
}

impl DeltaE94Weights {
    /// The weights for graphic arts.
    pub const GRAPHIC_ARTS: DeltaE94Weights = DeltaE94Weights {
        k1: 0.045,
        k2: 0.015,
        kl: 1.0,
    };

    /// The weights for textiles.
    pub const TEXTILES: DeltaE94Weights = DeltaE94Weights {
        k1: 0.048,
        k2: 0.014,
        kl: 2.0,
    };
}

impl Default for DeltaE94Weights {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

impl FromStr for DeltaE94Weights {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graphic_arts" => Ok(Self::GRAPHIC_ARTS),
            "textiles" => Ok(Self::TEXTILES),
            _ => Err(ArgumentError::UnknownWeights(s.to_string())),
        }
    }
}

/// The parametric factors of ΔE*2000 for lightness, chroma, and hue.
///
/// They all default to one. Changing them is rarely a good idea.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Klch {
    /// The lightness factor.
    pub l: Float,
    /// The chroma factor.
    pub c: Float,
    /// The hue factor.
    pub h: Float,
}

impl Default for Klch {
    fn default() -> Self {
        Self {
            l: 1.0,
            c: 1.0,
            h: 1.0,
        }
    }
}
