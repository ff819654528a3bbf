//! Helper module with the options for matching colors.
//!
//! This module provides the options for [`Rgb::closest_match`](crate::Rgb::closest_match) and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use colormath::ContrastAlgorithm;
//! # use colormath::opt::{MatchOptions, Threshold};
//! let options = MatchOptions::builder()
//!     .algorithm(ContrastAlgorithm::DeltaE2000)
//!     .threshold(Threshold::JustNoticeable)
//!     .build();
//!
//! assert_eq!(options.algorithm(), ContrastAlgorithm::DeltaE2000);
//! assert_eq!(options.threshold(), 2.3);
//! ```

use core::str::FromStr;

use crate::error::ArgumentError;
use crate::{ContrastAlgorithm, DeltaE94Weights, Float, Klch, Xyz};

/// The maximum distance for a match.
///
/// A candidate matches only if its distance is strictly less than the
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    /// The just noticeable difference of 2.3 in ΔE units.
    JustNoticeable,
    /// An explicit distance.
    Distance(Float),
}

impl Threshold {
    /// The just noticeable difference.
    pub const JND: Float = 2.3;

    /// The default distance, which admits practically any candidate.
    pub const DEFAULT: Float = 1000.0;

    /// Get the threshold's numeric value.
    pub const fn value(&self) -> Float {
        match self {
            Self::JustNoticeable => Self::JND,
            Self::Distance(distance) => *distance,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Distance(Self::DEFAULT)
    }
}

impl From<Float> for Threshold {
    fn from(value: Float) -> Self {
        Self::Distance(value)
    }
}

impl FromStr for Threshold {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jnd" | "just_noticeable" => Ok(Self::JustNoticeable),
            other => match other.parse::<Float>() {
                Ok(distance) if distance >= 0.0 => Ok(Self::Distance(distance)),
                _ => Err(ArgumentError::UnknownThreshold(s.to_string())),
            },
        }
    }
}

/// The reference white for conversion to CIELAB.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WhitePoint {
    #[default]
    D65,
    D50,
    Custom(Xyz),
}

impl WhitePoint {
    /// Get the reference white's tristimulus values.
    pub const fn xyz(&self) -> Xyz {
        match self {
            Self::D65 => Xyz::D65,
            Self::D50 => Xyz::D50,
            Self::Custom(xyz) => *xyz,
        }
    }
}

impl FromStr for WhitePoint {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d65" => Ok(Self::D65),
            "d50" => Ok(Self::D50),
            _ => Err(ArgumentError::UnknownWhitePoint(s.to_string())),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct OptionData {
    algorithm: ContrastAlgorithm,
    threshold: Threshold,
    weights: DeltaE94Weights,
    klch: Klch,
    white_point: WhitePoint,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            algorithm: ContrastAlgorithm::DeltaE94,
            threshold: Threshold::Distance(Threshold::DEFAULT),
            weights: DeltaE94Weights::GRAPHIC_ARTS,
            klch: Klch {
                l: 1.0,
                c: 1.0,
                h: 1.0,
            },
            white_point: WhitePoint::D65,
        }
    }
}

/// A builder of match options.
#[derive(Debug)]
pub struct MatchOptionBuilder(OptionData);

impl MatchOptionBuilder {
    /// Set the distance algorithm.
    pub fn algorithm(&mut self, algorithm: ContrastAlgorithm) -> &mut Self {
        self.0.algorithm = algorithm;
        self
    }

    /// Set the threshold.
    pub fn threshold<T: Into<Threshold>>(&mut self, threshold: T) -> &mut Self {
        self.0.threshold = threshold.into();
        self
    }

    /// Set the threshold to the just noticeable difference.
    pub fn just_noticeable(&mut self) -> &mut Self {
        self.0.threshold = Threshold::JustNoticeable;
        self
    }

    /// Set the weights for ΔE*94.
    pub fn weights(&mut self, weights: DeltaE94Weights) -> &mut Self {
        self.0.weights = weights;
        self
    }

    /// Set the parametric factors for ΔE*2000.
    pub fn klch(&mut self, klch: Klch) -> &mut Self {
        self.0.klch = klch;
        self
    }

    /// Set the reference white for conversion to CIELAB.
    pub fn white_point(&mut self, white_point: WhitePoint) -> &mut Self {
        self.0.white_point = white_point;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> MatchOptions {
        MatchOptions(self.0.clone())
    }
}

/// The options for [`Rgb::closest_match`](crate::Rgb::closest_match).
///
/// By default, matching uses ΔE*94 with graphic arts weights, a threshold of
/// 1000, and the D65 reference white.
#[derive(Clone, Debug)]
pub struct MatchOptions(OptionData);

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions(OptionData::new())
    }
}

impl MatchOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> MatchOptionBuilder {
        MatchOptionBuilder(OptionData::new())
    }

    /// Get the distance algorithm.
    pub fn algorithm(&self) -> ContrastAlgorithm {
        self.0.algorithm
    }

    /// Get the threshold's numeric value.
    pub fn threshold(&self) -> Float {
        self.0.threshold.value()
    }

    /// Get the weights for ΔE*94.
    pub fn weights(&self) -> DeltaE94Weights {
        self.0.weights
    }

    /// Get the parametric factors for ΔE*2000.
    pub fn klch(&self) -> Klch {
        self.0.klch
    }

    /// Get the reference white.
    pub fn white_point(&self) -> WhitePoint {
        self.0.white_point
    }
}
