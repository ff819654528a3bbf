//! # Colormath
//!
//! Colormath represents colors in seven color models and converts between
//! them. It also computes perceptual color differences, mixes and adjusts
//! colors, and finds the closest match for a color amongst candidates.
//!
//!
//! ## 1. Overview
//!
//! Colormath's main abstractions are:
//!
//!   * The **value types** [`Rgb`], [`Hsl`], [`Cmyk`], [`Grayscale`],
//!     [`Yiq`], [`Xyz`], and [`Cielab`]. They are small, immutable, and
//!     `Copy`. Their constructors never fail for numbers: out-of-range
//!     coordinates are clamped to the model's valid range. Only parsing
//!     hexadecimal strings can fail, with a
//!     [`ColorFormatError`](error::ColorFormatError).
//!   * The [`ColorModel`] trait implements **conversion between models**.
//!     Every value type implements all seven conversions. Most of them route
//!     through RGB, with XYZ standing in between RGB and CIELAB. The
//!     [`ColorValue`] tagged union holds a color in any model.
//!   * The **perceptual metrics** ΔE*94 and ΔE*2000 on [`Cielab`] as well as
//!     [`Rgb::contrast`], which selects between those two and a naive
//!     weighted contrast heuristic with [`ContrastAlgorithm`].
//!   * [`Rgb::closest_match`], configured by [`MatchOptions`](opt::MatchOptions),
//!     which scans candidates for the perceptually closest one.
//!   * The [`named`] module with the CSS named colors.
//!
//! Equality between colors of the same model is approximate: two values are
//! equal if all their coordinates differ by at most [`TOLERANCE`]. Hence the
//! value types implement [`PartialEq`] but neither [`Eq`] nor [`Hash`].
//!
//!
//! ## 2. Example
//!
//! ```
//! # use colormath::{Cielab, ColorModel, Rgb};
//! # use colormath::opt::MatchOptions;
//! # use colormath::error::ColorFormatError;
//! let indigo = Rgb::from_html("#4b0082")?;
//! let hsl = indigo.to_hsl();
//! assert_eq!(hsl.hue().round(), 275.0);
//!
//! let candidates = [Rgb::RED, Rgb::from_html("008000")?, Rgb::BLUE];
//! let options = MatchOptions::default();
//! assert_eq!(indigo.closest_match(&candidates, &options), Some(2));
//!
//! let strict = MatchOptions::builder().just_noticeable().build();
//! assert_eq!(indigo.closest_match(&candidates, &strict), None);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Logging
//!
//! Colormath emits [`tracing`](https://docs.rs/tracing) events but never
//! installs a subscriber. Matching emits a `debug!` event per invocation and
//! every metric evaluation emits a `trace!` event with the distance.
//!
//!
//! ## 4. Feature Flags
//!
//! The `f64` feature, which is enabled by default, makes [`Float`] an alias
//! for `f64`. Without it, [`Float`] is `f32`.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod cielab;
mod cmyk;
mod core;
pub mod error;
mod grayscale;
mod hsl;
mod metric;
mod model;
pub mod named;
pub mod opt;
mod rgb;
mod xyz;
mod yiq;

pub use crate::core::{
    near, near_one, near_one_or_more, near_zero, near_zero_or_less, normalize, normalize_range,
    translate_range, EPSILON, TOLERANCE,
};

pub use cielab::Cielab;
pub use cmyk::{Cmyk, CmykMethod};
pub use grayscale::Grayscale;
pub use hsl::Hsl;
pub use metric::{ContrastAlgorithm, DeltaE94Weights, Klch};
pub use model::{equivalent, ColorKind, ColorModel, ColorValue};
pub use rgb::Rgb;
pub use xyz::Xyz;
pub use yiq::Yiq;
