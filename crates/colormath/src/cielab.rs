use tracing::trace;

use crate::core::{
    delta_e2000, delta_e94, is_near_coordinates, lab_to_xyz, normalize_range, translate_range,
};
use crate::{ColorModel, DeltaE94Weights, Float, Klch, Rgb, Xyz};

/// A CIELAB color.
///
/// CIELAB, also known as L\*a\*b\*, is a device-independent model defined
/// relative to a reference white. L\* is the perceptual lightness in
/// `0..=100`. a\* ranges from green (negative) to red (positive) and b\* from
/// blue (negative) to yellow (positive). Both are technically unbounded but
/// clamped to `-128..=127`.
///
/// ```
/// # use colormath::{Cielab, ColorModel, Rgb};
/// let red = Rgb::RED.to_lab();
/// assert_eq!(red.css(), "lab(53.24% 80.09 67.2)");
///
/// let blue = Rgb::BLUE.to_lab();
/// assert!(red.delta_e2000(&blue, &Default::default()) > 50.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Cielab {
    l: Float,
    a: Float,
    b: Float,
}

/// Format a number for CSS with at most two decimals and no trailing zeros.
fn css_number(value: Float) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl Cielab {
    /// Create a new CIELAB color.
    pub fn new(l: Float, a: Float, b: Float) -> Self {
        Self {
            l: normalize_range(l, 0.0..=100.0),
            a: normalize_range(a, -128.0..=127.0),
            b: normalize_range(b, -128.0..=127.0),
        }
    }

    /// Create a new CIELAB color. This is an alias for [`Cielab::new`].
    pub fn from_values(l: Float, a: Float, b: Float) -> Self {
        Self::new(l, a, b)
    }

    /// Create a new CIELAB color from percentages.
    ///
    /// The lightness is a percentage already. a\* and b\* range over
    /// `-100..=100` and are mapped onto `-128..=127`.
    ///
    /// ```
    /// # use colormath::Cielab;
    /// let lab = Cielab::from_percentage(10.0, -30.0, 30.0);
    /// assert_eq!(lab.to_string(), "CIELAB [10.0000 -38.7500 37.7500]");
    /// ```
    pub fn from_percentage(l: Float, a: Float, b: Float) -> Self {
        Self::new(
            l,
            translate_range(a, -100.0..=100.0, -128.0..=127.0),
            translate_range(b, -100.0..=100.0, -128.0..=127.0),
        )
    }

    /// Get the lightness L*, from 0 to 100.
    pub const fn l(&self) -> Float {
        self.l
    }

    /// Get the green-red axis a*.
    pub const fn a(&self) -> Float {
        self.a
    }

    /// Get the blue-yellow axis b*.
    pub const fn b(&self) -> Float {
        self.b
    }

    /// Get the three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert to XYZ relative to the given reference white.
    pub fn to_xyz_with(&self, white: &Xyz) -> Xyz {
        let [x, y, z] = lab_to_xyz(&self.coordinates(), &white.coordinates());
        Xyz::from_fraction(x, y, z)
    }

    /// Compute ΔE*94 with this color as the reference.
    ///
    /// Since the chroma of the reference color scales the chroma and hue
    /// terms, this metric is not symmetric.
    pub fn delta_e94(&self, other: &Cielab, weights: &DeltaE94Weights) -> Float {
        let distance = delta_e94(
            &self.coordinates(),
            &other.coordinates(),
            weights.k1,
            weights.k2,
            weights.kl,
        );
        trace!(reference = %self, sample = %other, distance, "ΔE*94");
        distance
    }

    /// Compute ΔE*2000 between this and the other color.
    ///
    /// Unless you really know what you are doing, use the default parametric
    /// factors.
    pub fn delta_e2000(&self, other: &Cielab, klch: &Klch) -> Float {
        let distance = delta_e2000(
            &self.coordinates(),
            &other.coordinates(),
            klch.l,
            klch.c,
            klch.h,
        );
        trace!(color1 = %self, color2 = %other, distance, "ΔE*2000");
        distance
    }

    /// Format as CSS `lab()`, e.g., `lab(53.24% 80.09 67.2)`.
    pub fn css(&self) -> String {
        format!(
            "lab({}% {} {})",
            css_number(self.l),
            css_number(self.a),
            css_number(self.b)
        )
    }
}

impl ColorModel for Cielab {
    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_xyz_with(&Xyz::D65)
    }

    fn to_lab(&self) -> Cielab {
        *self
    }
}

impl PartialEq for Cielab {
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Cielab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "CIELAB [{:.4} {:.4} {:.4}]",
            self.l, self.a, self.b
        ))
    }
}
