use crate::core::{is_near_coordinates, near_zero_or_less, normalize, xyz_to_lab, xyz_to_rgb};
use crate::{Cielab, ColorModel, Float, Grayscale, Rgb};

/// A CIE XYZ color.
///
/// The coordinates are fractions scaled so that Y of the reference white is
/// one. Y is clamped to `0..=1`. X and Z may exceed one, as they do for the
/// reference whites themselves, and are clamped to be non-negative only.
/// Percentage forms, with Y of white being 100, are available through
/// [`Xyz::from_values`] and the `*_value` accessors.
///
/// Conversions default to the D65 reference white, which is also the white
/// of sRGB.
#[derive(Clone, Copy, Debug)]
pub struct Xyz {
    x: Float,
    y: Float,
    z: Float,
}

/// Clamp a coordinate to be non-negative, snapping values near zero to zero.
fn non_negative(value: Float) -> Float {
    if value.is_nan() || near_zero_or_less(value) {
        0.0
    } else {
        value
    }
}

impl Xyz {
    /// The D65 reference white, i.e., noon daylight.
    pub const D65: Xyz = Xyz {
        x: 0.95047,
        y: 1.0,
        z: 1.08883,
    };

    /// The D50 reference white, i.e., horizon light, common in printing.
    pub const D50: Xyz = Xyz {
        x: 0.96421,
        y: 1.0,
        z: 0.82521,
    };

    /// Create a new XYZ color from fractions.
    pub fn from_fraction(x: Float, y: Float, z: Float) -> Self {
        Self {
            x: non_negative(x),
            y: normalize(y),
            z: non_negative(z),
        }
    }

    /// Create a new XYZ color from values scaled so that Y of white is 100.
    pub fn from_values(x: Float, y: Float, z: Float) -> Self {
        Self::from_fraction(x / 100.0, y / 100.0, z / 100.0)
    }

    /// Get X as a fraction of Y of white.
    pub const fn x(&self) -> Float {
        self.x
    }

    /// Get the luminance Y, with white at one.
    pub const fn y(&self) -> Float {
        self.y
    }

    /// Get Z as a fraction of Y of white.
    pub const fn z(&self) -> Float {
        self.z
    }

    /// Get X scaled so that Y of white is 100.
    pub fn x_value(&self) -> Float {
        self.x * 100.0
    }

    /// Get Y scaled so that Y of white is 100.
    pub fn y_value(&self) -> Float {
        self.y * 100.0
    }

    /// Get Z scaled so that Y of white is 100.
    pub fn z_value(&self) -> Float {
        self.z * 100.0
    }

    /// Get the three coordinates as fractions.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Scale the three coordinates by the given factors.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn scale(&self, sx: Float, sy: Float, sz: Float) -> Self {
        Self::from_fraction(self.x * sx, self.y * sy, self.z * sz)
    }

    /// Convert to CIELAB relative to the given reference white.
    pub fn to_lab_with(&self, white: &Xyz) -> Cielab {
        let [l, a, b] = xyz_to_lab(&self.coordinates(), &white.coordinates());
        Cielab::new(l, a, b)
    }
}

impl ColorModel for Xyz {
    /// Convert to sRGB, assuming the D65 reference white.
    fn to_rgb(&self) -> Rgb {
        let [r, g, b] = xyz_to_rgb(&self.coordinates());
        Rgb::from_fraction(r, g, b)
    }

    /// Convert to grayscale using the luminance Y.
    fn to_grayscale(&self) -> Grayscale {
        Grayscale::from_fraction(self.y)
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }

    fn to_lab(&self) -> Cielab {
        self.to_lab_with(&Self::D65)
    }
}

impl PartialEq for Xyz {
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Xyz {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("XYZ [{} {} {}]", self.x, self.y, self.z))
    }
}
