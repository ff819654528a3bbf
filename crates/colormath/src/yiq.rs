use crate::core::{is_near_coordinates, normalize, yiq_to_rgb};
use crate::{ColorModel, Float, Grayscale, Rgb};

/// A YIQ color.
///
/// YIQ is the NTSC encoding with luma Y and chroma components I and Q.
/// While I and Q are signed in the underlying model, this type clamps all
/// three components to `0..=1`. Hence a conversion from RGB to YIQ and back
/// is exact only for colors with non-negative I and Q.
#[derive(Clone, Copy, Debug, Default)]
pub struct Yiq {
    y: Float,
    i: Float,
    q: Float,
}

impl Yiq {
    /// Create a new YIQ color from percentages.
    pub fn new(y: Float, i: Float, q: Float) -> Self {
        Self::from_fraction(y / 100.0, i / 100.0, q / 100.0)
    }

    /// Create a new YIQ color from fractions.
    pub fn from_fraction(y: Float, i: Float, q: Float) -> Self {
        Self {
            y: normalize(y),
            i: normalize(i),
            q: normalize(q),
        }
    }

    /// Get the luma Y.
    pub const fn y(&self) -> Float {
        self.y
    }

    /// Get the in-phase chrominance I.
    pub const fn i(&self) -> Float {
        self.i
    }

    /// Get the quadrature chrominance Q.
    pub const fn q(&self) -> Float {
        self.q
    }

    /// Get the three coordinates as fractions.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.y, self.i, self.q]
    }

    /// Get the brightness, which is the luma Y.
    pub const fn brightness(&self) -> Float {
        self.y
    }
}

impl ColorModel for Yiq {
    /// Convert to RGB with the inverse NTSC matrix.
    fn to_rgb(&self) -> Rgb {
        let [r, g, b] = yiq_to_rgb(&self.coordinates());
        Rgb::from_fraction(r, g, b)
    }

    fn to_yiq(&self) -> Yiq {
        *self
    }

    fn to_grayscale(&self) -> Grayscale {
        Grayscale::from_fraction(self.y)
    }
}

impl PartialEq for Yiq {
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Yiq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "YIQ [{:.2}%, {:.2}%, {:.2}%]",
            self.y * 100.0,
            self.i * 100.0,
            self.q * 100.0
        ))
    }
}

#[cfg(test)]
mod test {
    use super::Yiq;
    use crate::{assert_close_enough, assert_same_color};
    use crate::{ColorModel, Rgb};

    #[test]
    fn test_from_rgb() {
        let yiq = Rgb::RED.to_yiq();
        assert_close_enough!(yiq.y(), 0.299);
        assert_close_enough!(yiq.i(), 0.596);
        assert_close_enough!(yiq.q(), 0.212);
        assert_eq!(yiq.to_string(), "YIQ [29.90%, 59.60%, 21.20%]");
        assert_close_enough!(yiq.brightness(), Rgb::RED.brightness());
    }

    #[test]
    fn test_to_rgb() {
        // Red has non-negative chroma, so it survives the round trip.
        assert_same_color!(Rgb::RED.to_yiq().to_rgb(), Rgb::RED);
        assert_same_color!(Yiq::new(50.0, 0.0, 0.0).to_rgb(), Rgb::from_grayscale_fraction(0.5));

        // Blue's I is negative and clamped away.
        assert!(
            Rgb::BLUE.to_yiq().to_rgb() != Rgb::BLUE,
            "blue does not survive the round trip through YIQ"
        );
    }

    #[test]
    fn test_to_grayscale() {
        assert_close_enough!(Yiq::new(40.0, 10.0, 20.0).to_grayscale().g(), 0.4);
        assert_same_color!(Yiq::new(120.0, -5.0, 50.0), Yiq::from_fraction(1.0, 0.0, 0.5));
    }
}
