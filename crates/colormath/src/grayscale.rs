use crate::core::{near, normalize, rgb_to_yiq, to_byte};
use crate::{Cmyk, ColorModel, Float, Hsl, Rgb, Yiq};

/// A grayscale color.
///
/// Its single coordinate is a fraction, with zero being black and one being
/// white.
///
/// ```
/// # use colormath::{ColorModel, Grayscale};
/// let gray = Grayscale::new(33.0);
/// assert_eq!(gray.html(), "#545454");
/// assert_eq!(gray.to_rgb().r(), 0.33);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Grayscale {
    g: Float,
}

impl Grayscale {
    /// Create a new grayscale color from a percentage.
    pub fn new(gray: Float) -> Self {
        Self::from_fraction(gray / 100.0)
    }

    /// Create a new grayscale color from a fraction.
    pub fn from_fraction(g: Float) -> Self {
        Self { g: normalize(g) }
    }

    /// Get the gray level as a fraction.
    pub const fn g(&self) -> Float {
        self.g
    }

    /// Get the gray level as a percentage.
    pub fn gray(&self) -> Float {
        self.g * 100.0
    }

    /// Get the gray level in `0..=255`.
    pub fn to_255(&self) -> u8 {
        to_byte(self.g)
    }

    /// Get the brightness, which is the gray level.
    pub const fn brightness(&self) -> Float {
        self.g
    }

    /// Format as hashed hexadecimal, e.g., `#545454`.
    pub fn html(&self) -> String {
        let level = self.to_255();
        format!("#{:02x}{:02x}{:02x}", level, level, level)
    }

    /// Format as CSS `rgb()` with percentages.
    pub fn css_rgb(&self) -> String {
        let gray = self.gray();
        format!("rgb({:.2}%, {:.2}%, {:.2}%)", gray, gray, gray)
    }

    /// Format as CSS `rgba()` with percentages and the given opacity, which
    /// is clamped to `0..=1`.
    pub fn css_rgba(&self, alpha: Float) -> String {
        let gray = self.gray();
        format!(
            "rgba({:.2}%, {:.2}%, {:.2}%, {:.2})",
            gray,
            gray,
            gray,
            normalize(alpha)
        )
    }

    /// Format as CSS `hsl()`.
    pub fn css_hsl(&self) -> String {
        self.to_hsl().css_hsl()
    }

    /// Format as CSS `hsla()`.
    pub fn css_hsla(&self, alpha: Float) -> String {
        self.to_hsl().css_hsla(alpha)
    }

    /// Format as a PDF DeviceGray fill color operator, e.g., `0.330 g`.
    pub fn pdf_fill(&self) -> String {
        format!("{:.3} g", self.g)
    }

    /// Format as a PDF DeviceGray stroke color operator, e.g., `0.330 G`.
    pub fn pdf_stroke(&self) -> String {
        format!("{:.3} G", self.g)
    }

    /// Lighten by the given percentage of the current level.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn lighten_by(&self, percent: Float) -> Self {
        Self::from_fraction(self.g.mul_add(percent / 100.0, self.g).min(1.0))
    }

    /// Darken by the given percentage of the current level.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn darken_by(&self, percent: Float) -> Self {
        Self::from_fraction(self.g.mul_add(-percent / 100.0, self.g).max(0.0))
    }

    /// Add the other color's gray level.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn add<C: ColorModel>(&self, other: &C) -> Self {
        Self::from_fraction(self.g + other.to_grayscale().g)
    }

    /// Subtract the other color's gray level.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn subtract<C: ColorModel>(&self, other: &C) -> Self {
        self.add(&other.to_grayscale().negate())
    }

    /// Negate the gray level.
    ///
    /// The result is not clamped and hence is useful only as an argument to
    /// [`Grayscale::add`].
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn negate(&self) -> Self {
        Self { g: -self.g }
    }
}

impl ColorModel for Grayscale {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_grayscale_fraction(self.g)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from_fraction(0.0, 0.0, self.g)
    }

    fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_fraction(0.0, 0.0, 0.0, 1.0 - self.g)
    }

    fn to_grayscale(&self) -> Grayscale {
        *self
    }

    /// Convert to YIQ by treating the gray level as an RGB color.
    ///
    /// Y is the gray level. I and Q come out of the NTSC matrix as zero, so
    /// this conversion is an approximation.
    fn to_yiq(&self) -> Yiq {
        let [_, i, q] = rgb_to_yiq(&[self.g, self.g, self.g]);
        Yiq::from_fraction(self.g, i, q)
    }
}

impl PartialEq for Grayscale {
    fn eq(&self, other: &Self) -> bool {
        near(self.g, other.g)
    }
}

impl core::fmt::Display for Grayscale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Gray [{:.2}%]", self.gray()))
    }
}

#[cfg(test)]
mod test {
    use super::Grayscale;
    use crate::{assert_close_enough, assert_same_color};
    use crate::{ColorModel, Rgb};

    #[test]
    fn test_formatting() {
        let gray = Grayscale::new(33.0);
        assert_eq!(gray.to_255(), 84);
        assert_eq!(gray.html(), "#545454");
        assert_eq!(gray.css_rgb(), "rgb(33.00%, 33.00%, 33.00%)");
        assert_eq!(gray.to_string(), "Gray [33.00%]");
        assert_eq!(gray.css_rgba(0.5), "rgba(33.00%, 33.00%, 33.00%, 0.50)");
        assert_eq!(gray.css_hsl(), "hsl(0.00, 0.00%, 33.00%)");
        assert_eq!(gray.css_hsla(1.0), "hsla(0.00, 0.00%, 33.00%, 1.00)");
        assert_eq!(gray.pdf_fill(), "0.330 g");
        assert_eq!(gray.pdf_stroke(), "0.330 G");
        assert_eq!(Grayscale::new(100.0).html(), "#ffffff");
    }

    #[test]
    fn test_conversions() {
        let gray = Grayscale::new(33.0);
        assert_same_color!(gray.to_rgb(), Rgb::from_fraction(0.33, 0.33, 0.33));

        let hsl = gray.to_hsl();
        assert_eq!(hsl.coordinates(), [0.0, 0.0, 0.33]);

        let [c, m, y, k] = gray.to_cmyk().coordinates();
        assert_eq!([c, m, y], [0.0; 3]);
        assert_close_enough!(k, 0.67);

        let [y, i, q] = gray.to_yiq().coordinates();
        assert_close_enough!(y, 0.33);
        assert_close_enough!(i, 0.0);
        assert_close_enough!(q, 0.0);

        assert_close_enough!(gray.to_lab().to_grayscale().g(), 0.33);
    }

    #[test]
    fn test_lighten_darken() {
        let gray = Grayscale::new(33.0);
        assert_close_enough!(gray.lighten_by(10.0).g(), 0.363);
        assert_close_enough!(gray.darken_by(10.0).g(), 0.297);
        assert_close_enough!(gray.lighten_by(500.0).g(), 1.0);
        assert_close_enough!(gray.darken_by(500.0).g(), 0.0);
        assert_close_enough!(gray.brightness(), 0.33);
    }

    #[test]
    fn test_arithmetic() {
        let gray = Grayscale::new(33.0);
        assert_close_enough!(gray.add(&Grayscale::new(20.0)).g(), 0.53);
        assert_close_enough!(gray.subtract(&Grayscale::new(20.0)).g(), 0.13);
        assert_close_enough!(gray.subtract(&Grayscale::new(80.0)).g(), 0.0);
        assert_close_enough!(gray.add(&Rgb::WHITE).g(), 1.0);
        assert_eq!(gray.negate().g(), -0.33);
    }
}
