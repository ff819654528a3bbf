use crate::core::{hsl_to_rgb, interpolate, is_near_coordinates, normalize, wrap_unit};
use crate::{ColorModel, Float, Grayscale, Rgb};

/// An HSL color.
///
/// All three coordinates are fractions. The hue is a fraction of a full
/// turn, so 0.5 is 180°. Since the hue is circular, it wraps around instead
/// of being clamped, whereas saturation and lightness are clamped to `0..=1`.
///
/// ```
/// # use colormath::{ColorModel, Hsl};
/// let hsl = Hsl::new(145.0, 20.0, 30.0);
/// assert_eq!(hsl.to_rgb().html(), "#3d5c4a");
/// assert_eq!(Hsl::new(-90.0, 50.0, 50.0).hue(), 270.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Hsl {
    h: Float,
    s: Float,
    l: Float,
}

impl Hsl {
    /// Create a new HSL color from the hue in degrees and the saturation and
    /// lightness as percentages.
    pub fn new(hue: Float, saturation: Float, luminosity: Float) -> Self {
        Self::from_fraction(hue / 360.0, saturation / 100.0, luminosity / 100.0)
    }

    /// Create a new HSL color from fractional coordinates.
    pub fn from_fraction(h: Float, s: Float, l: Float) -> Self {
        Self {
            h: wrap_unit(h),
            s: normalize(s),
            l: normalize(l),
        }
    }

    /// Get the hue as a fraction of a full turn.
    pub const fn h(&self) -> Float {
        self.h
    }

    /// Get the saturation as a fraction.
    pub const fn s(&self) -> Float {
        self.s
    }

    /// Get the lightness as a fraction.
    pub const fn l(&self) -> Float {
        self.l
    }

    /// Get the hue in degrees.
    pub fn hue(&self) -> Float {
        self.h * 360.0
    }

    /// Get the saturation as a percentage.
    pub fn saturation(&self) -> Float {
        self.s * 100.0
    }

    /// Get the lightness as a percentage.
    pub fn luminosity(&self) -> Float {
        self.l * 100.0
    }

    /// Get the three coordinates as fractions.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.h, self.s, self.l]
    }

    /// Get the brightness, which is the lightness.
    pub const fn brightness(&self) -> Float {
        self.l
    }

    /// Replace the hue with the given degrees, wrapping around.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_hue(&self, hue: Float) -> Self {
        self.with_h(hue / 360.0)
    }

    /// Replace the hue with the given fraction, wrapping around.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_h(&self, h: Float) -> Self {
        Self::from_fraction(h, self.s, self.l)
    }

    /// Replace the saturation with the given percentage.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_saturation(&self, saturation: Float) -> Self {
        self.with_s(saturation / 100.0)
    }

    /// Replace the saturation with the given fraction.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_s(&self, s: Float) -> Self {
        Self::from_fraction(self.h, s, self.l)
    }

    /// Replace the lightness with the given percentage.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_luminosity(&self, luminosity: Float) -> Self {
        self.with_l(luminosity / 100.0)
    }

    /// Replace the lightness with the given fraction.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_l(&self, l: Float) -> Self {
        Self::from_fraction(self.h, self.s, l)
    }

    /// Mix this color with the other color.
    ///
    /// Unlike [`Rgb::mix_with`], the fraction is in `0..=1` and selects how
    /// far to move from this color towards the other color. Each coordinate
    /// is interpolated linearly, including the hue, which does not take the
    /// shorter way around the color wheel.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn mix_with<C: ColorModel>(&self, other: &C, fraction: Float) -> Self {
        let other = other.to_hsl();
        Self::from_fraction(
            interpolate(fraction, self.h, other.h),
            interpolate(fraction, self.s, other.s),
            interpolate(fraction, self.l, other.l),
        )
    }

    /// Format as CSS `hsl()`, e.g., `hsl(240.00, 100.00%, 50.00%)`.
    pub fn css_hsl(&self) -> String {
        format!(
            "hsl({:.2}, {:.2}%, {:.2}%)",
            self.hue(),
            self.saturation(),
            self.luminosity()
        )
    }

    /// Format as CSS `hsla()` with the given opacity, which is clamped to
    /// `0..=1`.
    pub fn css_hsla(&self, alpha: Float) -> String {
        format!(
            "hsla({:.2}, {:.2}%, {:.2}%, {:.2})",
            self.hue(),
            self.saturation(),
            self.luminosity(),
            normalize(alpha)
        )
    }

    /// Format as CSS `rgb()`.
    pub fn css_rgb(&self) -> String {
        self.to_rgb().css_rgb()
    }

    /// Format as CSS `rgba()`.
    pub fn css_rgba(&self, alpha: Float) -> String {
        self.to_rgb().css_rgba(alpha)
    }

    /// Format as hashed hexadecimal via RGB.
    pub fn html(&self) -> String {
        self.to_rgb().html()
    }
}

impl ColorModel for Hsl {
    fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsl_to_rgb(&self.coordinates());
        Rgb::from_fraction(r, g, b)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    fn to_grayscale(&self) -> Grayscale {
        Grayscale::from_fraction(self.l)
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Hsl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "HSL [{:.2} deg, {:.2}%, {:.2}%]",
            self.hue(),
            self.saturation(),
            self.luminosity()
        ))
    }
}

#[cfg(test)]
mod test {
    use super::Hsl;
    use crate::{assert_close_enough, assert_same_color};
    use crate::{ColorModel, Rgb};

    #[test]
    fn test_construction() {
        let hsl = Hsl::new(145.0, 20.0, 30.0);
        assert_close_enough!(hsl.h(), 145.0 / 360.0);
        assert_close_enough!(hsl.saturation(), 20.0);
        assert_close_enough!(hsl.luminosity(), 30.0);

        assert_close_enough!(Hsl::new(400.0, 0.0, 0.0).hue(), 40.0);
        assert_close_enough!(Hsl::new(360.0, 0.0, 0.0).hue(), 0.0);
        assert_close_enough!(Hsl::new(0.0, 150.0, -5.0).s(), 1.0);
        assert_close_enough!(Hsl::new(0.0, 150.0, -5.0).l(), 0.0);
        assert_eq!(hsl.to_string(), "HSL [145.00 deg, 20.00%, 30.00%]");
    }

    #[test]
    fn test_setters() {
        let hsl = Hsl::new(145.0, 20.0, 30.0);
        assert_close_enough!(hsl.with_hue(-15.0).hue(), 345.0);
        assert_close_enough!(hsl.with_h(1.25).h(), 0.25);
        assert_close_enough!(hsl.with_saturation(120.0).s(), 1.0);
        assert_close_enough!(hsl.with_luminosity(-3.0).l(), 0.0);
        assert_close_enough!(hsl.with_l(0.75).brightness(), 0.75);
    }

    #[test]
    fn test_to_rgb() {
        let rgb = Hsl::new(145.0, 20.0, 30.0).to_rgb();
        assert_close_enough!(rgb.r(), 0.24);
        assert_close_enough!(rgb.g(), 0.36);
        assert_close_enough!(rgb.b(), 0.29);

        let [x, y, z] = Hsl::new(145.0, 20.0, 30.0).to_xyz().coordinates();
        assert_close_enough!(x, 0.069_806);
        assert_close_enough!(y, 0.091_115);
        assert_close_enough!(z, 0.078_593);

        let [l, a, b] = Hsl::new(145.0, 20.0, 30.0).to_lab().coordinates();
        assert_close_enough!(l, 36.198_18);
        assert_close_enough!(a, -15.602_94);
        assert_close_enough!(b, 6.723_77);

        let [c, m, y, k] = Hsl::new(145.0, 20.0, 30.0).to_cmyk().coordinates();
        assert_close_enough!(c, 0.322_33);
        assert_close_enough!(m, 0.202_33);
        assert_close_enough!(y, 0.272_33);
        assert_close_enough!(k, 0.437_67);

        assert_close_enough!(Hsl::new(145.0, 20.0, 30.0).to_yiq().y(), 0.316_14);
        assert_close_enough!(Hsl::new(145.0, 20.0, 30.0).to_grayscale().g(), 0.3);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Hsl::new(120.0, 100.0, 0.0).to_rgb().coordinates(), [0.0; 3]);
        assert_eq!(Hsl::new(120.0, 100.0, 100.0).to_rgb().coordinates(), [1.0; 3]);
        assert_eq!(
            Hsl::new(120.0, 0.0, 40.0).to_rgb().coordinates(),
            [0.4, 0.4, 0.4]
        );
    }

    #[test]
    fn test_mix() {
        let red = Rgb::RED.to_hsl();
        let mixed = red.mix_with(&Rgb::YELLOW, 0.25);
        assert_close_enough!(mixed.hue(), 15.0);
        assert_same_color!(red.mix_with(&Rgb::YELLOW, 0.0), red);
        assert_same_color!(red.mix_with(&Rgb::YELLOW, 1.0), Rgb::YELLOW.to_hsl());
    }

    #[test]
    fn test_formatting() {
        let hsl = Hsl::new(145.0, 20.0, 30.0);
        assert_eq!(hsl.css_hsl(), "hsl(145.00, 20.00%, 30.00%)");
        assert_eq!(hsl.html(), "#3d5c4a");
        assert_eq!(hsl.css_rgb(), "rgb(24.00%, 36.00%, 29.00%)");
        assert_eq!(hsl.css_hsla(0.4), "hsla(145.00, 20.00%, 30.00%, 0.40)");
        assert_eq!(hsl.css_hsla(-1.0), "hsla(145.00, 20.00%, 30.00%, 0.00)");
        assert_eq!(hsl.css_rgba(1.0), "rgba(24.00%, 36.00%, 29.00%, 1.00)");
    }
}
