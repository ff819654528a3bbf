use core::str::FromStr;

use tracing::{debug, trace};

use crate::core::{
    euclidean_distance, find_closest, format_hex, from_24bit, interpolate, is_near_coordinates,
    luma, naive_contrast, normalize, parse_hex, rgb_to_cmyk, rgb_to_hsl, rgb_to_xyz, rgb_to_yiq,
    to_24bit,
};
use crate::error::ColorFormatError;
use crate::opt::MatchOptions;
use crate::{
    Cmyk, ColorModel, ContrastAlgorithm, DeltaE94Weights, Float, Grayscale, Hsl, Klch, Xyz, Yiq,
};

/// An RGB color.
///
/// RGB is the hub of the conversion graph: most conversions between other
/// models pass through it. Its three coordinates are fractions in `0..=1`.
/// For conversion to XYZ and CIELAB, they are assumed to be sRGB.
///
/// An RGB color may carry the names it is known by, if it came from the
/// [`named`](crate::named) table. Names do not take part in equality.
///
/// ```
/// # use colormath::{ColorModel, Rgb};
/// # use colormath::error::ColorFormatError;
/// let cabbed = Rgb::from_html("#cabbed")?;
/// assert_eq!(cabbed.to_24bit(), [0xca, 0xbb, 0xed]);
/// assert_eq!(cabbed.red(), 202.0);
/// assert_eq!(cabbed.html(), "#cabbed");
///
/// let fed: Rgb = "fed".parse()?;
/// assert_eq!(fed.to_string(), "RGB [#ffeedd]");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rgb {
    r: Float,
    g: Float,
    b: Float,
    names: &'static [&'static str],
}

/// Turn a percentage adjustment into a factor in `0..=2`.
fn adjustment_factor(percent: Float) -> Float {
    (1.0 + percent / 100.0).clamp(0.0, 2.0)
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb::constant(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Rgb = Rgb::constant(1.0, 1.0, 1.0);
    /// Red.
    pub const RED: Rgb = Rgb::constant(1.0, 0.0, 0.0);
    /// Lime, i.e., the green primary.
    pub const LIME: Rgb = Rgb::constant(0.0, 1.0, 0.0);
    /// Blue.
    pub const BLUE: Rgb = Rgb::constant(0.0, 0.0, 1.0);
    /// Cyan.
    pub const CYAN: Rgb = Rgb::constant(0.0, 1.0, 1.0);
    /// Magenta.
    pub const MAGENTA: Rgb = Rgb::constant(1.0, 0.0, 1.0);
    /// Yellow.
    pub const YELLOW: Rgb = Rgb::constant(1.0, 1.0, 0.0);

    const fn constant(r: Float, g: Float, b: Float) -> Self {
        Self {
            r,
            g,
            b,
            names: &[],
        }
    }

    /// Create a new RGB color from coordinates in `0..=255`.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self::from_fraction(r / 255.0, g / 255.0, b / 255.0)
    }

    /// Create a new RGB color from fractional coordinates in `0..=1`.
    pub fn from_fraction(r: Float, g: Float, b: Float) -> Self {
        Self::constant(normalize(r), normalize(g), normalize(b))
    }

    /// Create a new RGB color from percentages in `0..=100`.
    pub fn from_percentage(r: Float, g: Float, b: Float) -> Self {
        Self::from_fraction(r / 100.0, g / 100.0, b / 100.0)
    }

    /// Create a new gray RGB color from the given fractional lightness.
    pub fn from_grayscale_fraction(lightness: Float) -> Self {
        Self::from_fraction(lightness, lightness, lightness)
    }

    /// Parse an RGB color from its hexadecimal representation.
    ///
    /// The string must have three or six hexadecimal digits, optionally
    /// preceded by `#`. Single digits are doubled, so `fed` is the same as
    /// `ffeedd`.
    pub fn from_html(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s).map(Self::from)
    }

    /// Attach the given names to this color.
    pub(crate) const fn with_names(self, names: &'static [&'static str]) -> Self {
        Self { names, ..self }
    }

    /// Get the names of this color.
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Get the primary name of this color.
    pub fn name(&self) -> Option<&'static str> {
        self.names.first().copied()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red coordinate as a fraction.
    pub const fn r(&self) -> Float {
        self.r
    }

    /// Get the green coordinate as a fraction.
    pub const fn g(&self) -> Float {
        self.g
    }

    /// Get the blue coordinate as a fraction.
    pub const fn b(&self) -> Float {
        self.b
    }

    /// Get the red coordinate in `0..=255`.
    pub fn red(&self) -> Float {
        self.r * 255.0
    }

    /// Get the green coordinate in `0..=255`.
    pub fn green(&self) -> Float {
        self.g * 255.0
    }

    /// Get the blue coordinate in `0..=255`.
    pub fn blue(&self) -> Float {
        self.b * 255.0
    }

    /// Get the red coordinate as a percentage.
    pub fn red_p(&self) -> Float {
        self.r * 100.0
    }

    /// Get the green coordinate as a percentage.
    pub fn green_p(&self) -> Float {
        self.g * 100.0
    }

    /// Get the blue coordinate as a percentage.
    pub fn blue_p(&self) -> Float {
        self.b * 100.0
    }

    /// Get the three coordinates as fractions.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 24-bit representation.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.coordinates())
    }

    /// Format as six lower-case hexadecimal digits, e.g., `ff0000`.
    pub fn hex(&self) -> String {
        format_hex(self.to_24bit())
    }

    /// Format as hashed hexadecimal, e.g., `#ff0000`.
    pub fn html(&self) -> String {
        format!("#{}", self.hex())
    }

    /// Format as CSS `rgb()` with percentages, e.g.,
    /// `rgb(100.00%, 0.00%, 0.00%)`.
    pub fn css_rgb(&self) -> String {
        format!(
            "rgb({:.2}%, {:.2}%, {:.2}%)",
            self.red_p(),
            self.green_p(),
            self.blue_p()
        )
    }

    /// Format as CSS `rgba()` with percentages and the given opacity, e.g.,
    /// `rgba(100.00%, 0.00%, 0.00%, 0.50)`. The opacity is clamped to
    /// `0..=1`.
    pub fn css_rgba(&self, alpha: Float) -> String {
        format!(
            "rgba({:.2}%, {:.2}%, {:.2}%, {:.2})",
            self.red_p(),
            self.green_p(),
            self.blue_p(),
            normalize(alpha)
        )
    }

    /// Format as CSS `hsl()`.
    pub fn css_hsl(&self) -> String {
        self.to_hsl().css_hsl()
    }

    /// Format as CSS `hsla()` with the given opacity.
    pub fn css_hsla(&self, alpha: Float) -> String {
        self.to_hsl().css_hsla(alpha)
    }

    /// Replace the red coordinate with the given fraction.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_r(&self, r: Float) -> Self {
        Self::from_fraction(r, self.g, self.b)
    }

    /// Replace the green coordinate with the given fraction.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_g(&self, g: Float) -> Self {
        Self::from_fraction(self.r, g, self.b)
    }

    /// Replace the blue coordinate with the given fraction.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn with_b(&self, b: Float) -> Self {
        Self::from_fraction(self.r, self.g, b)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the brightness, which is YIQ's luma and not HSL's lightness.
    pub fn brightness(&self) -> Float {
        luma(&self.coordinates())
    }

    /// Convert the maximum coordinate into a grayscale color.
    pub fn max_rgb_as_grayscale(&self) -> Grayscale {
        Grayscale::from_fraction(self.r.max(self.g).max(self.b))
    }

    /// Mix this color with the mask.
    ///
    /// The opacity is a percentage. It determines how much of this color is
    /// in the result, with the remainder coming from the mask.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn mix_with(&self, mask: &Rgb, opacity: Float) -> Self {
        let opacity = opacity / 100.0;
        Self::from_fraction(
            interpolate(opacity, mask.r, self.r),
            interpolate(opacity, mask.g, self.g),
            interpolate(opacity, mask.b, self.b),
        )
    }

    /// Mix this color with white so that this color makes up the given
    /// percentage of the result.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn lighten_by(&self, percent: Float) -> Self {
        self.mix_with(&Self::WHITE, percent)
    }

    /// Mix this color with black so that this color makes up the given
    /// percentage of the result.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn darken_by(&self, percent: Float) -> Self {
        self.mix_with(&Self::BLACK, percent)
    }

    /// Adjust the HSL lightness by the given percentage.
    ///
    /// Positive percentages brighten, negative percentages darken. The
    /// lightness is multiplied by `1 + percent/100`, clamped to `0..=2`.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn adjust_brightness(&self, percent: Float) -> Self {
        let hsl = self.to_hsl();
        hsl.with_l(hsl.l() * adjustment_factor(percent)).to_rgb()
    }

    /// Adjust the HSL saturation by the given percentage.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn adjust_saturation(&self, percent: Float) -> Self {
        let hsl = self.to_hsl();
        hsl.with_s(hsl.s() * adjustment_factor(percent)).to_rgb()
    }

    /// Adjust the HSL hue by the given percentage.
    ///
    /// The resulting hue wraps around the color wheel.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn adjust_hue(&self, percent: Float) -> Self {
        let hsl = self.to_hsl();
        hsl.with_h(hsl.h() * adjustment_factor(percent)).to_rgb()
    }

    /// Add the other color to this color, coordinate by coordinate.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn add<C: ColorModel>(&self, other: &C) -> Self {
        let other = other.to_rgb();
        Self::from_fraction(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Subtract the other color from this color, coordinate by coordinate.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn subtract<C: ColorModel>(&self, other: &C) -> Self {
        self.add(&other.to_rgb().negate())
    }

    /// Negate this color's coordinates.
    ///
    /// The result is not clamped and hence is useful only as an argument to
    /// [`Rgb::add`].
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn negate(&self) -> Self {
        Self::constant(-self.r, -self.g, -self.b)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the contrast between this and the other color.
    ///
    /// The ΔE algorithms use the D65 reference white, graphic arts weights
    /// for ΔE*94, and unit parametric factors for ΔE*2000.
    pub fn contrast<C: ColorModel>(&self, other: &C, algorithm: ContrastAlgorithm) -> Float {
        match algorithm {
            ContrastAlgorithm::Naive => {
                let contrast = naive_contrast(&self.coordinates(), &other.to_rgb().coordinates());
                trace!(contrast, "naive contrast");
                contrast
            }
            ContrastAlgorithm::DeltaE94 => {
                self.delta_e94(other, &DeltaE94Weights::GRAPHIC_ARTS)
            }
            ContrastAlgorithm::DeltaE2000 => self.delta_e2000(other),
        }
    }

    /// Compute ΔE*94 with this color as the reference.
    pub fn delta_e94<C: ColorModel>(&self, other: &C, weights: &DeltaE94Weights) -> Float {
        self.to_lab().delta_e94(&other.to_lab(), weights)
    }

    /// Compute ΔE*2000 between this and the other color.
    pub fn delta_e2000<C: ColorModel>(&self, other: &C) -> Float {
        self.to_lab().delta_e2000(&other.to_lab(), &Klch::default())
    }

    /// Compute the Euclidean distance between this and the other color in
    /// RGB, scaled so that black and white are one apart.
    pub fn euclidean_distance<C: ColorModel>(&self, other: &C) -> Float {
        euclidean_distance(&self.coordinates(), &other.to_rgb().coordinates())
    }

    /// Find the candidate closest to this color.
    ///
    /// This method scans the candidates and returns the index of the one with
    /// the smallest distance to this color, as measured by the options'
    /// algorithm. Only candidates whose distance is strictly below the
    /// options' threshold qualify. If there are no candidates or none
    /// qualifies, this method returns `None`. Ties go to the earlier
    /// candidate.
    ///
    /// ```
    /// # use colormath::Rgb;
    /// # use colormath::opt::MatchOptions;
    /// let firebrick = Rgb::new(178.0, 34.0, 34.0);
    /// let dark_red = Rgb::new(139.0, 0.0, 0.0);
    /// let crimson = Rgb::new(220.0, 20.0, 60.0);
    ///
    /// let options = MatchOptions::default();
    /// assert_eq!(firebrick.closest_match(&[dark_red, crimson], &options), Some(1));
    ///
    /// let options = MatchOptions::builder().threshold(8.0).build();
    /// assert_eq!(firebrick.closest_match(&[dark_red, crimson], &options), None);
    /// ```
    pub fn closest_match<C: ColorModel>(
        &self,
        candidates: &[C],
        options: &MatchOptions,
    ) -> Option<usize> {
        let threshold = options.threshold();
        let white = options.white_point().xyz();

        let result = match options.algorithm() {
            ContrastAlgorithm::Naive => find_closest(
                &self.coordinates(),
                candidates.iter().map(|c| c.to_rgb().coordinates()),
                threshold,
                naive_contrast,
            ),
            ContrastAlgorithm::DeltaE94 => {
                let weights = options.weights();
                find_closest(
                    &self.to_xyz().to_lab_with(&white),
                    candidates.iter().map(|c| c.to_xyz().to_lab_with(&white)),
                    threshold,
                    |origin, candidate| origin.delta_e94(candidate, &weights),
                )
            }
            ContrastAlgorithm::DeltaE2000 => {
                let klch = options.klch();
                find_closest(
                    &self.to_xyz().to_lab_with(&white),
                    candidates.iter().map(|c| c.to_xyz().to_lab_with(&white)),
                    threshold,
                    |origin, candidate| origin.delta_e2000(candidate, &klch),
                )
            }
        };

        debug!(
            color = %self,
            algorithm = %options.algorithm(),
            threshold,
            candidates = candidates.len(),
            index = ?result.map(|(index, _)| index),
            distance = ?result.map(|(_, distance)| distance),
            "closest match"
        );

        result.map(|(index, _)| index)
    }

    /// Find the candidate closest to this color and return it.
    ///
    /// This method behaves like [`Rgb::closest_match`] but returns a reference
    /// to the candidate instead of its index.
    pub fn closest_match_color<'a, C: ColorModel>(
        &self,
        candidates: &'a [C],
        options: &MatchOptions,
    ) -> Option<&'a C> {
        self.closest_match(candidates, options)
            .and_then(|index| candidates.get(index))
    }
}

impl ColorModel for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        let [h, s, l] = rgb_to_hsl(&self.coordinates());
        Hsl::from_fraction(h, s, l)
    }

    fn to_cmyk(&self) -> Cmyk {
        let [c, m, y, k] = rgb_to_cmyk(&self.coordinates());
        Cmyk::from_fraction(c, m, y, k)
    }

    /// Convert to grayscale using HSL's lightness.
    fn to_grayscale(&self) -> Grayscale {
        let [_, _, l] = rgb_to_hsl(&self.coordinates());
        Grayscale::from_fraction(l)
    }

    fn to_yiq(&self) -> Yiq {
        let [y, i, q] = rgb_to_yiq(&self.coordinates());
        Yiq::from_fraction(y, i, q)
    }

    fn to_xyz(&self) -> Xyz {
        let [x, y, z] = rgb_to_xyz(&self.coordinates());
        Xyz::from_fraction(x, y, z)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = from_24bit(value[0], value[1], value[2]);
        Self::constant(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_html(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_html(value)
    }
}

impl PartialEq for Rgb {
    /// Determine whether this color equals the other color, coordinate by
    /// coordinate, within the colour tolerance. Names are ignored.
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("RGB [{}]", self.html()))
    }
}
