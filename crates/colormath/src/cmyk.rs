use crate::core::{
    cmyk_to_gray, cmyk_to_rgb_adobe, cmyk_to_rgb_standard, is_near_coordinates, normalize,
};
use crate::{ColorModel, Float, Grayscale, Rgb};

/// The formula for converting CMYK to RGB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CmykMethod {
    /// `1 - (c·(1 - k) + k)`, which is the default.
    #[default]
    Standard,
    /// `1 - min(1, c + k)`, as used by Adobe and PDF.
    Adobe,
}

/// A CMYK color.
///
/// All four coordinates are fractions in `0..=1`. Conversion to RGB uses
/// [`CmykMethod::Standard`] unless [`Cmyk::to_rgb_with`] selects another
/// formula.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cmyk {
    c: Float,
    m: Float,
    y: Float,
    k: Float,
}

impl Cmyk {
    /// Create a new CMYK color from percentages.
    pub fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self::from_fraction(c / 100.0, m / 100.0, y / 100.0, k / 100.0)
    }

    /// Create a new CMYK color from fractions.
    pub fn from_fraction(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self {
            c: normalize(c),
            m: normalize(m),
            y: normalize(y),
            k: normalize(k),
        }
    }

    /// Get the cyan ink as a fraction.
    pub const fn c(&self) -> Float {
        self.c
    }

    /// Get the magenta ink as a fraction.
    pub const fn m(&self) -> Float {
        self.m
    }

    /// Get the yellow ink as a fraction.
    pub const fn y(&self) -> Float {
        self.y
    }

    /// Get the black ink as a fraction.
    pub const fn k(&self) -> Float {
        self.k
    }

    /// Get the cyan ink as a percentage.
    pub fn cyan(&self) -> Float {
        self.c * 100.0
    }

    /// Get the magenta ink as a percentage.
    pub fn magenta(&self) -> Float {
        self.m * 100.0
    }

    /// Get the yellow ink as a percentage.
    pub fn yellow(&self) -> Float {
        self.y * 100.0
    }

    /// Get the black ink as a percentage.
    pub fn black(&self) -> Float {
        self.k * 100.0
    }

    /// Get the four coordinates as fractions.
    pub const fn coordinates(&self) -> [Float; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Convert to RGB with the given formula.
    pub fn to_rgb_with(&self, method: CmykMethod) -> Rgb {
        let [r, g, b] = match method {
            CmykMethod::Standard => cmyk_to_rgb_standard(&self.coordinates()),
            CmykMethod::Adobe => cmyk_to_rgb_adobe(&self.coordinates()),
        };
        Rgb::from_fraction(r, g, b)
    }

    /// Format as hashed hexadecimal via standard RGB.
    pub fn html(&self) -> String {
        self.to_rgb().html()
    }

    /// Format as CSS `rgb()` via standard RGB.
    pub fn css_rgb(&self) -> String {
        self.to_rgb().css_rgb()
    }

    /// Format as CSS `rgba()` via standard RGB.
    pub fn css_rgba(&self, alpha: Float) -> String {
        self.to_rgb().css_rgba(alpha)
    }

    /// Format as CSS `hsl()` via standard RGB.
    pub fn css_hsl(&self) -> String {
        self.to_hsl().css_hsl()
    }

    /// Format as CSS `hsla()` via standard RGB.
    pub fn css_hsla(&self, alpha: Float) -> String {
        self.to_hsl().css_hsla(alpha)
    }

    /// Format as a PDF DeviceCMYK fill color operator, e.g.,
    /// `0.100 0.200 0.300 0.400 k`.
    pub fn pdf_fill(&self) -> String {
        self.pdf_operator('k')
    }

    /// Format as a PDF DeviceCMYK stroke color operator.
    pub fn pdf_stroke(&self) -> String {
        self.pdf_operator('K')
    }

    fn pdf_operator(&self, operator: char) -> String {
        format!(
            "{:.3} {:.3} {:.3} {:.3} {}",
            self.c, self.m, self.y, self.k, operator
        )
    }
}

impl ColorModel for Cmyk {
    fn to_rgb(&self) -> Rgb {
        self.to_rgb_with(CmykMethod::Standard)
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }

    /// Convert to grayscale by compositing the luma-weighted inks with black.
    fn to_grayscale(&self) -> Grayscale {
        Grayscale::from_fraction(cmyk_to_gray(&self.coordinates()))
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        is_near_coordinates(&self.coordinates(), &other.coordinates())
    }
}

impl core::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "CMYK [{:.2}%, {:.2}%, {:.2}%, {:.2}%]",
            self.cyan(),
            self.magenta(),
            self.yellow(),
            self.black()
        ))
    }
}
