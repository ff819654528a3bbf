use crate::{Cielab, Cmyk, Grayscale, Hsl, Rgb, Xyz, Yiq};

/// Conversion between color models.
///
/// Every value type implements this trait. Only [`ColorModel::to_rgb`] is
/// required. By default, the other conversions route through RGB, except
/// [`ColorModel::to_lab`], which routes through XYZ. Value types override
/// the conversions they can perform more directly, and each type's
/// conversion to itself is the identity.
///
/// The conversions clamp their results to the target model's valid range.
/// Some are lossy. Notably, converting to YIQ clamps the signed chroma
/// components I and Q to `0..=1`, and converting to grayscale discards hue
/// and saturation.
pub trait ColorModel {
    /// Convert to RGB.
    fn to_rgb(&self) -> Rgb;

    /// Convert to HSL.
    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert to CMYK.
    fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// Convert to grayscale.
    fn to_grayscale(&self) -> Grayscale {
        self.to_rgb().to_grayscale()
    }

    /// Convert to YIQ.
    fn to_yiq(&self) -> Yiq {
        self.to_rgb().to_yiq()
    }

    /// Convert to XYZ with the D65 reference white.
    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    /// Convert to CIELAB with the D65 reference white.
    fn to_lab(&self) -> Cielab {
        self.to_xyz().to_lab()
    }
}

// ====================================================================================================================

/// The kind of a color model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// sRGB.
    Rgb,
    /// Hue, saturation, and luminosity.
    Hsl,
    /// Cyan, magenta, yellow, and black.
    Cmyk,
    /// A single gray level.
    Grayscale,
    /// NTSC luma and chrominance.
    Yiq,
    /// CIE XYZ.
    Xyz,
    /// CIE L*a*b*.
    Cielab,
}

impl ColorKind {
    /// Get the name of this color model.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
            Self::Grayscale => "Grayscale",
            Self::Yiq => "YIQ",
            Self::Xyz => "XYZ",
            Self::Cielab => "CIELAB",
        }
    }
}

/// A color in any of the supported color models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorValue {
    /// An sRGB color.
    Rgb(Rgb),
    /// An HSL color.
    Hsl(Hsl),
    /// A CMYK color.
    Cmyk(Cmyk),
    /// A gray level.
    Grayscale(Grayscale),
    /// A YIQ color.
    Yiq(Yiq),
    /// An XYZ color.
    Xyz(Xyz),
    /// A CIELAB color.
    Cielab(Cielab),
}

macro_rules! dispatch {
    ($value:expr, $color:ident => $body:expr) => {
        match $value {
            ColorValue::Rgb($color) => $body,
            ColorValue::Hsl($color) => $body,
            ColorValue::Cmyk($color) => $body,
            ColorValue::Grayscale($color) => $body,
            ColorValue::Yiq($color) => $body,
            ColorValue::Xyz($color) => $body,
            ColorValue::Cielab($color) => $body,
        }
    };
}

impl ColorValue {
    /// Get this color's kind.
    pub const fn kind(&self) -> ColorKind {
        match self {
            Self::Rgb(_) => ColorKind::Rgb,
            Self::Hsl(_) => ColorKind::Hsl,
            Self::Cmyk(_) => ColorKind::Cmyk,
            Self::Grayscale(_) => ColorKind::Grayscale,
            Self::Yiq(_) => ColorKind::Yiq,
            Self::Xyz(_) => ColorKind::Xyz,
            Self::Cielab(_) => ColorKind::Cielab,
        }
    }

    /// Convert this color to the given kind of color model.
    ///
    /// Converting to the color's own kind returns the color unchanged.
    #[must_use = "method returns a new color and does not mutate the original"]
    pub fn convert(&self, kind: ColorKind) -> ColorValue {
        match kind {
            ColorKind::Rgb => Self::Rgb(self.to_rgb()),
            ColorKind::Hsl => Self::Hsl(self.to_hsl()),
            ColorKind::Cmyk => Self::Cmyk(self.to_cmyk()),
            ColorKind::Grayscale => Self::Grayscale(self.to_grayscale()),
            ColorKind::Yiq => Self::Yiq(self.to_yiq()),
            ColorKind::Xyz => Self::Xyz(self.to_xyz()),
            ColorKind::Cielab => Self::Cielab(self.to_lab()),
        }
    }
}

impl ColorModel for ColorValue {
    fn to_rgb(&self) -> Rgb {
        dispatch!(self, color => color.to_rgb())
    }

    fn to_hsl(&self) -> Hsl {
        dispatch!(self, color => color.to_hsl())
    }

    fn to_cmyk(&self) -> Cmyk {
        dispatch!(self, color => color.to_cmyk())
    }

    fn to_grayscale(&self) -> Grayscale {
        dispatch!(self, color => color.to_grayscale())
    }

    fn to_yiq(&self) -> Yiq {
        dispatch!(self, color => color.to_yiq())
    }

    fn to_xyz(&self) -> Xyz {
        dispatch!(self, color => color.to_xyz())
    }

    fn to_lab(&self) -> Cielab {
        dispatch!(self, color => color.to_lab())
    }
}

impl core::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        dispatch!(self, color => core::fmt::Display::fmt(color, f))
    }
}

macro_rules! from_value_type {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for ColorValue {
                fn from(value: $ty) -> Self {
                    Self::$ty(value)
                }
            }
        )*
    };
}

from_value_type!(Rgb, Hsl, Cmyk, Grayscale, Yiq, Xyz, Cielab);

/// Determine whether the two colors are equivalent.
///
/// This function converts the second color to the first color's model and
/// then compares the two under tolerance. Since conversions may be lossy,
/// this relation is not necessarily symmetric.
pub fn equivalent(color1: &ColorValue, color2: &ColorValue) -> bool {
    *color1 == color2.convert(color1.kind())
}
