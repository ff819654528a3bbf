use super::{normalize, FloatExt};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function normalizes the coordinates to unit range before scaling, so
/// the result always fits `0x00..=0xff`.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_byte(r), to_byte(g), to_byte(b)]
}

/// Convert a single fraction to an unsigned byte.
#[inline]
pub(crate) fn to_byte(value: Float) -> u8 {
    (normalize(value) * 255.0).round().min(255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to HSL.
///
/// All coordinates are fractions, including the hue, which is a fraction of a
/// full turn. Achromatic colors have zero hue and saturation.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta.is_near_zero() {
        return [0.0, 0.0, lightness];
    }

    let saturation = if (lightness - 0.5).is_near_zero_or_less() {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    // Sector selection uses exact comparison since max is one of r, g, b.
    #[allow(clippy::float_cmp)]
    let mut hue = if r == max {
        let h = (g - b) / delta / 6.0;
        if g < b {
            h + 1.0
        } else {
            h
        }
    } else if g == max {
        (b - r) / delta / 6.0 + 1.0 / 3.0
    } else {
        (r - g) / delta / 6.0 + 2.0 / 3.0
    };

    if hue < 0.0 {
        hue += 1.0;
    }
    if hue > 1.0 {
        hue -= 1.0;
    }

    [hue, saturation, lightness]
}

/// Convert HSL to RGB.
///
/// Lightness at or below zero is black, lightness at or above one is white,
/// and zero saturation is a gray with the given lightness. All other colors
/// are computed with Foley and van Dam's algorithm, which samples a
/// four-region piecewise function at three positions on the hue circle.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;

    if l.is_near_zero_or_less() {
        return [0.0, 0.0, 0.0];
    } else if l.is_near_one_or_more() {
        return [1.0, 1.0, 1.0];
    } else if s.is_near_zero() {
        return [l, l, l];
    }

    let t2 = if (l - 0.5).is_near_zero_or_less() {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let t1 = l.mul_add(2.0, -t2);

    #[inline]
    fn rotate_hue(mut h: Float) -> Float {
        if h.is_near_zero_or_less() {
            h += 1.0;
        }
        if h.is_near_one_or_more() {
            h -= 1.0;
        }
        h
    }

    #[inline]
    fn hue_to_rgb(h: Float, t1: Float, t2: Float) -> Float {
        if h.mul_add(6.0, -1.0).is_near_zero_or_less() {
            ((t2 - t1) * h).mul_add(6.0, t1)
        } else if h.mul_add(2.0, -1.0).is_near_zero_or_less() {
            t2
        } else if h.mul_add(3.0, -2.0).is_near_zero_or_less() {
            ((t2 - t1) * (2.0 / 3.0 - h)).mul_add(6.0, t1)
        } else {
            t1
        }
    }

    [
        hue_to_rgb(rotate_hue(h + 1.0 / 3.0), t1, t2),
        hue_to_rgb(rotate_hue(h), t1, t2),
        hue_to_rgb(rotate_hue(h - 1.0 / 3.0), t1, t2),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// NTSC luma/chroma coefficients

#[rustfmt::skip]
const RGB_TO_YIQ: [[Float; 3]; 3] = [
    [ 0.299,  0.587,  0.114 ],
    [ 0.596, -0.275, -0.321 ],
    [ 0.212, -0.523,  0.311 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const YIQ_TO_RGB: [[Float; 3]; 3] = [
    [ 1.0,  0.9556880603611567,  0.6198580944563707 ],
    [ 1.0, -0.2715817969440586, -0.6468738161384013 ],
    [ 1.0, -1.1081773266826620,  1.7050645599191818 ],
];

/// Convert RGB to YIQ. This is a one-hop, direct conversion.
#[inline]
pub(crate) fn rgb_to_yiq(value: &[Float; 3]) -> [Float; 3] {
    multiply(&RGB_TO_YIQ, value)
}

/// Convert YIQ to RGB. This is a one-hop, direct conversion.
#[inline]
pub(crate) fn yiq_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&YIQ_TO_RGB, value)
}

/// Compute the luma of the given RGB coordinates, i.e., YIQ's Y.
#[inline]
pub(crate) fn luma(value: &[Float; 3]) -> Float {
    let [r, g, b] = *value;
    r.mul_add(0.299, g.mul_add(0.587, b * 0.114))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to CMYK.
///
/// The black component starts out as the minimum of the inverted channels and
/// is then reduced in proportion to the color's luma. The chromatic inks are
/// reduced by the remaining black (undercolor removal). All four components
/// are clamped to unit range.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);

    let mut k = c.min(m).min(y);
    k -= k * luma(value);

    [
        (c - k).clamp(0.0, 1.0),
        (m - k).clamp(0.0, 1.0),
        (y - k).clamp(0.0, 1.0),
        k.clamp(0.0, 1.0),
    ]
}

/// Convert CMYK to RGB with the standard formula `1 - (c·(1 - k) + k)`.
pub(crate) fn cmyk_to_rgb_standard(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let convert = |ink: Float| 1.0 - ink.mul_add(1.0 - k, k);
    [convert(c), convert(m), convert(y)]
}

/// Convert CMYK to RGB with the Adobe/PDF formula `1 - min(1, c + k)`.
pub(crate) fn cmyk_to_rgb_adobe(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let convert = |ink: Float| 1.0 - (ink + k).min(1.0);
    [convert(c), convert(m), convert(y)]
}

/// Convert CMYK to a gray level by compositing the luma-weighted inks with
/// black.
pub(crate) fn cmyk_to_gray(value: &[Float; 4]) -> Float {
    let [c, m, y, k] = *value;
    1.0 - c.mul_add(0.299, m.mul_add(0.587, y.mul_add(0.114, k))).min(1.0)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.0031308 {
            value * 12.92
        } else {
            value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert sRGB to XYZ with a D65 reference white. Y of white is 1.0.
pub(crate) fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, &rgb_to_linear_rgb(value))
}

/// Convert XYZ with a D65 reference white to sRGB.
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_SRGB, value))
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_XYZ_to_Lab.html

/// The CIE ε, i.e., 216/24389.
pub(crate) const CIE_E: Float = 216.0 / 24389.0;
/// The CIE κ, i.e., 24389/27.
pub(crate) const CIE_K: Float = 24389.0 / 27.0;
/// The product of ε and κ, i.e., 8.
const CIE_EK: Float = CIE_E * CIE_K;

/// Convert XYZ to CIELAB relative to the given reference white.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(value: &[Float; 3], white: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > CIE_E {
            t.cbrt()
        } else {
            CIE_K.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(value[0] / white[0]);
    let fy = f(value[1] / white[1]);
    let fz = f(value[2] / white[2]);

    let L = fy.mul_add(116.0, -16.0);
    [L, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB to XYZ relative to the given reference white.
///
/// The lightness branch tests `L > κ·ε` against the lightness itself, not
/// the cubed intermediate. Getting this wrong inflates Y for dark colors by
/// roughly three orders of magnitude.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[Float; 3], white: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let fy = (L + 16.0) / 116.0;
    let fz = fy - b / 200.0;
    let fx = a / 500.0 + fy;

    #[inline]
    fn inverse_f(t: Float) -> Float {
        let t3 = t * t * t;
        if t3 > CIE_E {
            t3
        } else {
            t.mul_add(116.0, -16.0) / CIE_K
        }
    }

    let xr = inverse_f(fx);
    let yr = if L > CIE_EK { fy * fy * fy } else { L / CIE_K };
    let zr = inverse_f(fz);

    [xr * white[0], yr * white[1], zr * white[2]]
}
