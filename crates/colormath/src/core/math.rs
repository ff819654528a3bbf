use core::ops::RangeInclusive;

use crate::Float;

/// The magnitude below which a quantity counts as zero.
///
/// Chained conversions accumulate floating point error. Coordinates within
/// this distance of a range boundary are snapped onto the boundary before any
/// comparison with the boundary.
pub const EPSILON: Float = 1e-5;

/// The largest difference between two quantities that still counts as equal.
pub const TOLERANCE: Float = 1e-4;

/// An extension trait for floating point numbers.
///
/// The trait provides the colour epsilon and tolerance for the floating point
/// representation as well as the boundary tests used by the conversion
/// kernels.
pub(crate) trait FloatExt: Copy {
    /// The magnitude below which the number counts as zero.
    const COLOR_EPSILON: Self;

    /// The largest difference still considered equal.
    const COLOR_TOLERANCE: Self;

    /// Determine whether this number is within epsilon of zero.
    fn is_near_zero(self) -> bool;

    /// Determine whether this number is within epsilon of one.
    fn is_near_one(self) -> bool;

    /// Determine whether this number is negative or within epsilon of zero.
    fn is_near_zero_or_less(self) -> bool;

    /// Determine whether this number exceeds one or is within epsilon of one.
    fn is_near_one_or_more(self) -> bool;

    /// Determine whether this number and the other number are within
    /// tolerance of each other.
    fn is_near(self, other: Self) -> bool;
}

macro_rules! impl_float_ext {
    ($ty:ty, $epsilon:expr, $tolerance:expr) => {
        impl FloatExt for $ty {
            const COLOR_EPSILON: $ty = $epsilon;
            const COLOR_TOLERANCE: $ty = $tolerance;

            #[inline]
            fn is_near_zero(self) -> bool {
                self.abs() <= Self::COLOR_EPSILON
            }

            #[inline]
            fn is_near_one(self) -> bool {
                (self - 1.0).is_near_zero()
            }

            #[inline]
            fn is_near_zero_or_less(self) -> bool {
                self < 0.0 || self.is_near_zero()
            }

            #[inline]
            fn is_near_one_or_more(self) -> bool {
                self > 1.0 || self.is_near_one()
            }

            #[inline]
            fn is_near(self, other: Self) -> bool {
                (self - other).abs() <= Self::COLOR_TOLERANCE
            }
        }
    };
}

impl_float_ext!(f64, 1e-5, 1e-4);
impl_float_ext!(f32, 1e-5, 1e-4);

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the value is within [`EPSILON`] of zero.
#[inline]
pub fn near_zero(value: Float) -> bool {
    value.is_near_zero()
}

/// Determine whether the value is within [`EPSILON`] of one.
#[inline]
pub fn near_one(value: Float) -> bool {
    value.is_near_one()
}

/// Determine whether the value is negative or within [`EPSILON`] of zero.
#[inline]
pub fn near_zero_or_less(value: Float) -> bool {
    value.is_near_zero_or_less()
}

/// Determine whether the value is larger than one or within [`EPSILON`] of
/// one.
#[inline]
pub fn near_one_or_more(value: Float) -> bool {
    value.is_near_one_or_more()
}

/// Determine whether the two values are within [`TOLERANCE`] of each other.
#[inline]
pub fn near(value1: Float, value2: Float) -> bool {
    value1.is_near(value2)
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the value to the unit range `0..=1`.
///
/// Values that are negative or within [`EPSILON`] of zero become exactly
/// zero. Values that exceed one or are within [`EPSILON`] of one become
/// exactly one. Not-a-number becomes zero.
#[inline]
#[must_use = "function returns a new value and does not mutate the original"]
pub fn normalize(value: Float) -> Float {
    if value.is_nan() || value.is_near_zero_or_less() {
        0.0
    } else if value.is_near_one_or_more() {
        1.0
    } else {
        value
    }
}

/// Normalize the value to the given range.
///
/// This function clamps the value to the range, snapping values within
/// [`EPSILON`] of either bound onto that bound. The bounds may be given in
/// either order. Not-a-number becomes zero, clamped to the range. A bound
/// that is not-a-number is ignored.
#[must_use = "function returns a new value and does not mutate the original"]
pub fn normalize_range(value: Float, range: RangeInclusive<Float>) -> Float {
    let (mut low, mut high) = range.into_inner();
    match (low.is_nan(), high.is_nan()) {
        (true, true) => return if value.is_nan() { 0.0 } else { value },
        (true, false) => low = high,
        (false, true) => high = low,
        (false, false) => (),
    }

    if high < low {
        core::mem::swap(&mut low, &mut high);
    }

    if value.is_nan() {
        let zero: Float = 0.0;
        zero.clamp(low, high)
    } else if value <= low || (value - low).is_near_zero() {
        low
    } else if high <= value || (value - high).is_near_zero() {
        high
    } else {
        value
    }
}

/// Map the value from one range onto another.
///
/// The affine map takes the `from` bounds onto the `to` bounds. The result is
/// normalized to the `to` range.
#[must_use = "function returns a new value and does not mutate the original"]
pub fn translate_range(
    value: Float,
    from: RangeInclusive<Float>,
    to: RangeInclusive<Float>,
) -> Float {
    let (from_low, from_high) = from.into_inner();
    let (to_low, to_high) = to.into_inner();

    let scale = (to_high - to_low) / (from_high - from_low);
    let translated = (value - from_low).mul_add(scale, to_low);
    normalize_range(translated, to_low..=to_high)
}

/// Wrap a fraction of a full turn into `0..1`.
#[inline]
pub(crate) fn wrap_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        let wrapped = value.rem_euclid(1.0);
        // rem_euclid may round up to exactly 1.0 for tiny negative inputs.
        if wrapped >= 1.0 {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(near_zero(0.000_001), "1e-6 is near zero");
        assert!(!near_zero(0.001), "1e-3 is not near zero");
        assert!(near_one(0.999_999), "0.999999 is near one");
        assert!(near_zero_or_less(-3.0), "negative values are near zero or less");
        assert!(near_one_or_more(1.5), "1.5 is near one or more");
        assert!(!near_one_or_more(0.5), "0.5 is not near one or more");
        assert!(near(0.5, 0.50009), "difference below tolerance");
        assert!(!near(0.5, 0.5002), "difference above tolerance");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(-0.2), 0.0);
        assert_eq!(normalize(0.000_004), 0.0);
        assert_eq!(normalize(0.4), 0.4);
        assert_eq!(normalize(0.999_996), 1.0);
        assert_eq!(normalize(7.0), 1.0);
        assert_eq!(normalize(Float::NAN), 0.0);

        assert_eq!(normalize_range(-200.0, -128.0..=127.0), -128.0);
        assert_eq!(normalize_range(126.999_999, -128.0..=127.0), 127.0);
        assert_eq!(normalize_range(50.0, 100.0..=0.0), 50.0);
        assert_eq!(normalize_range(150.0, 100.0..=0.0), 100.0);
        assert_eq!(normalize_range(Float::NAN, -128.0..=127.0), 0.0);
        assert_eq!(normalize_range(Float::NAN, 5.0..=10.0), 5.0);
    }

    #[test]
    fn test_normalize_range_nan_bounds() {
        assert_eq!(normalize_range(3.0, Float::NAN..=1.0), 1.0);
        assert_eq!(normalize_range(-3.0, -1.0..=Float::NAN), -1.0);
        assert_eq!(normalize_range(3.0, Float::NAN..=Float::NAN), 3.0);
        assert_eq!(normalize_range(Float::NAN, Float::NAN..=Float::NAN), 0.0);
        assert_eq!(normalize_range(Float::NAN, Float::NAN..=0.5), 0.5);
        assert_eq!(normalize_range(0.5, Float::NEG_INFINITY..=Float::INFINITY), 0.5);
    }

    #[test]
    fn test_translate_range() {
        let a = translate_range(-30.0, -100.0..=100.0, -128.0..=127.0);
        let b = translate_range(30.0, -100.0..=100.0, -128.0..=127.0);
        assert!(near(a, -38.75), "{} should be -38.75", a);
        assert!(near(b, 37.75), "{} should be 37.75", b);

        let c = translate_range(250.0, 0.0..=100.0, 0.0..=1.0);
        assert_eq!(c, 1.0);
    }

    #[test]
    fn test_wrap_unit() {
        assert!(near(wrap_unit(1.25), 0.25), "1.25 wraps to 0.25");
        assert!(near(wrap_unit(-0.25), 0.75), "-0.25 wraps to 0.75");
        assert_eq!(wrap_unit(1.0), 0.0);
    }
}
