use super::FloatExt;
use crate::Float;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro compares the two numbers with [`near`](crate::near), i.e., it
/// accepts differences up to the colour tolerance of 1e-4.
///
/// # Panics
///
/// This macro panics if the two numbers differ by more than the tolerance.
/// Its message places the numbers below each other at the beginning of
/// subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            $crate::near(f1, f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two coordinate arrays describe the same
/// color.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// colour tolerance. Its message places the coordinates below each other at
/// the beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2) = ($cs1, $cs2);
        assert!(
            $crate::core::is_near_coordinates(&cs1, &cs2),
            "color coordinates differ:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting the equality of color values.
///
/// This macro tests the color values for equality using their `PartialEq`
/// implementation, which compares every component within the colour
/// tolerance.
///
/// # Panics
///
/// This macro panics if the two values are not equal. Its message places the
/// values below each other at the beginning of subsequent lines for easy
/// comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        assert!(c1 == c2, "colors differ:\n{:?}\n{:?}", c1, c2);
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two coordinate arrays are pairwise within tolerance
/// of each other.
///
/// Not-a-number never equals anything, including itself.
#[inline]
pub(crate) fn is_near_coordinates<const N: usize>(
    coordinates1: &[Float; N],
    coordinates2: &[Float; N],
) -> bool {
    coordinates1
        .iter()
        .zip(coordinates2.iter())
        .all(|(c1, c2)| c1.is_near(*c2))
}

#[cfg(test)]
mod test {
    use super::is_near_coordinates;
    use crate::Float;

    #[test]
    fn test_near_coordinates() {
        assert!(
            is_near_coordinates(&[0.1, 0.2, 0.3], &[0.10005, 0.19995, 0.3]),
            "coordinates within tolerance"
        );
        assert!(
            !is_near_coordinates(&[0.1, 0.2, 0.3, 0.4], &[0.1, 0.2, 0.3, 0.41]),
            "fourth coordinate out of tolerance"
        );
        assert!(
            !is_near_coordinates(&[Float::NAN], &[Float::NAN]),
            "not-a-number equals nothing"
        );
    }
}
