use crate::Float;

/// Compute the difference in brightness between the two RGB colors.
///
/// Brightness uses the NTSC luma weights scaled to integers, so the result is
/// a fraction.
fn diff_brightness(rgb1: &[Float; 3], rgb2: &[Float; 3]) -> Float {
    #[inline]
    fn brightness(rgb: &[Float; 3]) -> Float {
        let [r, g, b] = *rgb;
        r.mul_add(299.0, g.mul_add(587.0, 114.0 * b))
    }

    (brightness(rgb1) - brightness(rgb2)).abs() / 1000.0
}

/// Compute the mean absolute difference across the RGB channels.
fn diff_hue(rgb1: &[Float; 3], rgb2: &[Float; 3]) -> Float {
    let [r1, g1, b1] = *rgb1;
    let [r2, g2, b2] = *rgb2;

    ((r1 - r2).abs() + (g1 - g2).abs() + (b1 - b2).abs()) / 3.0
}

/// Compute the difference in luminosity between the two RGB colors.
///
/// The luminosity weighs blue with 0.7152 and green with 0.0722, mirroring
/// the established reference values for this metric. The difference is the
/// WCAG-style ratio `(max + 0.05) / (min + 0.05)`, shifted to zero for equal
/// colors and divided by 20.
fn diff_luminosity(rgb1: &[Float; 3], rgb2: &[Float; 3]) -> Float {
    #[inline]
    fn luminosity(rgb: &[Float; 3]) -> Float {
        let [r, g, b] = *rgb;
        r.powf(2.2)
            .mul_add(0.2126, b.powf(2.2).mul_add(0.7152, 0.0722 * g.powf(2.2)))
    }

    let l1 = luminosity(rgb1);
    let l2 = luminosity(rgb2);

    ((l1.max(l2) + 0.05) / (l1.min(l2) + 0.05) - 1.0) / 20.0
}

/// Compute the naive contrast between the two RGB colors.
///
/// The result blends brightness, hue, and luminosity differences with weights
/// 0.65, 0.20, and 0.15. It is symmetric. Values above roughly 0.22 tend to be
/// legible; 0.3 and above are safe.
pub(crate) fn naive_contrast(rgb1: &[Float; 3], rgb2: &[Float; 3]) -> Float {
    diff_brightness(rgb1, rgb2).mul_add(
        0.65,
        diff_hue(rgb1, rgb2).mul_add(0.20, diff_luminosity(rgb1, rgb2) * 0.15),
    )
}

/// Compute the Euclidean distance between the two RGB colors.
///
/// The distance is divided by √3, the distance between black and white, so
/// the result is a fraction.
pub(crate) fn euclidean_distance(rgb1: &[Float; 3], rgb2: &[Float; 3]) -> Float {
    let [r1, g1, b1] = *rgb1;
    let [r2, g2, b2] = *rgb2;
    let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);

    dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt() / (3.0 as Float).sqrt()
}
