use crate::Float;

/// Compute ΔE*94 for the two CIELAB colors.
///
/// The first color is the reference; its chroma scales the chroma and hue
/// terms. Hence this metric is not symmetric. The hue difference is computed
/// as ΔH² = Δa² + Δb² − ΔC² without ever taking its square root, which avoids
/// an imaginary intermediate for nearly identical colors.
#[allow(non_snake_case)]
pub(crate) fn delta_e94(
    reference: &[Float; 3],
    sample: &[Float; 3],
    k1: Float,
    k2: Float,
    kL: Float,
) -> Float {
    let [L1, a1, b1] = *reference;
    let [L2, a2, b2] = *sample;

    let Δa = a1 - a2;
    let Δb = b1 - b2;

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);

    let ΔL = L1 - L2;
    let ΔC = C1 - C2;
    let ΔH2 = Δa.mul_add(Δa, Δb.mul_add(Δb, -ΔC * ΔC));

    let SL = 1.0;
    let SC = k1.mul_add(C1, 1.0);
    let SH = k2.mul_add(C1, 1.0);

    let kC = 1.0;
    let kH = 1.0;

    let termL = ΔL / (kL * SL);
    let termC = ΔC / (kC * SC);
    let termH = ΔH2 / ((kH * SH) * (kH * SH));

    termL.mul_add(termL, termC.mul_add(termC, termH)).max(0.0).sqrt()
}

/// Compute ΔE*2000 for the two CIELAB colors.
///
/// This function follows G. Sharma, W. Wu, and E. N. Dalal, "The CIEDE2000
/// Color-Difference Formula: Implementation Notes, Supplementary Test Data,
/// and Mathematical Observations," Color Research and Application, 30(1),
/// 2005. Hue angles are in degrees. The metric is symmetric.
#[allow(non_snake_case)]
pub(crate) fn delta_e2000(
    color1: &[Float; 3],
    color2: &[Float; 3],
    kL: Float,
    kC: Float,
    kH: Float,
) -> Float {
    const POW25_7: Float = 6_103_515_625.0;

    let [L1, a1, b1] = *color1;
    let [L2, a2, b2] = *color2;

    // Chroma-dependent a* correction
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let C_mean = (C1 + C2) / 2.0;
    let C_mean7 = C_mean.powi(7);
    let G = 0.5 * (1.0 - (C_mean7 / (C_mean7 + POW25_7)).sqrt());

    let a1_prime = (1.0 + G) * a1;
    let a2_prime = (1.0 + G) * a2;
    let C1_prime = a1_prime.hypot(b1);
    let C2_prime = a2_prime.hypot(b2);

    #[inline]
    fn hue_angle(b: Float, a_prime: Float) -> Float {
        if a_prime == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a_prime).to_degrees().rem_euclid(360.0)
        }
    }

    let h1_prime = hue_angle(b1, a1_prime);
    let h2_prime = hue_angle(b2, a2_prime);
    let chroma_product = C1_prime * C2_prime;

    // Differences
    let ΔL_prime = L2 - L1;
    let ΔC_prime = C2_prime - C1_prime;
    let Δh_prime = if chroma_product == 0.0 {
        0.0
    } else if h2_prime - h1_prime > 180.0 {
        h2_prime - h1_prime - 360.0
    } else if h2_prime - h1_prime < -180.0 {
        h2_prime - h1_prime + 360.0
    } else {
        h2_prime - h1_prime
    };
    let ΔH_prime = 2.0 * chroma_product.sqrt() * (Δh_prime / 2.0).to_radians().sin();

    // Means
    let L_prime_mean = (L1 + L2) / 2.0;
    let C_prime_mean = (C1_prime + C2_prime) / 2.0;
    let h_prime_mean = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    // Weighting functions
    let T = 1.0 - 0.17 * (h_prime_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_prime_mean).to_radians().cos()
        + 0.32 * (3.0 * h_prime_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_prime_mean - 63.0).to_radians().cos();

    let L50 = (L_prime_mean - 50.0) * (L_prime_mean - 50.0);
    let SL = 1.0 + 0.015 * L50 / (20.0 + L50).sqrt();
    let SC = C_prime_mean.mul_add(0.045, 1.0);
    let SH = 1.0 + 0.015 * C_prime_mean * T;

    // Rotation term
    let Δθ = 30.0 * (-((h_prime_mean - 275.0) / 25.0).powi(2)).exp();
    let C_prime_mean7 = C_prime_mean.powi(7);
    let RC = 2.0 * (C_prime_mean7 / (C_prime_mean7 + POW25_7)).sqrt();
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let termL = ΔL_prime / (kL * SL);
    let termC = ΔC_prime / (kC * SC);
    let termH = ΔH_prime / (kH * SH);

    (termL * termL + termC * termC + termH * termH + RT * termC * termH)
        .max(0.0)
        .sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the candidate closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance metric with the given function, and returns the index and
/// distance of the closest candidate whose distance is strictly below the
/// threshold. It returns `None` if there are no candidates or no candidate is
/// close enough. Ties go to the earlier candidate.
pub(crate) fn find_closest<T, C, F>(
    origin: &T,
    candidates: C,
    threshold: Float,
    mut compute_distance: F,
) -> Option<(usize, Float)>
where
    C: IntoIterator,
    C::Item: core::borrow::Borrow<T>,
    F: FnMut(&T, &T) -> Float,
{
    use core::borrow::Borrow;

    let mut min_distance = threshold;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate.borrow());
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index.map(|index| (index, min_distance))
}

/// Linearly interpolate between the two values.
#[inline]
pub(crate) fn interpolate(fraction: Float, value1: Float, value2: Float) -> Float {
    fraction.mul_add(value2 - value1, value1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    // Sharma, Wu, and Dalal's supplementary test data.
    #[rustfmt::skip]
    const SHARMA: [([Float; 3], [Float; 3], Float); 34] = [
        ([50.0000,   2.6772, -79.7751], [50.0000,   0.0000, -82.7485],  2.0425),
        ([50.0000,   3.1571, -77.2803], [50.0000,   0.0000, -82.7485],  2.8615),
        ([50.0000,   2.8361, -74.0200], [50.0000,   0.0000, -82.7485],  3.4412),
        ([50.0000,  -1.3802, -84.2814], [50.0000,   0.0000, -82.7485],  1.0000),
        ([50.0000,  -1.1848, -84.8006], [50.0000,   0.0000, -82.7485],  1.0000),
        ([50.0000,  -0.9009, -85.5211], [50.0000,   0.0000, -82.7485],  1.0000),
        ([50.0000,   0.0000,   0.0000], [50.0000,  -1.0000,   2.0000],  2.3669),
        ([50.0000,  -1.0000,   2.0000], [50.0000,   0.0000,   0.0000],  2.3669),
        ([50.0000,   2.4900,  -0.0010], [50.0000,  -2.4900,   0.0009],  7.1792),
        ([50.0000,   2.4900,  -0.0010], [50.0000,  -2.4900,   0.0010],  7.1792),
        ([50.0000,   2.4900,  -0.0010], [50.0000,  -2.4900,   0.0011],  7.2195),
        ([50.0000,   2.4900,  -0.0010], [50.0000,  -2.4900,   0.0012],  7.2195),
        ([50.0000,  -0.0010,   2.4900], [50.0000,   0.0009,  -2.4900],  4.8045),
        ([50.0000,  -0.0010,   2.4900], [50.0000,   0.0010,  -2.4900],  4.8045),
        ([50.0000,  -0.0010,   2.4900], [50.0000,   0.0011,  -2.4900],  4.7461),
        ([50.0000,   2.5000,   0.0000], [50.0000,   0.0000,  -2.5000],  4.3065),
        ([50.0000,   2.5000,   0.0000], [73.0000,  25.0000, -18.0000], 27.1492),
        ([50.0000,   2.5000,   0.0000], [61.0000,  -5.0000,  29.0000], 22.8977),
        ([50.0000,   2.5000,   0.0000], [56.0000, -27.0000,  -3.0000], 31.9030),
        ([50.0000,   2.5000,   0.0000], [58.0000,  24.0000,  15.0000], 19.4535),
        ([50.0000,   2.5000,   0.0000], [50.0000,   3.1736,   0.5854],  1.0000),
        ([50.0000,   2.5000,   0.0000], [50.0000,   3.2972,   0.0000],  1.0000),
        ([50.0000,   2.5000,   0.0000], [50.0000,   1.8634,   0.5757],  1.0000),
        ([50.0000,   2.5000,   0.0000], [50.0000,   3.2592,   0.3350],  1.0000),
        ([60.2574, -34.0099,  36.2677], [60.4626, -34.1751,  39.4387],  1.2644),
        ([63.0109, -31.0961,  -5.8663], [62.8187, -29.7946,  -4.0864],  1.2630),
        ([61.2901,   3.7196,  -5.3901], [61.4292,   2.2480,  -4.9620],  1.8731),
        ([35.0831, -44.1164,   3.7933], [35.0232, -40.0716,   1.5901],  1.8645),
        ([22.7233,  20.0904, -46.6940], [23.0331,  14.9730, -42.5619],  2.0373),
        ([36.4612,  47.8580,  18.3852], [36.2715,  50.5065,  21.2231],  1.4146),
        ([90.8027,  -2.0831,   1.4410], [91.1528,  -1.6435,   0.0447],  1.4441),
        ([90.9257,  -0.5406,  -0.9208], [88.6381,  -0.8985,  -0.7239],  1.5381),
        ([ 6.7747,  -0.2908,  -2.4247], [ 5.8714,  -0.0985,  -2.2286],  0.6377),
        ([ 2.0776,   0.0795,  -1.1350], [ 0.9033,  -0.0636,  -0.5514],  0.9082),
    ];

    #[test]
    fn test_delta_e2000() {
        for &(color1, color2, expected) in SHARMA.iter() {
            let forward = delta_e2000(&color1, &color2, 1.0, 1.0, 1.0);
            let backward = delta_e2000(&color2, &color1, 1.0, 1.0, 1.0);
            assert_close_enough!(forward, expected);
            assert_close_enough!(forward, backward);
        }
    }

    #[test]
    fn test_delta_e94() {
        let indigo = [20.47, 51.69, -53.31];
        assert_eq!(delta_e94(&indigo, &indigo, 0.045, 0.015, 1.0), 0.0);

        // Pure lightness differences are only scaled by kL.
        let gray1 = [40.0, 0.0, 0.0];
        let gray2 = [50.0, 0.0, 0.0];
        assert_close_enough!(delta_e94(&gray1, &gray2, 0.045, 0.015, 1.0), 10.0);
        assert_close_enough!(delta_e94(&gray1, &gray2, 0.048, 0.014, 2.0), 5.0);

        // Pure chroma difference at equal hue: ΔC / (1 + k1·C1)
        let c1 = [50.0, 30.0, 40.0];
        let c2 = [50.0, 15.0, 20.0];
        assert_close_enough!(delta_e94(&c1, &c2, 0.045, 0.015, 1.0), 25.0 / 3.25);
    }

    #[test]
    fn test_delta_e94_reference() {
        // (reference, sample, graphic arts, graphic arts reversed, textiles, textiles reversed)
        #[rustfmt::skip]
        let data: [([Float; 3], [Float; 3], [Float; 4]); 4] = [
            ([50.0,     2.6772, -79.7751], [50.0,      0.0,    -82.7485],
             [1.395_039, 1.365_285, 1.423_046, 1.393_630]),
            ([50.0,     2.5,      0.0   ], [73.0,     25.0,    -18.0   ],
             [34.689_163, 26.139_752, 28.250_263, 16.638_226]),
            ([60.2574, -34.0099,  36.2677], [60.4626, -34.1751,  39.4387],
             [1.390_995, 1.357_619, 1.389_733, 1.356_910]),
            ([22.7233,  20.0904, -46.694 ], [23.0331,  14.973,  -42.5619],
             [2.556_133, 2.725_149, 2.530_989, 2.696_035]),
        ];

        for (reference, sample, [ga, ga_reversed, tx, tx_reversed]) in data {
            assert_close_enough!(delta_e94(&reference, &sample, 0.045, 0.015, 1.0), ga);
            assert_close_enough!(delta_e94(&sample, &reference, 0.045, 0.015, 1.0), ga_reversed);
            assert_close_enough!(delta_e94(&reference, &sample, 0.048, 0.014, 2.0), tx);
            assert_close_enough!(delta_e94(&sample, &reference, 0.048, 0.014, 2.0), tx_reversed);
        }
    }

    #[test]
    fn test_find_closest() {
        let candidates: [Float; 4] = [9.0, 2.0, 4.0, 2.0];
        let distance = |a: &Float, b: &Float| (a - b).abs();

        assert_eq!(
            find_closest(&3.0, candidates.iter(), 100.0, distance),
            Some((1, 1.0))
        );
        assert_eq!(find_closest(&3.0, candidates.iter(), 0.5, distance), None);
        let empty: [Float; 0] = [];
        assert_eq!(find_closest(&3.0, empty.iter(), 100.0, distance), None);
    }

    #[test]
    fn test_interpolate() {
        assert_close_enough!(interpolate(0.25, 0.0, 60.0), 15.0);
        assert_close_enough!(interpolate(0.0, 0.3, 0.9), 0.3);
        assert_close_enough!(interpolate(1.0, 0.3, 0.9), 0.9);
    }
}
