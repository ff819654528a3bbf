use colormath::opt::MatchOptions;
use colormath::{
    assert_close_enough, assert_same_color, normalize, ColorModel, ContrastAlgorithm, Float, Rgb,
};
use proptest::prelude::*;

/// Any RGB coordinate.
fn component() -> impl Strategy<Value = Float> {
    0.0..=1.0 as Float
}

fn rgb() -> impl Strategy<Value = Rgb> {
    (component(), component(), component()).prop_map(|(r, g, b)| Rgb::from_fraction(r, g, b))
}

/// Any 24-bit color. XYZ snaps components within epsilon of zero, which
/// 8-bit quantization stays clear of.
fn rgb24() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

#[test]
fn byte_sweep_round_trips() {
    let bright = (0..=255_u8).step_by(3);
    let dark = 0..8_u8;
    let levels: Vec<u8> = bright.chain(dark).collect();

    for &r in levels.iter() {
        for &g in levels.iter() {
            for &b in levels.iter() {
                let color = Rgb::from([r, g, b]);
                assert_same_color!(color.to_xyz().to_rgb(), color);
                assert_same_color!(color.to_lab().to_rgb(), color);
            }
        }
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(value in -10.0..=10.0 as Float) {
        let once = normalize(value);
        prop_assert!((0.0..=1.0).contains(&once), "{} out of range", once);
        prop_assert_eq!(normalize(once), once);
    }

    #[test]
    fn hsl_round_trip(color in rgb()) {
        assert_same_color!(color.to_hsl().to_rgb(), color);
    }

    #[test]
    fn xyz_round_trip(color in rgb24()) {
        assert_same_color!(color.to_xyz().to_rgb(), color);
    }

    #[test]
    fn lab_round_trip(color in rgb24()) {
        assert_same_color!(color.to_lab().to_rgb(), color);
    }

    #[test]
    fn hex_round_trip(bytes in any::<[u8; 3]>()) {
        let color = Rgb::from(bytes);
        prop_assert_eq!(Rgb::from_html(&color.html()).map(|c| c.to_24bit()), Ok(bytes));
    }

    #[test]
    fn naive_contrast_is_symmetric(color1 in rgb(), color2 in rgb()) {
        assert_close_enough!(
            color1.contrast(&color2, ContrastAlgorithm::Naive),
            color2.contrast(&color1, ContrastAlgorithm::Naive)
        );
    }

    #[test]
    fn delta_e2000_is_symmetric(color1 in rgb(), color2 in rgb()) {
        let forward = color1.delta_e2000(&color2);
        prop_assert!(forward >= 0.0, "negative distance {}", forward);
        assert_close_enough!(forward, color2.delta_e2000(&color1));
        assert_close_enough!(color1.delta_e2000(&color1), 0.0);
    }

    #[test]
    fn closest_match_minimizes_distance(
        color in rgb(),
        candidates in prop::collection::vec(rgb(), 1..8),
    ) {
        let index = color.closest_match(&candidates, &MatchOptions::default());
        prop_assert!(index.is_some(), "default threshold admits every candidate");

        let best = index.map_or(Float::NAN, |index| {
            color.contrast(&candidates[index], ContrastAlgorithm::DeltaE94)
        });
        for candidate in candidates.iter() {
            prop_assert!(best <= color.contrast(candidate, ContrastAlgorithm::DeltaE94));
        }
    }
}
