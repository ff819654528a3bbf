mod contrast;
mod conversion;
mod difference;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{euclidean_distance, naive_contrast};

// conversion
pub(crate) use conversion::{
    cmyk_to_gray, cmyk_to_rgb_adobe, cmyk_to_rgb_standard, from_24bit, hsl_to_rgb, lab_to_xyz,
    luma, rgb_to_cmyk, rgb_to_hsl, rgb_to_xyz, rgb_to_yiq, to_24bit, to_byte, xyz_to_lab,
    xyz_to_rgb, yiq_to_rgb,
};

// difference
pub(crate) use difference::{delta_e2000, delta_e94, find_closest, interpolate};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub(crate) use equality::is_near_coordinates;

// math
pub(crate) use math::{wrap_unit, FloatExt};
pub use math::{
    near, near_one, near_one_or_more, near_zero, near_zero_or_less, normalize, normalize_range,
    translate_range, EPSILON, TOLERANCE,
};

// string
pub(crate) use string::{format_hex, parse_hex};
