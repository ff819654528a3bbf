/// # convert: Show a color in every model and its closest named colors
///
/// Usage: `cargo run --example convert -- <name-or-hex> [algorithm]`
///
/// Set `RUST_LOG=colormath=trace` to see the distances computed while
/// matching.
use std::error::Error;
use std::io::{stdout, Write};

use colormath::opt::MatchOptions;
use colormath::{named, ColorKind, ColorValue, ContrastAlgorithm, Rgb};
use tracing_subscriber::EnvFilter;

// ----------------------------------------------------------------------------------------------------------

const KINDS: [ColorKind; 7] = [
    ColorKind::Rgb,
    ColorKind::Hsl,
    ColorKind::Cmyk,
    ColorKind::Grayscale,
    ColorKind::Yiq,
    ColorKind::Xyz,
    ColorKind::Cielab,
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        return Err("usage: convert <name-or-hex> [algorithm]".into());
    };
    let algorithm = match args.next() {
        Some(name) => name.parse::<ContrastAlgorithm>()?,
        None => ContrastAlgorithm::default(),
    };

    let color = named::by_css(&input)
        .ok_or_else(|| format!("{:?} is neither a color name nor a hex color", input))?;
    let value = ColorValue::from(color);

    let mut out = stdout().lock();
    writeln!(out, "{} ({})", input, color.name().unwrap_or("unnamed"))?;
    for kind in KINDS {
        writeln!(out, "  {:<10} {}", kind.name(), value.convert(kind))?;
    }

    let candidates: Vec<Rgb> = named::all()
        .filter(|candidate| candidate.to_24bit() != color.to_24bit())
        .collect();
    let options = MatchOptions::builder().algorithm(algorithm).build();
    let strict = MatchOptions::builder()
        .algorithm(algorithm)
        .just_noticeable()
        .build();

    match color.closest_match_color(&candidates, &options) {
        Some(closest) => writeln!(
            out,
            "closest by {}: {} {} at {:.4}",
            algorithm,
            closest.name().unwrap_or("unnamed"),
            closest.html(),
            color.contrast(closest, algorithm)
        )?,
        None => writeln!(out, "no closest color by {}", algorithm)?,
    }

    let indistinguishable = color.closest_match(&candidates, &strict).is_some();
    writeln!(
        out,
        "just noticeably different from every other named color: {}",
        !indistinguishable
    )?;

    Ok(())
}
