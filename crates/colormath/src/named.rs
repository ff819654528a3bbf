//! The CSS named colors.
//!
//! The table also includes two long-standing extras, `carnation` and
//! `cayenne`, as well as a second, smaller table of metallic colors. Lookups
//! consult the CSS table before the metallic one, so `silver` is the CSS
//! color and the metallic silver is only available through [`metallic`].
//!
//! Each entry is an [`Rgb`] color carrying its lowercase names, with aliases
//! such as `gray` and `grey` sharing one entry. Lookup by name ignores case
//! as well as spaces, underscores, and hyphens, so `Alice Blue`, `alice_blue`,
//! and `aliceblue` all denote the same color.
//!
//! ```
//! # use colormath::named;
//! # use colormath::named::Extract;
//! let green = named::by_name("Green").unwrap();
//! assert_eq!(green.html(), "#008000");
//! assert_eq!(green.name(), Some("green"));
//!
//! let cyan = named::by_hex("#0ff").unwrap();
//! assert_eq!(cyan.names(), &["aqua", "cyan"]);
//!
//! assert!(named::by_css("not a color").is_none());
//!
//! let found = named::extract_colors("a red rose and a #0000ff sky", Extract::Both);
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[1].name(), Some("blue"));
//! ```

use crate::core::parse_hex;
use crate::Rgb;

type Entry = (&'static [&'static str], [u8; 3]);

static NAMED_COLORS: [Entry; 144] = [
    (&["aliceblue"], [0xf0, 0xf8, 0xff]),
    (&["antiquewhite"], [0xfa, 0xeb, 0xd7]),
    (&["aqua", "cyan"], [0x00, 0xff, 0xff]),
    (&["aquamarine"], [0x7f, 0xff, 0xd4]),
    (&["azure"], [0xf0, 0xff, 0xff]),
    (&["beige"], [0xf5, 0xf5, 0xdc]),
    (&["bisque"], [0xff, 0xe4, 0xc4]),
    (&["black"], [0x00, 0x00, 0x00]),
    (&["blanchedalmond"], [0xff, 0xeb, 0xcd]),
    (&["blue"], [0x00, 0x00, 0xff]),
    (&["blueviolet"], [0x8a, 0x2b, 0xe2]),
    (&["brown"], [0xa5, 0x2a, 0x2a]),
    (&["burlywood"], [0xde, 0xb8, 0x87]),
    (&["cadetblue"], [0x5f, 0x9e, 0xa0]),
    (&["carnation"], [0xff, 0x5e, 0xd0]),
    (&["cayenne"], [0x8d, 0x00, 0x00]),
    (&["chartreuse"], [0x7f, 0xff, 0x00]),
    (&["chocolate"], [0xd2, 0x69, 0x1e]),
    (&["coral"], [0xff, 0x7f, 0x50]),
    (&["cornflowerblue"], [0x64, 0x95, 0xed]),
    (&["cornsilk"], [0xff, 0xf8, 0xdc]),
    (&["crimson"], [0xdc, 0x14, 0x3c]),
    (&["darkblue"], [0x00, 0x00, 0x8b]),
    (&["darkcyan"], [0x00, 0x8b, 0x8b]),
    (&["darkgoldenrod"], [0xb8, 0x86, 0x0b]),
    (&["darkgray", "darkgrey"], [0xa9, 0xa9, 0xa9]),
    (&["darkgreen"], [0x00, 0x64, 0x00]),
    (&["darkkhaki"], [0xbd, 0xb7, 0x6b]),
    (&["darkmagenta"], [0x8b, 0x00, 0x8b]),
    (&["darkolivegreen"], [0x55, 0x6b, 0x2f]),
    (&["darkorange"], [0xff, 0x8c, 0x00]),
    (&["darkorchid"], [0x99, 0x32, 0xcc]),
    (&["darkred"], [0x8b, 0x00, 0x00]),
    (&["darksalmon"], [0xe9, 0x96, 0x7a]),
    (&["darkseagreen"], [0x8f, 0xbc, 0x8f]),
    (&["darkslateblue"], [0x48, 0x3d, 0x8b]),
    (&["darkslategray", "darkslategrey"], [0x2f, 0x4f, 0x4f]),
    (&["darkturquoise"], [0x00, 0xce, 0xd1]),
    (&["darkviolet"], [0x94, 0x00, 0xd3]),
    (&["deeppink"], [0xff, 0x14, 0x93]),
    (&["deepskyblue"], [0x00, 0xbf, 0xff]),
    (&["dimgray", "dimgrey"], [0x69, 0x69, 0x69]),
    (&["dodgerblue"], [0x1e, 0x90, 0xff]),
    (&["feldspar"], [0xd1, 0x92, 0x75]),
    (&["firebrick"], [0xb2, 0x22, 0x22]),
    (&["floralwhite"], [0xff, 0xfa, 0xf0]),
    (&["forestgreen"], [0x22, 0x8b, 0x22]),
    (&["fuchsia", "magenta"], [0xff, 0x00, 0xff]),
    (&["gainsboro"], [0xdc, 0xdc, 0xdc]),
    (&["ghostwhite"], [0xf8, 0xf8, 0xff]),
    (&["gold"], [0xff, 0xd7, 0x00]),
    (&["goldenrod"], [0xda, 0xa5, 0x20]),
    (&["gray", "grey"], [0x80, 0x80, 0x80]),
    (&["green"], [0x00, 0x80, 0x00]),
    (&["greenyellow"], [0xad, 0xff, 0x2f]),
    (&["honeydew"], [0xf0, 0xff, 0xf0]),
    (&["hotpink"], [0xff, 0x69, 0xb4]),
    (&["indianred"], [0xcd, 0x5c, 0x5c]),
    (&["indigo"], [0x4b, 0x00, 0x82]),
    (&["ivory"], [0xff, 0xff, 0xf0]),
    (&["khaki"], [0xf0, 0xe6, 0x8c]),
    (&["lavender"], [0xe6, 0xe6, 0xfa]),
    (&["lavenderblush"], [0xff, 0xf0, 0xf5]),
    (&["lawngreen"], [0x7c, 0xfc, 0x00]),
    (&["lemonchiffon"], [0xff, 0xfa, 0xcd]),
    (&["lightblue"], [0xad, 0xd8, 0xe6]),
    (&["lightcoral"], [0xf0, 0x80, 0x80]),
    (&["lightcyan"], [0xe0, 0xff, 0xff]),
    (&["lightgoldenrodyellow"], [0xfa, 0xfa, 0xd2]),
    (&["lightgray", "lightgrey"], [0xd3, 0xd3, 0xd3]),
    (&["lightgreen"], [0x90, 0xee, 0x90]),
    (&["lightpink"], [0xff, 0xb6, 0xc1]),
    (&["lightsalmon"], [0xff, 0xa0, 0x7a]),
    (&["lightseagreen"], [0x20, 0xb2, 0xaa]),
    (&["lightskyblue"], [0x87, 0xce, 0xfa]),
    (&["lightslateblue"], [0x84, 0x70, 0xff]),
    (&["lightslategray", "lightslategrey"], [0x77, 0x88, 0x99]),
    (&["lightsteelblue"], [0xb0, 0xc4, 0xde]),
    (&["lightyellow"], [0xff, 0xff, 0xe0]),
    (&["lime"], [0x00, 0xff, 0x00]),
    (&["limegreen"], [0x32, 0xcd, 0x32]),
    (&["linen"], [0xfa, 0xf0, 0xe6]),
    (&["maroon"], [0x80, 0x00, 0x00]),
    (&["mediumaquamarine"], [0x66, 0xcd, 0xaa]),
    (&["mediumblue"], [0x00, 0x00, 0xcd]),
    (&["mediumorchid"], [0xba, 0x55, 0xd3]),
    (&["mediumpurple"], [0x93, 0x70, 0xdb]),
    (&["mediumseagreen"], [0x3c, 0xb3, 0x71]),
    (&["mediumslateblue"], [0x7b, 0x68, 0xee]),
    (&["mediumspringgreen"], [0x00, 0xfa, 0x9a]),
    (&["mediumturquoise"], [0x48, 0xd1, 0xcc]),
    (&["mediumvioletred"], [0xc7, 0x15, 0x85]),
    (&["midnightblue"], [0x19, 0x19, 0x70]),
    (&["mintcream"], [0xf5, 0xff, 0xfa]),
    (&["mistyrose"], [0xff, 0xe4, 0xe1]),
    (&["moccasin"], [0xff, 0xe4, 0xb5]),
    (&["navajowhite"], [0xff, 0xde, 0xad]),
    (&["navy"], [0x00, 0x00, 0x80]),
    (&["oldlace"], [0xfd, 0xf5, 0xe6]),
    (&["olive"], [0x80, 0x80, 0x00]),
    (&["olivedrab"], [0x6b, 0x8e, 0x23]),
    (&["orange"], [0xff, 0xa5, 0x00]),
    (&["orangered"], [0xff, 0x45, 0x00]),
    (&["orchid"], [0xda, 0x70, 0xd6]),
    (&["palegoldenrod"], [0xee, 0xe8, 0xaa]),
    (&["palegreen"], [0x98, 0xfb, 0x98]),
    (&["paleturquoise"], [0xaf, 0xee, 0xee]),
    (&["palevioletred"], [0xdb, 0x70, 0x93]),
    (&["papayawhip"], [0xff, 0xef, 0xd5]),
    (&["peachpuff"], [0xff, 0xda, 0xb9]),
    (&["peru"], [0xcd, 0x85, 0x3f]),
    (&["pink"], [0xff, 0xc0, 0xcb]),
    (&["plum"], [0xdd, 0xa0, 0xdd]),
    (&["powderblue"], [0xb0, 0xe0, 0xe6]),
    (&["purple"], [0x80, 0x00, 0x80]),
    (&["rebeccapurple"], [0x66, 0x33, 0x99]),
    (&["red"], [0xff, 0x00, 0x00]),
    (&["rosybrown"], [0xbc, 0x8f, 0x8f]),
    (&["royalblue"], [0x41, 0x69, 0xe1]),
    (&["saddlebrown"], [0x8b, 0x45, 0x13]),
    (&["salmon"], [0xfa, 0x80, 0x72]),
    (&["sandybrown"], [0xf4, 0xa4, 0x60]),
    (&["seagreen"], [0x2e, 0x8b, 0x57]),
    (&["seashell"], [0xff, 0xf5, 0xee]),
    (&["sienna"], [0xa0, 0x52, 0x2d]),
    (&["silver"], [0xc0, 0xc0, 0xc0]),
    (&["skyblue"], [0x87, 0xce, 0xeb]),
    (&["slateblue"], [0x6a, 0x5a, 0xcd]),
    (&["slategray", "slategrey"], [0x70, 0x80, 0x90]),
    (&["snow"], [0xff, 0xfa, 0xfa]),
    (&["springgreen"], [0x00, 0xff, 0x7f]),
    (&["steelblue"], [0x46, 0x82, 0xb4]),
    (&["tan"], [0xd2, 0xb4, 0x8c]),
    (&["teal"], [0x00, 0x80, 0x80]),
    (&["thistle"], [0xd8, 0xbf, 0xd8]),
    (&["tomato"], [0xff, 0x63, 0x47]),
    (&["turquoise"], [0x40, 0xe0, 0xd0]),
    (&["violet"], [0xee, 0x82, 0xee]),
    (&["violetred"], [0xd0, 0x20, 0x90]),
    (&["wheat"], [0xf5, 0xde, 0xb3]),
    (&["white"], [0xff, 0xff, 0xff]),
    (&["whitesmoke"], [0xf5, 0xf5, 0xf5]),
    (&["yellow"], [0xff, 0xff, 0x00]),
    (&["yellowgreen"], [0x9a, 0xcd, 0x32]),
];

static METALLIC_COLORS: [Entry; 13] = [
    (&["aluminum"], [0x99, 0x99, 0x99]),
    (&["coolcopper"], [0xd9, 0x87, 0x19]),
    (&["copper"], [0xb8, 0x73, 0x33]),
    (&["iron"], [0x4c, 0x4c, 0x4c]),
    (&["lead"], [0x19, 0x19, 0x19]),
    (&["magnesium"], [0xb3, 0xb3, 0xb3]),
    (&["mercury"], [0xe6, 0xe6, 0xe6]),
    (&["nickel"], [0x80, 0x80, 0x80]),
    (&["poly", "polysilicon"], [0x60, 0x00, 0x00]),
    (&["silver"], [0xcc, 0xcc, 0xcc]),
    (&["steel"], [0x66, 0x66, 0x66]),
    (&["tin"], [0x7f, 0x7f, 0x7f]),
    (&["tungsten"], [0x33, 0x33, 0x33]),
];

/// Iterate over the entries of both tables, CSS colors first.
fn entries() -> impl Iterator<Item = &'static Entry> {
    NAMED_COLORS.iter().chain(METALLIC_COLORS.iter())
}

/// Turn a color name into its lookup key.
fn to_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn to_color(entry: &Entry) -> Rgb {
    Rgb::from(entry.1).with_names(entry.0)
}

/// Get an iterator over all named colors, CSS colors first and metallic
/// colors second.
pub fn all() -> impl Iterator<Item = Rgb> {
    entries().map(to_color)
}

/// Get an iterator over the metallic colors.
pub fn metallic() -> impl Iterator<Item = Rgb> {
    METALLIC_COLORS.iter().map(to_color)
}

/// Look up a named color by name.
pub fn by_name(name: &str) -> Option<Rgb> {
    let key = to_key(name);
    entries()
        .find(|entry| entry.0.contains(&key.as_str()))
        .map(to_color)
}

/// Find the entry with the given 24-bit value.
fn find_value(bytes: [u8; 3]) -> Option<&'static Entry> {
    entries().find(|entry| entry.1 == bytes)
}

/// Look up a color by its hexadecimal representation.
///
/// If the hexadecimal string is malformed, this function returns `None`. If
/// it is well-formed but does not denote a named color, this function returns
/// the unnamed color.
pub fn by_hex(hex: &str) -> Option<Rgb> {
    let bytes = parse_hex(hex).ok()?;
    Some(find_value(bytes).map_or_else(|| Rgb::from(bytes), to_color))
}

/// Look up a color by name first and by hexadecimal representation second.
pub fn by_css(name_or_hex: &str) -> Option<Rgb> {
    by_name(name_or_hex).or_else(|| by_hex(name_or_hex))
}

// --------------------------------------------------------------------------------------------------------------------

/// The kinds of color references recognized by [`extract_colors`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Extract {
    /// Color names such as `red`.
    Name,
    /// Six hexadecimal digits, optionally preceded by `#`, that denote a
    /// named color.
    Hex,
    /// Both names and hexadecimal digits.
    #[default]
    Both,
}

impl Extract {
    const fn names(self) -> bool {
        matches!(self, Self::Name | Self::Both)
    }

    const fn hex(self) -> bool {
        matches!(self, Self::Hex | Self::Both)
    }
}

/// Determine whether the byte continues a word.
fn is_word(byte: Option<&u8>) -> bool {
    byte.is_some_and(|b| b.is_ascii_alphanumeric())
}

/// Match the named color at the start of the bytes, preferring the longest
/// name. Returns the color and the number of bytes consumed.
fn match_name(bytes: &[u8]) -> Option<(Rgb, usize)> {
    let mut best: Option<(&'static Entry, usize)> = None;
    for entry in entries() {
        for name in entry.0 {
            let length = name.len();
            let longer = best.map_or(true, |(_, best_length)| best_length < length);
            if longer && bytes.starts_with(name.as_bytes()) && !is_word(bytes.get(length)) {
                best = Some((entry, length));
            }
        }
    }

    best.map(|(entry, length)| (to_color(entry), length))
}

/// Match six hexadecimal digits denoting a named color at the start of the
/// bytes. Returns the color and the number of bytes consumed.
fn match_hex(bytes: &[u8]) -> Option<(Rgb, usize)> {
    let digits = bytes.get(..6)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) || is_word(bytes.get(6)) {
        return None;
    }

    let text = core::str::from_utf8(digits).ok()?;
    let entry = find_value(parse_hex(text).ok()?)?;
    Some((to_color(entry), 6))
}

/// Extract the named colors mentioned in the text, in order of appearance.
///
/// Matching ignores case. A name or hexadecimal value only matches as a whole
/// word, so `reddish` does not mention red. Hexadecimal values must have six
/// digits and denote a named color. Where both kinds of reference could
/// match, the hexadecimal one wins.
pub fn extract_colors(text: &str, mode: Extract) -> Vec<Rgb> {
    let text = text.to_lowercase();
    let bytes = text.as_bytes();
    let mut colors = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let rest = &bytes[index..];
        let at_word_start = index == 0 || !is_word(bytes.get(index - 1));

        let found = if !at_word_start {
            None
        } else if mode.hex() {
            let digits = rest.strip_prefix(b"#").map_or((rest, 0), |digits| (digits, 1));
            match_hex(digits.0)
                .map(|(color, length)| (color, length + digits.1))
                .or_else(|| mode.names().then(|| match_name(rest)).flatten())
        } else {
            match_name(rest)
        };

        match found {
            Some((color, length)) => {
                colors.push(color);
                index += length;
            }
            None => index += 1,
        }
    }

    colors
}

#[cfg(test)]
mod test {
    use super::{
        all, by_css, by_hex, by_name, extract_colors, metallic, Extract, METALLIC_COLORS,
        NAMED_COLORS,
    };
    use crate::assert_same_color;
    use crate::Rgb;

    #[test]
    fn test_table() {
        assert_eq!(all().count(), NAMED_COLORS.len() + METALLIC_COLORS.len());
        assert_eq!(metallic().count(), METALLIC_COLORS.len());

        for entry in NAMED_COLORS.iter() {
            let names = entry.0;
            assert!(!names.is_empty(), "{:?} has no names", entry.1);
            for name in names {
                assert_eq!(by_name(name).and_then(|c| c.name()), Some(names[0]));
            }
        }

        for (index, entry) in NAMED_COLORS.iter().enumerate() {
            let duplicate = NAMED_COLORS[index + 1..]
                .iter()
                .any(|other| other.1 == entry.1);
            assert!(!duplicate, "{:?} appears twice", entry.1);
        }
    }

    #[test]
    fn test_by_name() {
        assert_same_color!(by_name("red").unwrap(), Rgb::RED);
        assert_same_color!(by_name("Lime").unwrap(), Rgb::LIME);
        assert_eq!(by_name("green").unwrap().to_24bit(), [0x00, 0x80, 0x00]);
        assert_eq!(by_name("Alice Blue").unwrap().html(), "#f0f8ff");
        assert_eq!(by_name("dark_slate-grey").unwrap().html(), "#2f4f4f");
        assert_eq!(by_name("Grey").unwrap().names(), &["gray", "grey"]);
        assert_eq!(by_name("magenta").unwrap().name(), Some("fuchsia"));
        assert!(by_name("no such color").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn test_by_hex() {
        let indigo = by_hex("#4b0082").unwrap();
        assert_eq!(indigo.name(), Some("indigo"));

        let cabbed = by_hex("cabbed").unwrap();
        assert_eq!(cabbed.names().len(), 0);
        assert_eq!(cabbed.html(), "#cabbed");

        assert!(by_hex("#ff00").is_none());
        assert!(by_hex("indigo").is_none());
    }

    #[test]
    fn test_by_css() {
        assert_eq!(by_css("FireBrick").unwrap().html(), "#b22222");
        assert_eq!(by_css("#b22222").unwrap().name(), Some("firebrick"));
        assert_eq!(by_css("fed").unwrap().html(), "#ffeedd");
        assert!(by_css("firebrik").is_none());
    }

    #[test]
    fn test_metallic() {
        assert_eq!(by_name("copper").unwrap().html(), "#b87333");
        assert_eq!(by_name("Cool Copper").unwrap().html(), "#d98719");
        assert_eq!(by_name("Polysilicon").unwrap().name(), Some("poly"));
        assert_eq!(by_hex("#b3b3b3").unwrap().name(), Some("magnesium"));

        // CSS colors shadow metallic colors with the same name or value.
        assert_eq!(by_name("silver").unwrap().html(), "#c0c0c0");
        assert_eq!(by_hex("#808080").unwrap().name(), Some("gray"));

        let silver = metallic().find(|c| c.name() == Some("silver")).unwrap();
        assert_eq!(silver.html(), "#cccccc");
        let nickel = metallic().find(|c| c.name() == Some("nickel")).unwrap();
        assert_eq!(nickel.to_24bit(), [0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_extract_colors() {
        let html = |colors: Vec<Rgb>| colors.iter().map(Rgb::html).collect::<Vec<_>>();
        let text = "Red roses, DarkRed wine, #0000FF skies, and 00ff00 grass.";

        assert_eq!(
            html(extract_colors(text, Extract::Both)),
            ["#ff0000", "#8b0000", "#0000ff", "#00ff00"]
        );
        assert_eq!(
            html(extract_colors(text, Extract::Name)),
            ["#ff0000", "#8b0000"]
        );
        assert_eq!(
            html(extract_colors(text, Extract::Hex)),
            ["#0000ff", "#00ff00"]
        );
        assert_eq!(Extract::default(), Extract::Both);

        // Longest name wins; matches must be whole words.
        let found = extract_colors("lightgoldenrodyellow and goldenrod", Extract::Name);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name(), Some("lightgoldenrodyellow"));
        assert_eq!(found[1].name(), Some("goldenrod"));
        assert!(extract_colors("reddish tangerine", Extract::Both).is_empty());
        assert!(extract_colors("#cabbed 1234567", Extract::Hex).is_empty());

        let found = extract_colors("tin, lead, and aqua", Extract::Name);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].html(), "#7f7f7f");
        assert_eq!(found[2].name(), Some("aqua"));
        assert!(extract_colors("", Extract::Both).is_empty());
    }
}
