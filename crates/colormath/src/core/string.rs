use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes. It transparently handles
/// single-digit coordinates and an optional leading `#`.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength(digits.len()));
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::UnexpectedCharacters)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the three bytes as six lower-case hexadecimal digits without a
/// leading `#`.
pub(crate) fn format_hex(bytes: [u8; 3]) -> String {
    let [r, g, b] = bytes;
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#cabbed")?, [0xca, 0xbb, 0xed]);
        assert_eq!(parse_hex("cabbed")?, [0xca, 0xbb, 0xed]);
        assert_eq!(parse_hex("#fed")?, [0xff, 0xee, 0xdd]);
        assert_eq!(parse_hex("FED")?, [0xff, 0xee, 0xdd]);
        assert_eq!(parse_hex("  #0a0B0c ")?, [0x0a, 0x0b, 0x0c]);
        Ok(())
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex("#ff"), Err(ColorFormatError::UnexpectedLength(2)));
        assert_eq!(parse_hex("#ffff"), Err(ColorFormatError::UnexpectedLength(4)));
        assert_eq!(parse_hex(""), Err(ColorFormatError::UnexpectedLength(0)));
        assert_eq!(parse_hex("#ffg"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("##fff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([0xca, 0xbb, 0xed]), "cabbed");
        assert_eq!(format_hex([0, 1, 0xff]), "0001ff");
    }
}
