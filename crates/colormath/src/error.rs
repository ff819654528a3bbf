//! Utility module with colormath's errors.
//!
//! Out-of-range coordinates are never errors. Every constructor clamps them
//! instead. The errors in this module cover malformed textual input only.

use thiserror::Error;

/// An erroneous color format.
///
/// Only hexadecimal colors are parsed. They consist of three or six
/// hexadecimal digits with an optional leading `#`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with characters other than hexadecimal digits after the
    /// optional `#`. For example, `#💩00` has the correct length but contains
    /// an unsuitable character.
    #[error("color format should contain only hexadecimal digits")]
    UnexpectedCharacters,

    /// A color format with the wrong number of hexadecimal digits. For
    /// example, `#00` is missing a digit.
    #[error("color format should have 3 or 6 hexadecimal digits but has {0}")]
    UnexpectedLength(usize),
}

// ====================================================================================================================

/// An invalid argument.
///
/// These errors result from parsing the names of algorithms and parameters.
/// They carry the offending name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// An unknown contrast algorithm. Valid names are `naive`, `delta_e94`,
    /// and `delta_e2000`.
    #[error("contrast algorithm should be naive, delta_e94, or delta_e2000 but is {0:?}")]
    UnknownAlgorithm(String),

    /// Unknown ΔE*94 weights. Valid names are `graphic_arts` and `textiles`.
    #[error("ΔE*94 weights should be graphic_arts or textiles but are {0:?}")]
    UnknownWeights(String),

    /// An unknown reference white. Valid names are `d65` and `d50`.
    #[error("reference white should be d65 or d50 but is {0:?}")]
    UnknownWhitePoint(String),

    /// An unknown threshold. Valid thresholds are `jnd`, `just_noticeable`,
    /// or a non-negative decimal number.
    #[error("threshold should be jnd, just_noticeable, or a non-negative number but is {0:?}")]
    UnknownThreshold(String),
}

// ====================================================================================================================

/// Any error raised by this crate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A malformed color string.
    #[error(transparent)]
    Format(#[from] ColorFormatError),

    /// An unrecognized argument.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorFormatError::UnexpectedLength(2).to_string(),
            "color format should have 3 or 6 hexadecimal digits but has 2"
        );
        assert_eq!(
            ArgumentError::UnknownAlgorithm("cie76".to_string()).to_string(),
            "contrast algorithm should be naive, delta_e94, or delta_e2000 but is \"cie76\""
        );

        let error: ColorError = ColorFormatError::UnexpectedCharacters.into();
        assert_eq!(
            error.to_string(),
            "color format should contain only hexadecimal digits"
        );
    }
}
