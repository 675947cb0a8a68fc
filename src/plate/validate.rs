//! Structural validation for 9-character registration plates.

use thiserror::Error;

use super::region::{decode_region, is_valid_region_code};
use super::series::is_series_letter;

/// Positions holding the three series letters (leading letter plus the
/// pair after the vehicle number).
pub(crate) const LETTER_POSITIONS: [usize; 3] = [0, 4, 5];

/// Error returned when a registration plate fails validation.
///
/// The `Display` form is the diagnostic: a plain description of the first
/// violated rule, not a stable machine-readable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlateError {
    /// The input is not exactly 9 bytes long. Content is not examined.
    #[error("registration plate must be exactly 9 characters, got {len}")]
    InvalidLength {
        /// Byte length of the rejected input.
        len: usize,
    },

    /// A character is not an ASCII digit or uppercase ASCII letter.
    #[error("illegal character '{ch}' at position {position}")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based position within the input.
        position: usize,
    },

    /// A letter outside the twelve-letter legal alphabet.
    #[error("letter '{ch}' at position {position} is never used on a plate")]
    ForbiddenLetter {
        /// The offending letter.
        ch: char,
        /// Zero-based position within the input.
        position: usize,
    },

    /// A letter where the format requires a digit.
    #[error("expected a digit at position {position}")]
    ExpectedDigit {
        /// Zero-based position within the input.
        position: usize,
    },

    /// A digit where the format requires a series letter.
    #[error("expected a letter at position {position}")]
    ExpectedLetter {
        /// Zero-based position within the input.
        position: usize,
    },

    /// The decoded region code is neither 1-99 nor an issued three-digit
    /// code.
    #[error("unknown region code {code}")]
    UnknownRegionCode {
        /// The decoded, unpadded code.
        code: u16,
    },
}

/// Validate a registration plate.
///
/// Rules are applied in order and the first violation is returned: length,
/// character set, the legal letter alphabet, the positional shape (letter,
/// three digits, two letters, three region digits), and finally region-code
/// membership.
pub fn validate_plate(plate: &str) -> Result<(), PlateError> {
    let bytes = plate.as_bytes();
    if bytes.len() != 9 {
        return Err(PlateError::InvalidLength { len: bytes.len() });
    }
    for (position, &ch) in bytes.iter().enumerate() {
        if !ch.is_ascii_digit() && !ch.is_ascii_uppercase() {
            return Err(PlateError::IllegalCharacter {
                ch: ch as char,
                position,
            });
        }
    }
    for (position, &ch) in bytes.iter().enumerate() {
        if ch.is_ascii_uppercase() && !is_series_letter(ch) {
            return Err(PlateError::ForbiddenLetter {
                ch: ch as char,
                position,
            });
        }
    }
    for (position, &ch) in bytes.iter().enumerate() {
        let needs_letter = LETTER_POSITIONS.contains(&position);
        if needs_letter && !ch.is_ascii_uppercase() {
            return Err(PlateError::ExpectedLetter { position });
        }
        if !needs_letter && !ch.is_ascii_digit() {
            return Err(PlateError::ExpectedDigit { position });
        }
    }
    let code = decode_region([bytes[6], bytes[7], bytes[8]]);
    if !is_valid_region_code(code) {
        return Err(PlateError::UnknownRegionCode { code });
    }
    Ok(())
}

/// Boolean form of [`validate_plate`].
pub fn is_valid_plate(plate: &str) -> bool {
    validate_plate(plate).is_ok()
}
