//! Structural and checksum validation for 17-character VINs.

use thiserror::Error;

use super::checksum::{CHECK_DIGIT_INDEX, compute_check_digit};

/// Error returned when a VIN fails validation.
///
/// The `Display` form is the diagnostic: a plain description of the first
/// violated rule, not a stable machine-readable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The input is not exactly 17 bytes long. Content is not examined.
    #[error("VIN must be exactly 17 characters, got {len}")]
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

    /// One of the letters I, O, Q, which never appear in a VIN.
    #[error("letter '{ch}' at position {position} is never used in a VIN")]
    ForbiddenLetter {
        /// The offending letter.
        ch: char,
        /// Zero-based position within the input.
        position: usize,
    },

    /// The character at index 8 is neither a decimal digit nor `X`.
    #[error("check digit must be 0-9 or 'X', got '{ch}'")]
    InvalidCheckDigitSymbol {
        /// The character found at the check-digit position.
        ch: char,
    },

    /// The declared check digit disagrees with the computed checksum.
    #[error("checksum mismatch: computed check digit '{expected}', found '{found}'")]
    ChecksumMismatch {
        /// Character form of the computed checksum.
        expected: char,
        /// Character actually present at index 8.
        found: char,
    },
}

/// Validate a VIN's structure and checksum.
///
/// Rules are applied in order and the first violation is returned: length,
/// character set, the forbidden letters I/O/Q, the check-digit symbol, and
/// finally the weighted mod-11 checksum itself.
pub fn validate_vin(vin: &str) -> Result<(), VinError> {
    let bytes = vin.as_bytes();
    if bytes.len() != 17 {
        return Err(VinError::InvalidLength { len: bytes.len() });
    }
    for (position, &ch) in bytes.iter().enumerate() {
        if !ch.is_ascii_digit() && !ch.is_ascii_uppercase() {
            return Err(VinError::IllegalCharacter {
                ch: ch as char,
                position,
            });
        }
    }
    for (position, &ch) in bytes.iter().enumerate() {
        if matches!(ch, b'I' | b'O' | b'Q') {
            return Err(VinError::ForbiddenLetter {
                ch: ch as char,
                position,
            });
        }
    }
    let found = bytes[CHECK_DIGIT_INDEX];
    if !found.is_ascii_digit() && found != b'X' {
        return Err(VinError::InvalidCheckDigitSymbol { ch: found as char });
    }
    // Every position transliterates once the charset and letter rules have
    // passed, so a missing checksum here is a defect, not an input error.
    let computed = compute_check_digit(vin);
    debug_assert!(computed.is_some(), "charset-checked VIN must transliterate");
    if let Some(digit) = computed {
        let expected = digit.as_char();
        if expected != found as char {
            return Err(VinError::ChecksumMismatch {
                expected,
                found: found as char,
            });
        }
    }
    Ok(())
}

/// Boolean form of [`validate_vin`].
pub fn is_valid_vin(vin: &str) -> bool {
    validate_vin(vin).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_vins() {
        assert!(validate_vin("JH4DC4460SS000830").is_ok());
        assert!(validate_vin("19VDE1F75FE004339").is_ok());
        // Checksum remainder 10, written as 'X'.
        assert!(validate_vin("11111111X21111111").is_ok());
    }

    #[test]
    fn length_is_checked_before_content() {
        assert_eq!(validate_vin(""), Err(VinError::InvalidLength { len: 0 }));
        assert_eq!(
            validate_vin("JH4DC4460SS00083"),
            Err(VinError::InvalidLength { len: 16 })
        );
        assert_eq!(
            validate_vin("JH4DC4460SS0008300"),
            Err(VinError::InvalidLength { len: 18 })
        );
        // Garbage of the wrong length reports the length, nothing else.
        assert_eq!(
            validate_vin("???"),
            Err(VinError::InvalidLength { len: 3 })
        );
    }

    #[test]
    fn charset_violations() {
        assert_eq!(
            validate_vin("JH4DC4460SS00083-"),
            Err(VinError::IllegalCharacter {
                ch: '-',
                position: 16
            })
        );
        assert_eq!(
            validate_vin("jH4DC4460SS000830"),
            Err(VinError::IllegalCharacter {
                ch: 'j',
                position: 0
            })
        );
    }

    #[test]
    fn forbidden_letters_are_rejected_anywhere() {
        for (vin, ch, position) in [
            ("IH4DC4460SS000830", 'I', 0),
            ("JH4DC4460SO000830", 'O', 10),
            ("JH4DC4460SS0008Q0", 'Q', 15),
        ] {
            assert_eq!(
                validate_vin(vin),
                Err(VinError::ForbiddenLetter { ch, position })
            );
        }
    }

    #[test]
    fn check_digit_symbol_is_constrained() {
        assert_eq!(
            validate_vin("JH4DC446ZSS000830"),
            Err(VinError::InvalidCheckDigitSymbol { ch: 'Z' })
        );
        // A forbidden letter at index 8 reports the letter rule first.
        assert_eq!(
            validate_vin("JH4DC446ISS000830"),
            Err(VinError::ForbiddenLetter { ch: 'I', position: 8 })
        );
    }

    #[test]
    fn checksum_mismatch() {
        assert_eq!(
            validate_vin("JH4DC4460SS000831"),
            Err(VinError::ChecksumMismatch {
                expected: '2',
                found: '0'
            })
        );
        // Tampering with the declared digit itself leaves the sum intact.
        assert_eq!(
            validate_vin("JH4DC4461SS000830"),
            Err(VinError::ChecksumMismatch {
                expected: '0',
                found: '1'
            })
        );
    }

    #[test]
    fn multibyte_input_never_panics() {
        // Two-byte UTF-8 character: the byte length rule fires first.
        assert_eq!(
            validate_vin("ЯH4DC4460SS000830"),
            Err(VinError::InvalidLength { len: 18 })
        );
        assert!(validate_vin("ЯH4DC4460SS00083").is_err());
    }

    #[test]
    fn boolean_form() {
        assert!(is_valid_vin("JH4DC4460SS000830"));
        assert!(!is_valid_vin("JH4DC4460SS000831"));
        assert!(!is_valid_vin(""));
    }

    #[test]
    fn diagnostics_name_the_rule() {
        let err = validate_vin("JH4DC4460SS00083").unwrap_err();
        assert_eq!(err.to_string(), "VIN must be exactly 17 characters, got 16");
        let err = validate_vin("IH4DC4460SS000830").unwrap_err();
        assert_eq!(
            err.to_string(),
            "letter 'I' at position 0 is never used in a VIN"
        );
    }
}
