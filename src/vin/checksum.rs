//! Weighted mod-11 check digit computation.

/// Index of the check digit within the VIN.
pub(crate) const CHECK_DIGIT_INDEX: usize = 8;

/// Per-position weights for the checksum sum.
///
/// Positions 0-6 descend from 8, position 7 weighs 10, positions 9-16
/// descend from 9. The check digit itself (index 8) carries weight 0, so
/// it never contributes to the sum it is verified against.
const POSITION_WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// A computed check digit: a decimal digit, or `X` standing for 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckDigit {
    /// Remainder 0-9, written as the corresponding digit character.
    Digit(u8),
    /// Remainder 10, written as the letter `X`.
    X,
}

impl CheckDigit {
    /// The character form as it appears at VIN index 8.
    pub fn as_char(self) -> char {
        match self {
            CheckDigit::Digit(d) => (b'0' + d) as char,
            CheckDigit::X => 'X',
        }
    }
}

/// Numeric contribution of one VIN character.
///
/// Digits contribute face value. Letters transliterate in three alphabet
/// runs: A-H to 1-8, J-R to 1-9 (yielding the standard J=1 .. N=5, P=7,
/// R=9 once I, O, Q are excluded), S-Z to 2-9.
pub(crate) fn transliterate(ch: u8) -> Option<u32> {
    match ch {
        b'0'..=b'9' => Some(u32::from(ch - b'0')),
        b'A'..=b'H' => Some(u32::from(ch - b'A' + 1)),
        b'O' | b'Q' => None,
        b'J'..=b'R' => Some(u32::from(ch - b'J' + 1)),
        b'S'..=b'Z' => Some(u32::from(ch - b'S' + 2)),
        _ => None,
    }
}

/// Compute the check digit for a 17-character VIN.
///
/// Sums transliterated character values times position weights over all
/// positions except index 8 (the declared check digit, which is ignored),
/// then reduces mod 11. `None` when the input is not 17 bytes or contains
/// a character with no transliteration value (I, O, Q, lowercase, or any
/// non-alphanumeric byte).
pub fn compute_check_digit(vin: &str) -> Option<CheckDigit> {
    let bytes = vin.as_bytes();
    if bytes.len() != POSITION_WEIGHTS.len() {
        return None;
    }
    let mut sum = 0u32;
    for (position, &ch) in bytes.iter().enumerate() {
        if position == CHECK_DIGIT_INDEX {
            continue;
        }
        sum += transliterate(ch)? * POSITION_WEIGHTS[position];
    }
    Some(match sum % 11 {
        10 => CheckDigit::X,
        d => CheckDigit::Digit(d as u8),
    })
}
