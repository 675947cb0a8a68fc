//! Region-code decoding and the table of issued three-digit codes.

/// Decode the region field at plate positions 6-8.
///
/// The field is right-justified with trailing `0` padding when only two
/// digits are meaningful: a `0` in the last position selects the two-digit
/// code at positions 6-7, or the single digit at position 7 when position
/// 6 is `0` as well. Any other last digit selects the full three-digit
/// code. Codes whose own last digit is `0` (150, 190, 750) are therefore
/// indistinguishable from their padded two-digit forms and decode to the
/// two-digit prefix.
pub(crate) fn decode_region(digits: [u8; 3]) -> u16 {
    debug_assert!(
        digits.iter().all(u8::is_ascii_digit),
        "region field must hold ASCII digits"
    );
    let [first, second, last] = digits.map(|d| u16::from(d.wrapping_sub(b'0')));
    if last == 0 {
        if first == 0 { second } else { first * 10 + second }
    } else {
        first * 100 + second * 10 + last
    }
}

/// Whether `code` is a valid plate region: 1-99, or an issued three-digit
/// code from the table.
pub fn is_valid_region_code(code: u16) -> bool {
    (1..=99).contains(&code) || is_known_region_code(code)
}

/// Whether `code` is one of the issued three-digit region codes.
pub fn is_known_region_code(code: u16) -> bool {
    REGION_CODES.binary_search(&code).is_ok()
}

/// Issued three-digit region codes (30 entries). Sorted for binary search.
static REGION_CODES: &[u16] = &[
    102, 111, 113, 116, 121, 123, 124, 125, 126, 134, 136, 138, 142, 150, 152,
    159, 161, 163, 164, 173, 174, 177, 178, 186, 190, 196, 197, 199, 750, 777,
];
