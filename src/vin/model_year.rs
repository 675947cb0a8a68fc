//! Model-year decoding from the VIN's tenth character.

/// Index of the model-year code within the VIN.
const MODEL_YEAR_INDEX: usize = 9;

/// Letter year codes in standard order: the code at index `i` means
/// 2010 + `i`. The letters I, O, Q, U, Z are never used as year codes.
const YEAR_CODE_LETTERS: &str = "ABCDEFGHJKLMNPRSTVWXY";

/// First calendar year of the letter cycle (code 'A').
const LETTER_CYCLE_START: i32 = 2010;

/// First calendar year of the digit cycle (code '0').
const DIGIT_CYCLE_START: i32 = 2000;

/// Decode the model year from the character at VIN index 9.
///
/// Letters A-Y map to 2010-2030 and digits 0-9 map to 2000-2009. Single
/// cycle only: the standard reuses codes every 30 years and this decoder
/// does not disambiguate by an in-service date. `None` when the input is
/// shorter than 10 bytes or the code belongs to neither cycle.
///
/// Validation does not constrain the year-code position, so run
/// [`validate_vin`](super::validate_vin) first and treat `None` as an
/// unusable code, not as a verdict on the whole VIN.
pub fn vin_model_year(vin: &str) -> Option<i32> {
    let code = *vin.as_bytes().get(MODEL_YEAR_INDEX)? as char;
    match code {
        '0'..='9' => Some(DIGIT_CYCLE_START + i32::from(code as u8 - b'0')),
        _ => YEAR_CODE_LETTERS
            .find(code)
            .map(|index| LETTER_CYCLE_START + index as i32),
    }
}
