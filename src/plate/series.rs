//! The legal plate letter alphabet and series odometer arithmetic.

/// The twelve letters legal on a plate, sorted: the Latin look-alikes of
/// the Cyrillic letters used on Russian registration plates. Each series
/// position counts through this alphabet like a base-12 digit.
pub const SERIES_ALPHABET: &str = "ABCEHKMOPTXY";

/// Rank of a letter within [`SERIES_ALPHABET`]; `None` for letters outside
/// the legal set.
pub(crate) fn letter_rank(ch: u8) -> Option<usize> {
    SERIES_ALPHABET.as_bytes().binary_search(&ch).ok()
}

/// Whether `ch` is one of the twelve legal plate letters.
pub(crate) fn is_series_letter(ch: u8) -> bool {
    letter_rank(ch).is_some()
}

/// Advance the 3-letter series tuple one step, least-significant letter
/// last. A position past 'Y' (the last legal letter) resets to 'A' and
/// carries into the next slower position; when all three are at 'Y' the
/// whole series wraps to "AAA".
pub(crate) fn next_series(series: [u8; 3]) -> [u8; 3] {
    let alphabet = SERIES_ALPHABET.as_bytes();
    let mut next = series;
    for position in (0..3).rev() {
        let rank = letter_rank(next[position]);
        debug_assert!(rank.is_some(), "series letter outside the legal alphabet");
        let rank = rank.unwrap_or(0);
        if rank + 1 < alphabet.len() {
            next[position] = alphabet[rank + 1];
            return next;
        }
        next[position] = alphabet[0];
    }
    next
}

/// Base-12 value of the series tuple, leading letter most significant.
pub(crate) fn series_rank(series: [u8; 3]) -> Option<u64> {
    let base = SERIES_ALPHABET.len() as u64;
    let mut rank = 0u64;
    for ch in series {
        rank = rank * base + letter_rank(ch)? as u64;
    }
    Some(rank)
}
