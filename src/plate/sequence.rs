//! Plate sequencing: succession, ordering, and range arithmetic.
//!
//! The sequence order runs over the 3-letter series tuple (leading letter
//! slowest) and then the vehicle number; the region code does not
//! participate. Plates advance like an odometer: vehicle number 999 rolls
//! over to 001 and steps the series.

use std::cmp::Ordering;

use super::series::{next_series, series_rank};
use super::types::Plate;

/// Vehicle numbers run 001-999 within one series.
const NUMBERS_PER_SERIES: u64 = 999;

impl Plate {
    /// The immediate successor in the issuing sequence.
    ///
    /// Increments the vehicle number; at 999 the number resets to 001 and
    /// the series advances one step. The region code is kept, and the
    /// sequence is cyclic: the plate after `Y999YY` restarts at `A001AA`.
    pub fn next(&self) -> Plate {
        let number = self.number();
        if number < 999 {
            self.with_sequence(self.series_bytes(), number + 1)
        } else {
            self.with_sequence(next_series(self.series_bytes()), 1)
        }
    }

    /// Strict lexicographic sequence order: leading letter, the two series
    /// letters, then the vehicle number.
    ///
    /// The region code does not participate, so `Equal` means "same
    /// sequence position", not plate equality: two plates from different
    /// regions can compare `Equal` while being distinct values.
    pub fn sequence_cmp(&self, other: &Plate) -> Ordering {
        (self.series_bytes(), self.number()).cmp(&(other.series_bytes(), other.number()))
    }

    /// The next plate within an allocated range.
    ///
    /// A plate equal to either bound is returned unchanged (the terminal
    /// case); a plate outside [`start`, `end`] in the sequence order is
    /// exhausted stock and yields `None`; anything else advances by one.
    pub fn next_in_range(&self, start: &Plate, end: &Plate) -> Option<Plate> {
        if self == start || self == end {
            return Some(*self);
        }
        if self.sequence_cmp(start) == Ordering::Less
            || self.sequence_cmp(end) == Ordering::Greater
        {
            return None;
        }
        Some(self.next())
    }

    /// Zero-based position within the region-independent sequence. Callers
    /// must have excluded vehicle number `000`, which has no position.
    fn sequence_index(&self) -> u64 {
        debug_assert!(self.number() >= 1, "counted plates carry numbers 001-999");
        let rank = series_rank(self.series_bytes());
        debug_assert!(rank.is_some(), "validated plate has a legal series");
        rank.unwrap_or(0) * NUMBERS_PER_SERIES + u64::from(self.number().saturating_sub(1))
    }
}

/// Number of plate combinations from `first` through `last` inclusive
/// under the sequence order, on the 001-999 vehicle-number space.
///
/// Region codes are ignored. `None` when `first` orders after `last`, or
/// when either bound carries vehicle number `000`: a `000` plate passes
/// validation but sits outside the counted space (succession never yields
/// one, so it has no sequence position).
pub fn combinations_in_range(first: &Plate, last: &Plate) -> Option<u64> {
    if first.number() == 0 || last.number() == 0 {
        return None;
    }
    if first.sequence_cmp(last) == Ordering::Greater {
        return None;
    }
    Some(last.sequence_index() - first.sequence_index() + 1)
}

/// Iterator over a consecutive, inclusive run of plates.
///
/// Yields the start plate, then each successor, up to and including the
/// plate at the end bound's sequence position. Every yielded plate keeps
/// the start plate's region code.
#[derive(Debug, Clone)]
pub struct PlateSequence {
    upcoming: Option<Plate>,
    end: Plate,
}

impl PlateSequence {
    /// Sequence from `start` through `end`; `None` when `start` orders
    /// after `end` or when either bound carries vehicle number `000`
    /// (outside the counted 001-999 space).
    pub fn new(start: Plate, end: Plate) -> Option<Self> {
        if start.number() == 0 || end.number() == 0 {
            return None;
        }
        if start.sequence_cmp(&end) == Ordering::Greater {
            return None;
        }
        Some(Self {
            upcoming: Some(start),
            end,
        })
    }

    /// The next plate without consuming it.
    pub fn peek(&self) -> Option<Plate> {
        self.upcoming
    }

    /// Exact count of plates still to be yielded.
    pub fn remaining(&self) -> u64 {
        match &self.upcoming {
            Some(plate) => combinations_in_range(plate, &self.end).unwrap_or(0),
            None => 0,
        }
    }
}

impl Iterator for PlateSequence {
    type Item = Plate;

    fn next(&mut self) -> Option<Plate> {
        let current = self.upcoming?;
        self.upcoming = if current.sequence_cmp(&self.end) == Ordering::Equal {
            None
        } else {
            Some(current.next())
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
