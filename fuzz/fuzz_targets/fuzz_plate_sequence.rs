#![no_main]

use avtonomer::plate::{Plate, PlateSequence, combinations_in_range};
use libfuzzer_sys::fuzz_target;

// Two 9-byte candidates; when both parse, drive the sequencing operations
// on them. Must not panic on any input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    let first = std::str::from_utf8(&data[..9]).ok().and_then(parse);
    let second = std::str::from_utf8(&data[9..18]).ok().and_then(parse);
    let (Some(a), Some(b)) = (first, second) else {
        return;
    };

    let _ = a.next();
    let _ = a.sequence_cmp(&b);
    let _ = a.next_in_range(&b, &b);
    let _ = combinations_in_range(&a, &b);
    if let Some(sequence) = PlateSequence::new(a, b) {
        // Bounded walk; ranges can span millions of plates.
        let _ = sequence.take(64).count();
    }
});

fn parse(s: &str) -> Option<Plate> {
    Plate::parse(s).ok()
}
