use avtonomer::plate::*;

fn main() {
    // Validation and region decoding
    let samples = ["A999AA100", "K065MT163", "A001AA750", "D999AA100", "A999AA205"];
    for sample in samples {
        match Plate::parse(sample) {
            Ok(plate) => {
                let (lead, second, third) = plate.series();
                println!(
                    "{plate}: number {:03}, series {lead}{second}{third}, region {}",
                    plate.number(),
                    plate.region_code()
                );
            }
            Err(err) => println!("{sample}: {err}"),
        }
    }

    // Walking an allocated range
    let start: Plate = "X996CK777".parse().expect("valid plate");
    let end: Plate = "X003CM777".parse().expect("valid plate");
    let total = combinations_in_range(&start, &end).expect("ordered range");
    println!("\nrange {start}..{end} holds {total} plates:");
    for plate in PlateSequence::new(start, end).expect("ordered range") {
        println!("  {plate}");
    }

    // Issuing against allocated stock
    let issued: Plate = "X998CK777".parse().expect("valid plate");
    match issued.next_in_range(&start, &end) {
        Some(next) => println!("\nafter {issued} comes {next}"),
        None => println!("\nOut of stock"),
    }
    let stray: Plate = "X500CK777".parse().expect("valid plate");
    match stray.next_in_range(&start, &end) {
        Some(next) => println!("after {stray} comes {next}"),
        None => println!("{stray} is outside the range: Out of stock"),
    }
}
