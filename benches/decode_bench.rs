use criterion::{Criterion, black_box, criterion_group, criterion_main};

use avtonomer::plate::*;
use avtonomer::vin::*;

fn bench_validate_vin(c: &mut Criterion) {
    c.bench_function("validate_vin", |b| {
        b.iter(|| black_box(validate_vin(black_box("JH4DC4460SS000830"))));
    });
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("compute_check_digit", |b| {
        b.iter(|| black_box(compute_check_digit(black_box("1M8GDM9AXKP042788"))));
    });
}

fn bench_country_lookup(c: &mut Criterion) {
    // The allocation table is scanned front to back.
    c.bench_function("vin_country_front_of_table", |b| {
        b.iter(|| black_box(vin_country(black_box("AAK5DD8E1FA123456"))));
    });
    c.bench_function("vin_country_back_of_table", |b| {
        b.iter(|| black_box(vin_country(black_box("93XDC4460SS000830"))));
    });
}

fn bench_full_vin_decode(c: &mut Criterion) {
    c.bench_function("vin_decode_pipeline", |b| {
        b.iter(|| {
            let vin = black_box("WAUZZZ8V4KA123456");
            let valid = validate_vin(vin).is_ok();
            black_box((
                valid,
                vin_country(vin),
                vin_geo_zone(vin),
                vin_model_year(vin),
            ))
        });
    });
}

fn bench_validate_plate(c: &mut Criterion) {
    c.bench_function("validate_plate", |b| {
        b.iter(|| black_box(validate_plate(black_box("K065MT163"))));
    });
}

fn bench_plate_next(c: &mut Criterion) {
    let plate: Plate = "A999YY777".parse().unwrap();
    c.bench_function("plate_next_series_rollover", |b| {
        b.iter(|| black_box(black_box(&plate).next()));
    });
}

fn bench_series_walk(c: &mut Criterion) {
    let start: Plate = "A001AA777".parse().unwrap();
    let end: Plate = "A999AA777".parse().unwrap();
    c.bench_function("plate_walk_full_series", |b| {
        b.iter(|| {
            let seq = PlateSequence::new(black_box(start), black_box(end)).unwrap();
            black_box(seq.count())
        });
    });
}

fn bench_combinations(c: &mut Criterion) {
    let first: Plate = "A001AA777".parse().unwrap();
    let last: Plate = "Y999YY777".parse().unwrap();
    c.bench_function("combinations_whole_space", |b| {
        b.iter(|| black_box(combinations_in_range(black_box(&first), black_box(&last))));
    });
}

criterion_group!(
    benches,
    bench_validate_vin,
    bench_check_digit,
    bench_country_lookup,
    bench_full_vin_decode,
    bench_validate_plate,
    bench_plate_next,
    bench_series_walk,
    bench_combinations,
);
criterion_main!(benches);
