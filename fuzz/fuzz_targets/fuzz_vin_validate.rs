#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = avtonomer::vin::validate_vin(s);
        let _ = avtonomer::vin::compute_check_digit(s);
        let _ = avtonomer::vin::vin_country(s);
        let _ = avtonomer::vin::vin_geo_zone(s);
        let _ = avtonomer::vin::vin_model_year(s);
    }
});
