use avtonomer::vin::*;

fn main() {
    let vins = [
        "JH4DC4460SS000830", // Japan, check digit 0
        "1M8GDM9AXKP042788", // USA, check digit X
        "WAUZZZ8V4KA123456", // Germany
        "XTA210990Y2836327", // USSR/CIS
        "JH4DC4460SS000831", // checksum mismatch
        "JH4DC4460SS00083",  // wrong length
    ];

    for vin in vins {
        println!("{vin}");
        match validate_vin(vin) {
            Ok(()) => println!("  valid"),
            Err(err) => println!("  invalid: {err}"),
        }

        let country = vin_country(vin).unwrap_or("Not used");
        let zone = vin_geo_zone(vin).map_or("Not used", GeoZone::name);
        println!("  country:    {country}");
        println!("  zone:       {zone}");
        match vin_model_year(vin) {
            Some(year) => println!("  model year: {year}"),
            None => println!("  model year: unknown"),
        }
        println!();
    }

    // The check digit can be computed for any well-formed body.
    let vin = "1M8GDM9AXKP042788";
    let digit = compute_check_digit(vin).expect("well-formed VIN");
    println!("computed check digit for {vin}: '{}'", digit.as_char());
}
