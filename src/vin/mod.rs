//! VIN (ISO 3779) validation and decoding.
//!
//! Validates the 17-character structure and the weighted mod-11 checksum,
//! and decodes country of manufacture, geographic zone, and model year.
//! The decoding lookups work on raw strings (only the positions they read
//! need to be present); [`Vin`] is the parse-validated owned form.
//!
//! # Example
//!
//! ```rust
//! use avtonomer::vin::*;
//!
//! assert!(validate_vin("JH4DC4460SS000830").is_ok());
//!
//! let vin: Vin = "19VDE1F75FE004339".parse().unwrap();
//! assert_eq!(vin.country(), Some("USA"));
//! assert_eq!(vin.geo_zone(), Some(GeoZone::NorthAmerica));
//! assert_eq!(vin.model_year(), Some(2015));
//! ```

mod checksum;
mod country;
mod model_year;
mod types;
mod validate;

pub use checksum::{CheckDigit, compute_check_digit};
pub use country::{GeoZone, vin_country, vin_geo_zone};
pub use model_year::vin_model_year;
pub use types::Vin;
pub use validate::{VinError, is_valid_vin, validate_vin};
