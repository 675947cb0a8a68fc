//! Russian registration plate validation and sequencing.
//!
//! Validates the 9-character format (letter, 3-digit vehicle number,
//! 2-letter series, 2-3 digit region code with trailing-zero padding),
//! decodes the region, and advances plates through the issuing sequence:
//! the vehicle number is the fast-changing field, and the 3-letter series
//! counts as a base-12 odometer over the twelve legal letters.
//!
//! # Example
//!
//! ```rust
//! use avtonomer::plate::*;
//!
//! let plate: Plate = "A999AA777".parse().unwrap();
//! assert_eq!(plate.region_code(), 777);
//! assert_eq!(plate.next().as_str(), "A001AB777");
//!
//! let start: Plate = "A001AA777".parse().unwrap();
//! let end: Plate = "A005AA777".parse().unwrap();
//! assert_eq!(combinations_in_range(&start, &end), Some(5));
//! ```

mod region;
mod sequence;
mod series;
mod types;
mod validate;

pub use region::{is_known_region_code, is_valid_region_code};
pub use sequence::{PlateSequence, combinations_in_range};
pub use series::SERIES_ALPHABET;
pub use types::Plate;
pub use validate::{PlateError, is_valid_plate, validate_plate};
