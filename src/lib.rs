//! # avtonomer
//!
//! Validation and decoding for two vehicle identifier formats: 17-character
//! [ISO 3779](https://www.iso.org/standard/52200.html) Vehicle Identification
//! Numbers and 9-character Russian (GOST) registration plates.
//!
//! Both engines are pure functions over immutable `static` lookup tables,
//! with no I/O and no global state. Malformed input is never a panic:
//! validation failures come back as typed errors whose `Display` output
//! names the violated rule.
//!
//! ## Quick Start
//!
//! ```rust
//! use avtonomer::{Plate, Vin};
//!
//! let vin: Vin = "JH4DC4460SS000830".parse().unwrap();
//! assert_eq!(vin.country(), Some("Japan"));
//!
//! let plate: Plate = "A999AA777".parse().unwrap();
//! assert_eq!(plate.region_code(), 777);
//! assert_eq!(plate.next().as_str(), "A001AB777");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `vin` (default) | VIN validation, checksum, country/zone/year decoding |
//! | `plate` (default) | Plate validation, region decoding, series sequencing |
//! | `all` | Everything |

#[cfg(feature = "vin")]
pub mod vin;

#[cfg(feature = "plate")]
pub mod plate;

// Re-export the engine surfaces at crate root for convenience
#[cfg(feature = "vin")]
pub use crate::vin::*;

#[cfg(feature = "plate")]
pub use crate::plate::*;
