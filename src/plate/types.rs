//! Owned, parse-validated registration plate value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::region::decode_region;
use super::validate::{PlateError, validate_plate};

/// A validated 9-character registration plate.
///
/// Construction goes through [`Plate::parse`] (or `FromStr`), which applies
/// the full [`validate_plate`] rule chain, so every value of this type has
/// the letter/digit shape, the legal letter alphabet, and a known region
/// code. Serializes as its plain string form; deserialization revalidates.
///
/// Equality covers all nine characters, region included. The sequencing
/// operations ([`Plate::next`], [`Plate::sequence_cmp`]) deliberately
/// ignore the region, which is why `Plate` offers `sequence_cmp` instead
/// of an `Ord` implementation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate([u8; 9]);

impl Plate {
    /// Parse and validate a registration plate.
    pub fn parse(plate: &str) -> Result<Self, PlateError> {
        validate_plate(plate)?;
        let mut bytes = [0u8; 9];
        bytes.copy_from_slice(plate.as_bytes());
        Ok(Self(bytes))
    }

    /// The plate as a string slice.
    pub fn as_str(&self) -> &str {
        // Validation admits ASCII only.
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    /// The vehicle number, positions 1-3.
    pub fn number(&self) -> u16 {
        let digit = |i: usize| u16::from(self.0[i] - b'0');
        digit(1) * 100 + digit(2) * 10 + digit(3)
    }

    /// The three series letters: leading letter, then positions 4 and 5.
    pub fn series(&self) -> (char, char, char) {
        (self.0[0] as char, self.0[4] as char, self.0[5] as char)
    }

    /// The decoded region code (trailing-zero padding resolved).
    pub fn region_code(&self) -> u16 {
        decode_region([self.0[6], self.0[7], self.0[8]])
    }

    /// Series letters in sequence-significance order.
    pub(crate) fn series_bytes(&self) -> [u8; 3] {
        [self.0[0], self.0[4], self.0[5]]
    }

    /// Rebuild the plate with a new series and vehicle number, keeping the
    /// region digits.
    pub(crate) fn with_sequence(&self, series: [u8; 3], number: u16) -> Plate {
        debug_assert!(number <= 999, "vehicle number out of range");
        let mut bytes = self.0;
        bytes[0] = series[0];
        bytes[4] = series[1];
        bytes[5] = series[2];
        bytes[1] = b'0' + (number / 100) as u8;
        bytes[2] = b'0' + (number / 10 % 10) as u8;
        bytes[3] = b'0' + (number % 10) as u8;
        Plate(bytes)
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Plate {
    type Error = PlateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.as_str().to_owned()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plate").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        let plate = Plate::parse("A123BC777").unwrap();
        assert_eq!(plate.as_str(), "A123BC777");
        assert_eq!(plate.to_string(), "A123BC777");
        assert_eq!(format!("{plate:?}"), "Plate(\"A123BC777\")");
    }

    #[test]
    fn parse_rejects_what_validation_rejects() {
        assert_eq!(
            Plate::parse("A123BC77"),
            Err(PlateError::InvalidLength { len: 8 })
        );
        assert!("Z123BC777".parse::<Plate>().is_err());
    }

    #[test]
    fn accessors() {
        let plate: Plate = "K065MT163".parse().unwrap();
        assert_eq!(plate.number(), 65);
        assert_eq!(plate.series(), ('K', 'M', 'T'));
        assert_eq!(plate.region_code(), 163);

        let padded: Plate = "A001AA630".parse().unwrap();
        assert_eq!(padded.region_code(), 63);
        let single: Plate = "A001AA090".parse().unwrap();
        assert_eq!(single.region_code(), 9);
    }

    #[test]
    fn equality_includes_the_region() {
        let a: Plate = "A123BC777".parse().unwrap();
        let b: Plate = "A123BC750".parse().unwrap();
        assert_ne!(a, b);
        assert_eq!(a, "A123BC777".parse().unwrap());
    }

    #[test]
    fn serde_as_string() {
        let plate: Plate = "A999AA100".parse().unwrap();
        let json = serde_json::to_string(&plate).unwrap();
        assert_eq!(json, "\"A999AA100\"");
        let back: Plate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plate);
    }

    #[test]
    fn serde_revalidates() {
        assert!(serde_json::from_str::<Plate>("\"A999AA000\"").is_err());
        assert!(serde_json::from_str::<Plate>("\"D999AA100\"").is_err());
    }
}
