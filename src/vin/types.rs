//! Owned, parse-validated VIN value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::CHECK_DIGIT_INDEX;
use super::country::{GeoZone, vin_country, vin_geo_zone};
use super::model_year::vin_model_year;
use super::validate::{VinError, validate_vin};

/// A validated 17-character VIN.
///
/// Construction goes through [`Vin::parse`] (or `FromStr`), which applies
/// the full [`validate_vin`] rule chain, so every value of this type is
/// structurally valid and carries a correct check digit. Serializes as its
/// plain string form; deserialization revalidates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin([u8; 17]);

impl Vin {
    /// Parse and validate a VIN.
    pub fn parse(vin: &str) -> Result<Self, VinError> {
        validate_vin(vin)?;
        let mut bytes = [0u8; 17];
        bytes.copy_from_slice(vin.as_bytes());
        Ok(Self(bytes))
    }

    /// The VIN as a string slice.
    pub fn as_str(&self) -> &str {
        // Validation admits ASCII only.
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    /// World Manufacturer Identifier, the first three characters.
    pub fn wmi(&self) -> &str {
        &self.as_str()[..3]
    }

    /// The declared check digit character at index 8.
    pub fn check_digit(&self) -> char {
        self.0[CHECK_DIGIT_INDEX] as char
    }

    /// Country of manufacture; `None` when the code is not allocated.
    pub fn country(&self) -> Option<&'static str> {
        vin_country(self.as_str())
    }

    /// Continent-level geographic zone of the first character.
    pub fn geo_zone(&self) -> Option<GeoZone> {
        vin_geo_zone(self.as_str())
    }

    /// Model year per the single 2000-2030 code cycle; `None` when the
    /// year-code position holds a character outside both cycles.
    pub fn model_year(&self) -> Option<i32> {
        vin_model_year(self.as_str())
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.as_str().to_owned()
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vin").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        let vin = Vin::parse("JH4DC4460SS000830").unwrap();
        assert_eq!(vin.as_str(), "JH4DC4460SS000830");
        assert_eq!(vin.to_string(), "JH4DC4460SS000830");
        assert_eq!(format!("{vin:?}"), "Vin(\"JH4DC4460SS000830\")");
    }

    #[test]
    fn parse_rejects_what_validation_rejects() {
        assert_eq!(
            Vin::parse("JH4DC4460SS00083"),
            Err(VinError::InvalidLength { len: 16 })
        );
        assert!("JH4DC4460SS000831".parse::<Vin>().is_err());
    }

    #[test]
    fn accessors() {
        let vin: Vin = "JH4DC4460SS000830".parse().unwrap();
        assert_eq!(vin.wmi(), "JH4");
        assert_eq!(vin.check_digit(), '0');
        assert_eq!(vin.country(), Some("Japan"));
        assert_eq!(vin.geo_zone(), Some(GeoZone::Asia));
        assert_eq!(vin.model_year(), Some(2025));
    }

    #[test]
    fn serde_as_string() {
        let vin: Vin = "19VDE1F75FE004339".parse().unwrap();
        let json = serde_json::to_string(&vin).unwrap();
        assert_eq!(json, "\"19VDE1F75FE004339\"");
        let back: Vin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vin);
    }

    #[test]
    fn serde_revalidates() {
        let err = serde_json::from_str::<Vin>("\"19VDE1F75FE004330\"");
        assert!(err.is_err());
    }
}
