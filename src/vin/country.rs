//! Country-of-manufacture and geographic zone decoding.
//!
//! The first two VIN characters select a country through an ordered table
//! of character ranges; the first character alone fixes the continent-level
//! zone. Characters order as `A < .. < Z < 1 < .. < 9 < 0` within a range,
//! so a `0` upper bound runs to the end of its region letter.

use serde::{Deserialize, Serialize};

/// Continent-level allocation of the first VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoZone {
    /// First character A-H.
    Africa,
    /// First character J-R.
    Asia,
    /// First character S-Z.
    Europe,
    /// First character 1-5.
    NorthAmerica,
    /// First character 6-7.
    Oceania,
    /// First character 8-9.
    SouthAmerica,
}

impl GeoZone {
    /// Human-readable zone name.
    pub fn name(self) -> &'static str {
        match self {
            GeoZone::Africa => "Africa",
            GeoZone::Asia => "Asia",
            GeoZone::Europe => "Europe",
            GeoZone::NorthAmerica => "North America",
            GeoZone::Oceania => "Oceania",
            GeoZone::SouthAmerica => "South America",
        }
    }

    /// Classify a VIN's first character. The digit `0` is unallocated.
    pub fn from_first_char(ch: char) -> Option<Self> {
        match ch {
            'A'..='H' => Some(GeoZone::Africa),
            'J'..='R' => Some(GeoZone::Asia),
            'S'..='Z' => Some(GeoZone::Europe),
            '1'..='5' => Some(GeoZone::NorthAmerica),
            '6' | '7' => Some(GeoZone::Oceania),
            '8' | '9' => Some(GeoZone::SouthAmerica),
            _ => None,
        }
    }
}

/// Country of manufacture for the VIN's first two characters.
///
/// Scans the allocation table in declared order and returns the first
/// matching entry; `None` means the code is not allocated ("Not used").
/// Only the first two characters are examined, so the lookup also works on
/// bare WMI prefixes.
pub fn vin_country(vin: &str) -> Option<&'static str> {
    let bytes = vin.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    lookup(WMI_ALLOCATIONS, bytes[0], bytes[1])
}

/// Continent-level zone of the VIN's first character.
pub fn vin_geo_zone(vin: &str) -> Option<GeoZone> {
    GeoZone::from_first_char(vin.chars().next()?)
}

/// First entry of `table` whose range admits (`region`, `second`).
fn lookup(table: &[(&str, &'static str)], region: u8, second: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(range, _)| range_matches(range, region, second))
        .map(|&(_, country)| country)
}

/// Whether the two-character code (`region`, `second`) falls inside the
/// 5-character pattern `XY-ZW`. A malformed pattern is a table defect:
/// fatal in debug builds, never matching in release.
fn range_matches(pattern: &str, region: u8, second: u8) -> bool {
    let p = pattern.as_bytes();
    let bounds = if p.len() == 5 && p[2] == b'-' && p[0] == p[3] {
        wmi_rank(p[1]).zip(wmi_rank(p[4]))
    } else {
        None
    };
    debug_assert!(bounds.is_some(), "malformed WMI range pattern '{pattern}'");
    let Some((lo, hi)) = bounds else {
        return false;
    };
    region == p[0] && wmi_rank(second).is_some_and(|rank| lo <= rank && rank <= hi)
}

/// Position of `ch` in the WMI character order: letters first, then the
/// digits 1-9, with 0 highest.
fn wmi_rank(ch: u8) -> Option<u8> {
    match ch {
        b'A'..=b'Z' => Some(ch - b'A'),
        b'1'..=b'9' => Some(ch - b'1' + 26),
        b'0' => Some(35),
        _ => None,
    }
}

/// ISO 3779 country allocations in declared precedence order, grouped by
/// geographic zone. 89 entries; codes outside every range are not used.
static WMI_ALLOCATIONS: &[(&str, &'static str)] = &[
    // Africa
    ("AA-AH", "South Africa"),
    ("AJ-AN", "Cote d'Ivoire"),
    ("BA-BE", "Angola"),
    ("BF-BK", "Kenya"),
    ("BL-BR", "Tanzania"),
    ("CA-CE", "Benin"),
    ("CF-CK", "Madagascar"),
    ("CL-CR", "Tunisia"),
    ("DA-DE", "Egypt"),
    ("DF-DK", "Morocco"),
    ("DL-DR", "Zambia"),
    ("EA-EE", "Ethiopia"),
    ("EF-EK", "Mozambique"),
    ("FA-FE", "Ghana"),
    ("FF-FK", "Nigeria"),
    // Asia
    ("JA-J0", "Japan"),
    ("KA-KE", "Sri Lanka"),
    ("KF-KK", "Israel"),
    ("KL-KR", "South Korea"),
    ("KS-K0", "Kazakhstan"),
    ("LA-L0", "China"),
    ("MA-ME", "India"),
    ("MF-MK", "Indonesia"),
    ("ML-MR", "Thailand"),
    ("NA-NE", "Iran"),
    ("NF-NK", "Pakistan"),
    ("NL-NR", "Turkey"),
    ("PA-PE", "Philippines"),
    ("PF-PK", "Singapore"),
    ("PL-PR", "Malaysia"),
    ("RA-RE", "United Arab Emirates"),
    ("RF-RK", "Taiwan"),
    ("RL-RR", "Vietnam"),
    ("RS-R0", "Saudi Arabia"),
    // Europe
    ("SA-SM", "United Kingdom"),
    ("SN-ST", "Germany"),
    ("SU-SZ", "Poland"),
    ("S1-S4", "Latvia"),
    ("TA-TH", "Switzerland"),
    ("TJ-TP", "Czechia"),
    ("TR-TV", "Hungary"),
    ("TW-T1", "Portugal"),
    ("UH-UM", "Denmark"),
    ("UN-UT", "Ireland"),
    ("UU-UZ", "Romania"),
    ("U5-U7", "Slovakia"),
    ("VA-VE", "Austria"),
    ("VF-VR", "France"),
    ("VS-VW", "Spain"),
    ("VX-V2", "Serbia"),
    ("V3-V5", "Croatia"),
    ("V6-V0", "Estonia"),
    ("WA-W0", "Germany"),
    ("XA-XE", "Bulgaria"),
    ("XF-XK", "Greece"),
    ("XL-XR", "Netherlands"),
    ("XS-XW", "USSR/CIS"),
    ("XX-X2", "Luxembourg"),
    ("X3-X0", "Russia"),
    ("YA-YE", "Belgium"),
    ("YF-YK", "Finland"),
    ("YL-YR", "Malta"),
    ("YS-YW", "Sweden"),
    ("YX-Y2", "Norway"),
    ("Y3-Y5", "Belarus"),
    ("Y6-Y0", "Ukraine"),
    ("ZA-ZR", "Italy"),
    ("ZX-Z2", "Slovenia"),
    ("Z3-Z5", "Lithuania"),
    // North America
    ("1A-10", "USA"),
    ("2A-20", "Canada"),
    ("3A-3W", "Mexico"),
    ("3X-37", "Costa Rica"),
    ("38-30", "Cayman Islands"),
    ("4A-40", "USA"),
    ("5A-50", "USA"),
    // Oceania
    ("6A-6W", "Australia"),
    ("7A-7E", "New Zealand"),
    // South America
    ("8A-8E", "Argentina"),
    ("8F-8K", "Chile"),
    ("8L-8R", "Ecuador"),
    ("8S-8W", "Peru"),
    ("8X-82", "Venezuela"),
    ("9A-9E", "Brazil"),
    ("9F-9K", "Colombia"),
    ("9L-9R", "Paraguay"),
    ("9S-9W", "Uruguay"),
    ("9X-92", "Trinidad and Tobago"),
    ("93-99", "Brazil"),
];
