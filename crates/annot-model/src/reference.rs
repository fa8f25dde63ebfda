//! Static country reference data.
//!
//! Maps a country name to its default dialing code and time zone list.
//! The table is embedded, ordered, and never mutated; the first entry is
//! the default country applied when a phone or time column is first
//! configured.

/// One country reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Display name, also the key stored in the configuration document.
    pub name: &'static str,
    /// Default international dialing code, e.g. "+91".
    pub phone_code: &'static str,
    /// IANA time zone names for this country, non-empty.
    pub time_zones: &'static [&'static str],
}

static COUNTRIES: [Country; 5] = [
    Country {
        name: "USA",
        phone_code: "+1",
        time_zones: &[
            "America/New_York",
            "America/Chicago",
            "America/Los_Angeles",
        ],
    },
    Country {
        name: "India",
        phone_code: "+91",
        time_zones: &["Asia/Kolkata"],
    },
    Country {
        name: "UK",
        phone_code: "+44",
        time_zones: &["Europe/London"],
    },
    Country {
        name: "Germany",
        phone_code: "+49",
        time_zones: &["Europe/Berlin"],
    },
    Country {
        name: "Japan",
        phone_code: "+81",
        time_zones: &["Asia/Tokyo"],
    },
];

/// All reference countries in their stable presentation order.
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Look up a country by exact name.
pub fn country(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

/// The default country (first table entry).
pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}
