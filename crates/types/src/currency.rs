use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ISO 4217 currency, serialized as the lowercase code the API expects.
///
/// The major currencies have their own variants; any other three-letter code
/// is kept as [`Currency::Other`] so responses in those currencies still
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US Dollar ($)
    Usd,
    /// Euro (€)
    Eur,
    /// British Pound Sterling (UK£)
    Gbp,
    /// Japanese Yen (¥)
    Jpy,
    /// Canadian Dollar (CA$)
    Cad,
    /// Hong Kong Dollar (HK$)
    Hkd,
    /// Chinese Yuan (CN¥)
    Cny,
    /// Australian Dollar (A$)
    Aud,
    /// Any other code, stored lowercase
    Other(String),
}

impl Currency {
    /// The currencies with a dedicated variant
    pub const MAJOR: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Hkd,
        Currency::Cny,
        Currency::Aud,
    ];

    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Jpy => "jpy",
            Currency::Cad => "cad",
            Currency::Hkd => "hkd",
            Currency::Cny => "cny",
            Currency::Aud => "aud",
            Currency::Other(code) => code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    /// Parse a three-letter code, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid currency code: {}", s));
        }
        let lower = s.to_ascii_lowercase();
        Ok(Currency::MAJOR
            .into_iter()
            .find(|c| c.code() == lower)
            .unwrap_or(Currency::Other(lower)))
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
