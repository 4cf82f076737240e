//! Credit cards attached to customers, and the offline checks that can be run
//! on a card number before it is ever sent to the API.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by card-number checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardNumberError {
    /// A character of the card number is not an ASCII decimal digit
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Card brands recognized by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    MasterCard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    #[serde(rename = "Diners Club")]
    DinersClub,
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(other)]
    Unknown,
}

impl CardBrand {
    /// Classify a card number by its issuer prefix.
    ///
    /// Prefixes are matched most specific first. Numbers too short to match
    /// any prefix, including the empty string, are [`CardBrand::Unknown`].
    ///
    /// Any `3` prefix outside the American Express and Diners Club ranges is
    /// reported as JCB, except for the `30` range, which only knows
    /// `300`-`305`. The JCB fallback has not been checked against issuer
    /// tables.
    pub fn from_number(number: &str) -> Self {
        let has_prefix = |prefixes: &[&str]| prefixes.iter().any(|p| number.starts_with(p));

        if has_prefix(&["4"]) {
            CardBrand::Visa
        } else if has_prefix(&["51", "52", "53", "54", "55"]) {
            CardBrand::MasterCard
        } else if has_prefix(&["34", "37"]) {
            CardBrand::AmericanExpress
        } else if has_prefix(&["36", "300", "301", "302", "303", "304", "305"]) {
            CardBrand::DinersClub
        } else if has_prefix(&["30"]) {
            CardBrand::Unknown
        } else if has_prefix(&["3", "2131", "1800"]) {
            CardBrand::Jcb
        } else if has_prefix(&["6011"]) {
            CardBrand::Discover
        } else {
            CardBrand::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::MasterCard => "MasterCard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::DinersClub => "Diners Club",
            CardBrand::Discover => "Discover",
            CardBrand::Jcb => "JCB",
            CardBrand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`CardBrand::from_number`]
pub fn card_brand(number: &str) -> CardBrand {
    CardBrand::from_number(number)
}

/// Verify a card number's Luhn (mod 10) checksum.
///
/// Walking from the rightmost digit, every second digit is doubled and 9 is
/// subtracted when the product has two digits. The number passes when the
/// sum of all digits is a multiple of 10. The empty string sums to zero and
/// passes.
///
/// See <https://en.wikipedia.org/wiki/Luhn_algorithm>
pub fn is_luhn_valid(number: &str) -> Result<bool, CardNumberError> {
    let digits = number
        .chars()
        .enumerate()
        .map(|(position, found)| {
            found
                .to_digit(10)
                .ok_or(CardNumberError::InvalidDigit { position, found })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| match (i % 2 == 1, digit * 2) {
            (true, doubled) if doubled > 9 => doubled - 9,
            (true, doubled) => doubled,
            (false, _) => digit,
        })
        .sum();

    Ok(sum % 10 == 0)
}

/// A credit card stored on a customer
///
/// see https://stripe.com/docs/api#card_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,

    /// Cardholder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub brand: CardBrand,

    pub exp_month: u32,
    pub exp_year: u32,
    pub last4: String,

    /// Identifies the card number across customers
    #[serde(default)]
    pub fingerprint: Option<String>,

    /// Two-letter issuing country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,

    /// Result of the billing address checks: pass, fail or unchecked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvc_check: Option<String>,

    /// Owning customer ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}
