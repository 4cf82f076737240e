use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Card;

/// A single-use stand-in for card details, usable in place of the card in
/// any request that accepts one
///
/// see https://stripe.com/docs/api#token_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,

    #[serde(default)]
    pub card: Option<Card>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    /// Set once the token has been consumed by a charge or a customer
    #[serde(default)]
    pub used: bool,

    pub livemode: bool,
}
