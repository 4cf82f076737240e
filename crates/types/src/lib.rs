//! Resource records for the Stripe v1 API, as decoded by `tillpoint-sdk`.
//!
//! Every record mirrors one JSON object of the API. Records are only ever
//! built by decoding a response; the API remains the source of truth for
//! identifiers, statuses and amounts.
//!
//! Amounts are integer counts of the currency's minor unit (cents for USD).
//! Timestamps are Unix seconds on the wire and [`chrono::DateTime<Utc>`]
//! in Rust.
//!
//! The [`card`] module also carries the offline card-number checks
//! ([`is_luhn_valid`] and [`card_brand`]).

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

pub mod card;
pub mod charge;
pub mod coupon;
pub mod currency;
pub mod customer;
pub mod invoice;
pub mod list;
pub mod plan;
pub mod subscription;
pub mod token;

pub use card::{Card, CardBrand, CardNumberError, card_brand, is_luhn_valid};
pub use charge::{Charge, Dispute};
pub use coupon::{Coupon, CouponDuration};
pub use currency::Currency;
pub use customer::{Customer, Discount};
pub use invoice::{Invoice, InvoiceItem, InvoiceLineItem, InvoiceLineType, Period};
pub use list::{DeleteResponse, List};
pub use plan::{Plan, PlanInterval};
pub use subscription::{Subscription, SubscriptionStatus};
pub use token::Token;

/// Free-form key/value pairs attached to a resource, in the order the API
/// returned them
pub type Metadata = IndexMap<String, String>;

/// Deserialize metadata, accepting `null` as an empty map and keeping
/// non-string values as compact JSON text
pub(crate) fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let parsed: Option<IndexMap<String, JsonValue>> = Option::deserialize(deserializer)?;

    parsed
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let string_value = match value {
                JsonValue::String(s) => s,
                _ => serde_json::to_string(&value).map_err(|e| {
                    D::Error::custom(format!("Failed to serialize metadata value: {}", e))
                })?,
            };
            Ok((key, string_value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct WithMetadata {
        #[serde(default, deserialize_with = "deserialize_metadata")]
        metadata: Metadata,
    }

    #[test]
    fn test_metadata_null_is_empty() {
        let parsed: WithMetadata = serde_json::from_str(r#"{"metadata": null}"#).unwrap();
        assert!(parsed.metadata.is_empty());

        let parsed: WithMetadata = serde_json::from_str("{}").unwrap();
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_metadata_keeps_order_and_stringifies() {
        let parsed: WithMetadata =
            serde_json::from_str(r#"{"metadata": {"z": "last", "a": 1, "m": {"k": true}}}"#)
                .unwrap();
        let entries: Vec<(&str, &str)> = parsed
            .metadata
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("z", "last"), ("a", "1"), ("m", r#"{"k":true}"#)]
        );
    }
}
