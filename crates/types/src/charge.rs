use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Card, Currency, Metadata, deserialize_metadata};

/// A charge against a credit card
///
/// see https://stripe.com/docs/api#charge_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub amount: u64,

    #[serde(default)]
    pub card: Option<Card>,

    pub currency: Currency,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,

    pub paid: bool,

    #[serde(default)]
    pub refunded: bool,

    #[serde(default)]
    pub amount_refunded: u64,

    /// False while an uncaptured charge is only authorized
    #[serde(default = "default_captured")]
    pub captured: bool,

    #[serde(default)]
    pub balance_transaction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute: Option<Dispute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,

    pub livemode: bool,
}

fn default_captured() -> bool {
    true
}

/// A chargeback raised by the cardholder's bank against a charge
///
/// see https://stripe.com/docs/api#dispute_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub charge: String,
    pub livemode: bool,
    pub amount: u64,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    pub currency: Currency,

    /// e.g. `duplicate`, `fraudulent`, `product_not_received`
    pub reason: String,

    /// e.g. `needs_response`, `under_review`, `won`, `lost`
    pub status: String,

    #[serde(default)]
    pub balance_transaction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub evidence_due_by: Option<DateTime<Utc>>,

    #[serde(default, rename = "is_protected")]
    pub protected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_disputed_charge() {
        let charge: Charge = serde_json::from_value(serde_json::json!({
            "id": "ch_103DUl2eZvKYlo2C6Y1Og3GV",
            "object": "charge",
            "created": 1389984478,
            "livemode": false,
            "paid": true,
            "amount": 400,
            "currency": "usd",
            "refunded": true,
            "amount_refunded": 100,
            "card": {
                "id": "card_103DUl2eZvKYlo2CfXpy2GMm",
                "last4": "0005",
                "type": "American Express",
                "exp_month": 1,
                "exp_year": 2030
            },
            "captured": true,
            "balance_transaction": "txn_103DUl2eZvKYlo2CkWJNHPuQ",
            "failure_message": null,
            "failure_code": null,
            "customer": null,
            "invoice": null,
            "description": "Charge for test@example.com",
            "dispute": {
                "charge": "ch_103DUl2eZvKYlo2C6Y1Og3GV",
                "amount": 400,
                "created": 1389990000,
                "status": "needs_response",
                "livemode": false,
                "currency": "usd",
                "reason": "general",
                "balance_transaction": "txn_103DUl2eZvKYlo2CkWJNHPuR",
                "evidence": null,
                "evidence_due_by": 1390780799,
                "is_protected": false
            },
            "metadata": {}
        }))
        .unwrap();

        assert_eq!(charge.amount, 400);
        assert_eq!(charge.amount_refunded, 100);
        assert!(charge.refunded);
        assert_eq!(charge.customer, None);
        assert_eq!(
            charge.card.as_ref().map(|c| c.brand),
            Some(crate::CardBrand::AmericanExpress)
        );

        let dispute = charge.dispute.unwrap();
        assert_eq!(dispute.status, "needs_response");
        assert_eq!(
            dispute.evidence_due_by.map(|t| t.timestamp()),
            Some(1390780799)
        );
        assert!(!dispute.protected);
    }

    #[test]
    fn test_uncaptured_flag_defaults_to_captured() {
        let charge: Charge = serde_json::from_value(serde_json::json!({
            "id": "ch_1",
            "created": 1389984478,
            "livemode": false,
            "paid": true,
            "amount": 50,
            "currency": "cad"
        }))
        .unwrap();
        assert!(charge.captured);
        assert!(!charge.refunded);
        assert!(charge.metadata.is_empty());
    }

    #[test]
    fn test_charge_in_unlisted_currency() {
        let charge: Charge = serde_json::from_value(serde_json::json!({
            "id": "ch_1",
            "created": 1389984478,
            "livemode": false,
            "paid": true,
            "amount": 100,
            "currency": "chf"
        }))
        .unwrap();
        assert_eq!(charge.currency, Currency::Other("chf".to_string()));

        let encoded = serde_json::to_value(&charge).unwrap();
        assert_eq!(encoded["currency"], "chf");
        let decoded: Charge = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, charge);
    }
}
