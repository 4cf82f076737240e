use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Card, Coupon, Currency, List, Metadata, Subscription, deserialize_metadata};

/// A customer registered with the API
///
/// see https://stripe.com/docs/api#customer_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    /// Negative is credit, positive is added to the next invoice
    #[serde(default)]
    pub account_balance: i64,

    /// Set once the customer has been charged; absent for new customers
    #[serde(default)]
    pub currency: Option<Currency>,

    /// Whether the latest charge for the customer's subscription failed
    #[serde(default)]
    pub delinquent: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<List<Card>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<List<Subscription>>,

    pub livemode: bool,

    #[serde(default)]
    pub default_card: Option<String>,

    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,
}

/// A coupon applied to a customer or a subscription
///
/// see https://stripe.com/docs/api#discount_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub customer: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,

    /// Absent for coupons that last forever
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,

    pub coupon: Coupon,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardBrand, CouponDuration, SubscriptionStatus};

    #[test]
    fn test_deserialize_customer() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "object": "customer",
            "id": "cus_3DUlLkVEmfp8xR",
            "created": 1389984476,
            "livemode": false,
            "description": "George Costanza",
            "email": "george@vandelay.com",
            "delinquent": false,
            "metadata": {"order": "6735"},
            "subscriptions": {
                "object": "list",
                "total_count": 1,
                "has_more": false,
                "url": "/v1/customers/cus_3DUlLkVEmfp8xR/subscriptions",
                "data": [{
                    "id": "sub_3DUlfkKS5PHeD1",
                    "plan": null,
                    "object": "subscription",
                    "start": 1389984478,
                    "status": "trialing",
                    "customer": "cus_3DUlLkVEmfp8xR",
                    "cancel_at_period_end": false,
                    "current_period_start": 1389984478,
                    "current_period_end": 1390589278,
                    "ended_at": null,
                    "trial_start": 1389984478,
                    "trial_end": 1390589278,
                    "canceled_at": null,
                    "quantity": 1,
                    "discount": null
                }]
            },
            "discount": {
                "object": "discount",
                "customer": "cus_3DUlLkVEmfp8xR",
                "start": 1389984478,
                "end": null,
                "coupon": {
                    "id": "test-coupon-1",
                    "object": "coupon",
                    "created": 1389984000,
                    "percent_off": 25,
                    "amount_off": null,
                    "currency": null,
                    "duration": "forever",
                    "duration_in_months": null,
                    "max_redemptions": null,
                    "redeem_by": null,
                    "times_redeemed": 1,
                    "livemode": false,
                    "valid": true
                }
            },
            "account_balance": -500,
            "currency": "usd",
            "cards": {
                "object": "list",
                "total_count": 1,
                "has_more": false,
                "url": "/v1/customers/cus_3DUlLkVEmfp8xR/cards",
                "data": [{
                    "id": "card_103DUl2eZvKYlo2CfXpy2GMm",
                    "object": "card",
                    "last4": "4242",
                    "type": "Visa",
                    "exp_month": 6,
                    "exp_year": 2027,
                    "fingerprint": "Xt5EWLLDS7FJjR1c",
                    "customer": "cus_3DUlLkVEmfp8xR",
                    "country": "US"
                }]
            },
            "default_card": "card_103DUl2eZvKYlo2CfXpy2GMm"
        }))
        .unwrap();

        assert_eq!(customer.id, "cus_3DUlLkVEmfp8xR");
        assert_eq!(customer.created.timestamp(), 1389984476);
        assert_eq!(customer.account_balance, -500);
        assert_eq!(customer.currency, Some(Currency::Usd));
        assert_eq!(customer.metadata.get("order").map(String::as_str), Some("6735"));

        let cards = customer.cards.as_ref().unwrap();
        assert_eq!(cards.total_count, 1);
        assert_eq!(cards.data[0].brand, CardBrand::Visa);
        assert_eq!(
            customer.default_card.as_deref(),
            Some(cards.data[0].id.as_str())
        );

        let subscriptions = customer.subscriptions.as_ref().unwrap();
        assert_eq!(subscriptions.data[0].status, SubscriptionStatus::Trialing);
        assert!(subscriptions.data[0].plan.is_none());

        let discount = customer.discount.as_ref().unwrap();
        assert_eq!(discount.end, None);
        assert_eq!(discount.coupon.duration, CouponDuration::Forever);
        assert_eq!(discount.coupon.percent_off, Some(25));
    }

    #[test]
    fn test_deserialize_minimal_customer() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": "cus_1", "created": 1389984476, "livemode": true, "metadata": null}"#,
        )
        .unwrap();
        assert_eq!(customer.account_balance, 0);
        assert_eq!(customer.currency, None);
        assert!(customer.cards.is_none());
        assert!(customer.default_card.is_none());
        assert!(customer.metadata.is_empty());
    }

    #[test]
    fn test_created_serializes_as_seconds() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": "cus_1", "created": 1389984476, "livemode": true}"#)
                .unwrap();
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["created"], serde_json::json!(1389984476));
    }
}
