use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Discount, Plan};

/// Lifecycle state of a subscription, as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's recurring charge on a plan
///
/// see https://stripe.com/docs/api#subscription_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub customer: String,
    pub status: SubscriptionStatus,

    #[serde(default)]
    pub plan: Option<Plan>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub current_period_start: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub current_period_end: DateTime<Utc>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,

    /// Cancelled, but still active until the end of the current period
    #[serde(default)]
    pub cancel_at_period_end: bool,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

fn default_quantity() -> u32 {
    1
}
