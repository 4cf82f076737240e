use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Currency;

/// How long a coupon's discount applies once redeemed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponDuration {
    Forever,
    Once,
    /// For `duration_in_months` billing months
    Repeating,
}

impl CouponDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponDuration::Forever => "forever",
            CouponDuration::Once => "once",
            CouponDuration::Repeating => "repeating",
        }
    }
}

impl std::fmt::Display for CouponDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discount that can be applied to customers
///
/// Exactly one of `percent_off` and `amount_off` is set.
///
/// see https://stripe.com/docs/api#coupon_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub duration: CouponDuration,

    #[serde(default)]
    pub amount_off: Option<u64>,

    /// Currency of `amount_off`
    #[serde(default)]
    pub currency: Option<Currency>,

    #[serde(default)]
    pub percent_off: Option<u32>,

    #[serde(default)]
    pub duration_in_months: Option<u32>,

    #[serde(default)]
    pub max_redemptions: Option<u32>,

    /// Last moment the coupon can be applied to a new customer
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub redeem_by: Option<DateTime<Utc>>,

    #[serde(default)]
    pub times_redeemed: u32,

    pub livemode: bool,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}
