use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Currency, Metadata, deserialize_metadata};

/// Billing frequency of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Month,
    Year,
}

impl PlanInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanInterval::Month => "month",
            PlanInterval::Year => "year",
        }
    }
}

impl std::fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurring pricing for a product or feature level, e.g. $10/month for
/// basic features and $20/month for premium ones
///
/// see https://stripe.com/docs/api#plan_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,

    /// Charged every `interval_count` intervals; 0 for a free plan
    pub amount: u64,

    pub interval: PlanInterval,

    #[serde(default = "default_interval_count")]
    pub interval_count: u32,

    pub currency: Currency,

    #[serde(default)]
    pub trial_period_days: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_description: Option<String>,

    pub livemode: bool,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,
}

fn default_interval_count() -> u32 {
    1
}
