use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Currency, Discount, List, Metadata, Plan, deserialize_metadata};

/// What a customer owes for one billing period: subscriptions, invoice
/// items and any proration adjustments
///
/// see https://stripe.com/docs/api#invoice_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Absent on the upcoming invoice, which has not been created yet
    #[serde(default)]
    pub id: Option<String>,

    /// Negative when the customer's credit exceeds the total
    pub amount_due: i64,

    #[serde(default)]
    pub attempt_count: u32,
    #[serde(default)]
    pub attempted: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub paid: bool,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_end: DateTime<Utc>,

    pub subtotal: i64,
    pub total: i64,
    pub currency: Currency,

    /// Charge that paid this invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,

    pub customer: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,

    #[serde(default)]
    pub lines: List<InvoiceLineItem>,

    #[serde(default)]
    pub starting_balance: i64,

    /// Unset until the invoice is closed
    #[serde(default)]
    pub ending_balance: Option<i64>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub next_payment_attempt: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<u64>,

    pub livemode: bool,
}

/// Source of an invoice line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceLineType {
    #[serde(rename = "invoiceitem")]
    InvoiceItem,
    Subscription,
}

/// One line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: String,
    pub livemode: bool,
    pub amount: i64,
    pub currency: Currency,
    pub period: Period,

    #[serde(default)]
    pub proration: bool,

    #[serde(rename = "type")]
    pub line_type: InvoiceLineType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,

    /// Set on subscription lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,

    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Time span covered by an invoice line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
}

/// A charge (or, with a negative amount, a credit) added to a customer's
/// next invoice
///
/// see https://stripe.com/docs/api#invoiceitem_object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: String,
    pub amount: i64,
    pub currency: Currency,
    pub customer: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Set once the item has been attached to an invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,

    #[serde(default)]
    pub proration: bool,

    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,

    pub livemode: bool,
}
