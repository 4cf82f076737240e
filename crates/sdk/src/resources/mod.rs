//! Per-resource handles borrowed from a [`Client`](crate::Client).
//!
//! Each handle is a thin mapping from typed parameters to one request on
//! the shared query primitive.

mod cards;
mod charges;
mod coupons;
mod customers;
mod invoice_items;
mod invoices;
mod plans;
mod subscriptions;
mod tokens;

pub use cards::{CardParams, CardSource, Cards};
pub use charges::{ChargeParams, ChargeSource, Charges};
pub use coupons::{CouponDiscount, CouponParams, Coupons};
pub use customers::{CustomerParams, Customers};
pub use invoice_items::{InvoiceItemParams, InvoiceItemUpdateParams, InvoiceItems};
pub use invoices::Invoices;
pub use plans::{PlanParams, PlanUpdateParams, Plans};
pub use subscriptions::{SubscriptionParams, Subscriptions};
pub use tokens::{TokenParams, Tokens};

/// Percent-encode an identifier for use as a path segment
pub(crate) fn encode_id(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
