//! Tillpoint SDK
//!
//! Typed async client for the Stripe v1 REST API. Requests are form-encoded,
//! responses are decoded into the records of [`tillpoint_types`], and every
//! failure surfaces as an [`Error`].
//!
//! # Overview
//!
//! - [`Client`] - Authenticated API client, the entry point to every resource
//! - [`ClientConfig`] - API key, endpoint and timeout
//! - [`resources`] - One handle per resource (customers, charges, plans, ...)
//!
//! # Quick Start
//!
//! ## Charging a customer
//!
//! ```ignore
//! use tillpoint_sdk::{ChargeParams, ChargeSource, Client, ClientConfig, types::Currency};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("sk_test_..."))?;
//!
//!     let params = ChargeParams::new(
//!         400,
//!         Currency::Usd,
//!         ChargeSource::Customer("cus_3DUlLkVEmfp8xR".to_string()),
//!     )
//!     .with_description("Order #6735");
//!
//!     let charge = client.charges().create(&params).await?;
//!     println!("Charged {} ({})", charge.amount, charge.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Paging through a list
//!
//! ```ignore
//! use tillpoint_sdk::ListParams;
//!
//! let mut params = ListParams::new().with_limit(100);
//! loop {
//!     let page = client.customers().list(&params).await?;
//!     let last = page.last_id(|c| c.id.as_str()).map(str::to_string);
//!     for customer in page.data.iter() {
//!         println!("{} {:?}", customer.id, customer.email);
//!     }
//!     match (page.has_more, last) {
//!         (true, Some(id)) => params = params.starting_after(id),
//!         _ => break,
//!     }
//! }
//! ```
//!
//! # Errors
//!
//! Error responses from the API are returned as [`Error::Api`] with the
//! HTTP status and the decoded error body. Nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod resources;

pub use tillpoint_types as types;

// Re-export main types at crate root
pub use client::Client;
pub use config::{API_KEY_ENV, ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::{ApiError, Error, Result};
pub use form::{Form, ListParams};
pub use reqwest::Method;
pub use resources::{
    CardParams, CardSource, ChargeParams, ChargeSource, CouponDiscount, CouponParams,
    CustomerParams, InvoiceItemParams, InvoiceItemUpdateParams, PlanParams, PlanUpdateParams,
    SubscriptionParams, TokenParams,
};
