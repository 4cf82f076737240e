use tillpoint_types::{Charge, Currency, List, Metadata};

use super::{CardParams, encode_id};
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// What a charge is paid with; the API needs exactly one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeSource {
    /// Charge the customer's default card
    Customer(String),
    Card(CardParams),
    Token(String),
}

/// Fields for creating a charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeParams {
    /// Amount in the currency's minor unit
    pub amount: u64,
    pub currency: Currency,
    pub source: ChargeSource,
    pub description: Option<String>,
    /// When `Some(false)` the charge is only authorized, to be captured later
    pub capture: Option<bool>,
    pub statement_description: Option<String>,
    pub metadata: Metadata,
}

impl ChargeParams {
    pub fn new(amount: u64, currency: Currency, source: ChargeSource) -> Self {
        Self {
            amount,
            currency,
            source,
            description: None,
            capture: None,
            statement_description: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = Some(capture);
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push("amount", self.amount)
            .push("currency", &self.currency);
        match &self.source {
            ChargeSource::Customer(customer) => {
                form.push("customer", customer);
            }
            ChargeSource::Card(card) => {
                form.push_card(card);
            }
            ChargeSource::Token(token) => {
                form.push("card", token);
            }
        }
        form.push_str("description", self.description.as_deref())
            .push_opt("capture", self.capture)
            .push_str("statement_description", self.statement_description.as_deref())
            .push_metadata(&self.metadata);
        form
    }
}

/// Payments against a card or customer
pub struct Charges<'a> {
    client: &'a Client,
}

impl<'a> Charges<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &ChargeParams) -> Result<Charge> {
        self.client.post("/charges", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Charge> {
        self.client
            .get(&format!("/charges/{}", encode_id(id)), None)
            .await
    }

    /// Refund a charge, fully when `amount` is `None`
    pub async fn refund(&self, id: &str, amount: Option<u64>) -> Result<Charge> {
        let mut form = Form::new();
        form.push_opt("amount", amount);
        self.client
            .post(&format!("/charges/{}/refund", encode_id(id)), &form)
            .await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Charge>> {
        self.client.get("/charges", Some(&params.to_form())).await
    }

    /// Charges made against one customer
    pub async fn list_for_customer(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> Result<List<Charge>> {
        let mut form = params.to_form();
        form.push("customer", customer_id);
        self.client.get("/charges", Some(&form)).await
    }
}
