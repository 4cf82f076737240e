use chrono::{DateTime, Utc};
use tillpoint_types::{Customer, DeleteResponse, List, Metadata};

use super::{CardSource, encode_id};
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Fields for creating or updating a customer; unset fields are left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerParams {
    pub email: Option<String>,
    pub description: Option<String>,
    pub coupon: Option<String>,
    /// Subscribe the customer to this plan
    pub plan: Option<String>,
    pub quantity: Option<u32>,
    pub trial_end: Option<DateTime<Utc>>,
    /// Sent whenever set, including zero and negative balances
    pub account_balance: Option<i64>,
    pub default_card: Option<String>,
    pub card: Option<CardSource>,
    pub metadata: Metadata,
}

impl CustomerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn with_card(mut self, card: CardSource) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_str("email", self.email.as_deref())
            .push_str("description", self.description.as_deref())
            .push_str("coupon", self.coupon.as_deref())
            .push_str("plan", self.plan.as_deref())
            .push_opt("quantity", self.quantity)
            .push_timestamp("trial_end", self.trial_end)
            .push_opt("account_balance", self.account_balance)
            .push_str("default_card", self.default_card.as_deref());
        if let Some(card) = &self.card {
            card.push_to(&mut form);
        }
        form.push_metadata(&self.metadata);
        form
    }
}

/// Customer records
pub struct Customers<'a> {
    client: &'a Client,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CustomerParams) -> Result<Customer> {
        self.client.post("/customers", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Customer> {
        self.client
            .get(&format!("/customers/{}", encode_id(id)), None)
            .await
    }

    pub async fn update(&self, id: &str, params: &CustomerParams) -> Result<Customer> {
        self.client
            .post(&format!("/customers/{}", encode_id(id)), &params.to_form())
            .await
    }

    /// Delete a customer, cancelling any active subscriptions
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let response: DeleteResponse = self
            .client
            .delete(&format!("/customers/{}", encode_id(id)), None)
            .await?;
        Ok(response.deleted)
    }

    /// Customers, newest first
    pub async fn list(&self, params: &ListParams) -> Result<List<Customer>> {
        self.client
            .get("/customers", Some(&params.to_form()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::resources::CardParams;

    #[test]
    fn test_empty_params_send_nothing() {
        assert!(CustomerParams::new().to_form().is_empty());
    }

    #[test]
    fn test_customer_form() {
        let params = CustomerParams {
            quantity: Some(3),
            trial_end: Some(Utc.with_ymd_and_hms(2014, 1, 17, 18, 47, 58).unwrap()),
            account_balance: Some(0),
            ..CustomerParams::new()
                .with_email("jane@example.com")
                .with_plan("gold")
                .with_card(CardSource::Card(CardParams::new("4242424242424242", 12, 2030)))
                .with_metadata("order", "6735")
        };
        let form = params.to_form();

        assert_eq!(form.get("email"), Some("jane@example.com"));
        assert_eq!(form.get("plan"), Some("gold"));
        assert_eq!(form.get("quantity"), Some("3"));
        assert_eq!(form.get("trial_end"), Some("1389984478"));
        assert_eq!(form.get("account_balance"), Some("0"));
        assert_eq!(form.get("card[number]"), Some("4242424242424242"));
        assert_eq!(form.get("metadata[order]"), Some("6735"));
        assert!(!form.contains_key("description"));
        assert!(!form.contains_key("coupon"));
    }

    #[test]
    fn test_negative_balance() {
        let params = CustomerParams {
            account_balance: Some(-500),
            ..Default::default()
        };
        assert_eq!(params.to_form().get("account_balance"), Some("-500"));
    }
}
