use tillpoint_types::{Currency, DeleteResponse, List, Metadata, Plan, PlanInterval};

use super::encode_id;
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Fields for creating a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanParams {
    /// Caller-chosen identifier, e.g. `gold`
    pub id: String,
    /// Display name shown on invoices
    pub name: String,
    pub amount: u64,
    pub currency: Currency,
    pub interval: PlanInterval,
    /// Number of intervals between billings; only sent when above 1
    pub interval_count: u32,
    pub trial_period_days: Option<u32>,
    pub statement_description: Option<String>,
    pub metadata: Metadata,
}

impl PlanParams {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: u64,
        currency: Currency,
        interval: PlanInterval,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            currency,
            interval,
            interval_count: 1,
            trial_period_days: None,
            statement_description: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_interval_count(mut self, interval_count: u32) -> Self {
        self.interval_count = interval_count;
        self
    }

    pub fn with_trial_period_days(mut self, days: u32) -> Self {
        self.trial_period_days = Some(days);
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push("id", &self.id)
            .push("name", &self.name)
            .push("amount", self.amount)
            .push("currency", &self.currency)
            .push("interval", self.interval)
            .push_opt(
                "interval_count",
                Some(self.interval_count).filter(|count| *count > 1),
            )
            .push_opt("trial_period_days", self.trial_period_days)
            .push_str("statement_description", self.statement_description.as_deref())
            .push_metadata(&self.metadata);
        form
    }
}

/// The fields of a plan that can change after creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanUpdateParams {
    pub name: Option<String>,
    pub statement_description: Option<String>,
    pub metadata: Metadata,
}

impl PlanUpdateParams {
    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_str("name", self.name.as_deref())
            .push_str("statement_description", self.statement_description.as_deref())
            .push_metadata(&self.metadata);
        form
    }
}

/// Recurring pricing plans
pub struct Plans<'a> {
    client: &'a Client,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &PlanParams) -> Result<Plan> {
        self.client.post("/plans", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Plan> {
        self.client
            .get(&format!("/plans/{}", encode_id(id)), None)
            .await
    }

    pub async fn update(&self, id: &str, params: &PlanUpdateParams) -> Result<Plan> {
        self.client
            .post(&format!("/plans/{}", encode_id(id)), &params.to_form())
            .await
    }

    /// Delete a plan; existing subscribers keep it
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let response: DeleteResponse = self
            .client
            .delete(&format!("/plans/{}", encode_id(id)), None)
            .await?;
        Ok(response.deleted)
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Plan>> {
        self.client.get("/plans", Some(&params.to_form())).await
    }
}
