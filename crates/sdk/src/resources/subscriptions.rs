use chrono::{DateTime, Utc};
use tillpoint_types::{List, Subscription};

use super::{CardSource, encode_id};
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Fields for creating or changing a subscription; unset fields are left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionParams {
    pub plan: Option<String>,
    pub coupon: Option<String>,
    /// Whether to prorate when switching plans (the API prorates by default)
    pub prorate: Option<bool>,
    pub trial_end: Option<DateTime<Utc>>,
    pub quantity: Option<u32>,
    pub card: Option<CardSource>,
}

impl SubscriptionParams {
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: Some(plan.into()),
            ..Default::default()
        }
    }

    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn with_prorate(mut self, prorate: bool) -> Self {
        self.prorate = Some(prorate);
        self
    }

    pub fn with_trial_end(mut self, trial_end: DateTime<Utc>) -> Self {
        self.trial_end = Some(trial_end);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_str("plan", self.plan.as_deref())
            .push_str("coupon", self.coupon.as_deref())
            .push_opt("prorate", self.prorate)
            .push_timestamp("trial_end", self.trial_end)
            .push_opt("quantity", self.quantity);
        if let Some(card) = &self.card {
            card.push_to(&mut form);
        }
        form
    }
}

/// A customer's subscriptions to plans
pub struct Subscriptions<'a> {
    client: &'a Client,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        customer_id: &str,
        params: &SubscriptionParams,
    ) -> Result<Subscription> {
        self.client
            .post(
                &format!("/customers/{}/subscriptions", encode_id(customer_id)),
                &params.to_form(),
            )
            .await
    }

    pub async fn retrieve(&self, customer_id: &str, subscription_id: &str) -> Result<Subscription> {
        self.client
            .get(&subscription_path(customer_id, subscription_id), None)
            .await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        subscription_id: &str,
        params: &SubscriptionParams,
    ) -> Result<Subscription> {
        self.client
            .post(
                &subscription_path(customer_id, subscription_id),
                &params.to_form(),
            )
            .await
    }

    /// Cancel a subscription, immediately or at the end of the current period
    pub async fn cancel(
        &self,
        customer_id: &str,
        subscription_id: &str,
        at_period_end: bool,
    ) -> Result<Subscription> {
        self.client
            .delete(
                &subscription_path(customer_id, subscription_id),
                Some(&cancel_form(at_period_end)),
            )
            .await
    }

    pub async fn list(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> Result<List<Subscription>> {
        self.client
            .get(
                &format!("/customers/{}/subscriptions", encode_id(customer_id)),
                Some(&params.to_form()),
            )
            .await
    }
}

fn subscription_path(customer_id: &str, subscription_id: &str) -> String {
    format!(
        "/customers/{}/subscriptions/{}",
        encode_id(customer_id),
        encode_id(subscription_id)
    )
}

fn cancel_form(at_period_end: bool) -> Form {
    let mut form = Form::new();
    if at_period_end {
        form.push("at_period_end", true);
    }
    form
}
