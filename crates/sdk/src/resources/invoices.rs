use tillpoint_types::{Invoice, List};

use super::encode_id;
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Invoices, generated by the API from subscriptions and pending items
pub struct Invoices<'a> {
    client: &'a Client,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, id: &str) -> Result<Invoice> {
        self.client
            .get(&format!("/invoices/{}", encode_id(id)), None)
            .await
    }

    /// Preview the customer's next invoice; the result has no id
    pub async fn upcoming(&self, customer_id: &str) -> Result<Invoice> {
        let mut form = Form::new();
        form.push("customer", customer_id);
        self.client.get("/invoices/upcoming", Some(&form)).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Invoice>> {
        self.client.get("/invoices", Some(&params.to_form())).await
    }

    pub async fn list_for_customer(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> Result<List<Invoice>> {
        let mut form = params.to_form();
        form.push("customer", customer_id);
        self.client.get("/invoices", Some(&form)).await
    }
}
