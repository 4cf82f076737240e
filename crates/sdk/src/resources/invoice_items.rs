use tillpoint_types::{Currency, DeleteResponse, InvoiceItem, List, Metadata};

use super::encode_id;
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Fields for adding a one-off item to a customer's next invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceItemParams {
    pub customer: String,
    /// Negative amounts are credits
    pub amount: i64,
    pub currency: Currency,
    pub description: Option<String>,
    /// Attach to this open invoice instead of the next one
    pub invoice: Option<String>,
    pub subscription: Option<String>,
    pub metadata: Metadata,
}

impl InvoiceItemParams {
    pub fn new(customer: impl Into<String>, amount: i64, currency: Currency) -> Self {
        Self {
            customer: customer.into(),
            amount,
            currency,
            description: None,
            invoice: None,
            subscription: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push("customer", &self.customer)
            .push("amount", self.amount)
            .push("currency", &self.currency)
            .push_str("description", self.description.as_deref())
            .push_str("invoice", self.invoice.as_deref())
            .push_str("subscription", self.subscription.as_deref())
            .push_metadata(&self.metadata);
        form
    }
}

/// The fields of an invoice item that can change before it is invoiced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceItemUpdateParams {
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl InvoiceItemUpdateParams {
    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_opt("amount", self.amount)
            .push_str("description", self.description.as_deref())
            .push_metadata(&self.metadata);
        form
    }
}

/// Pending one-off invoice items
pub struct InvoiceItems<'a> {
    client: &'a Client,
}

impl<'a> InvoiceItems<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &InvoiceItemParams) -> Result<InvoiceItem> {
        self.client.post("/invoiceitems", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<InvoiceItem> {
        self.client
            .get(&format!("/invoiceitems/{}", encode_id(id)), None)
            .await
    }

    pub async fn update(&self, id: &str, params: &InvoiceItemUpdateParams) -> Result<InvoiceItem> {
        self.client
            .post(&format!("/invoiceitems/{}", encode_id(id)), &params.to_form())
            .await
    }

    /// Delete an item that is not yet attached to a closed invoice
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let response: DeleteResponse = self
            .client
            .delete(&format!("/invoiceitems/{}", encode_id(id)), None)
            .await?;
        Ok(response.deleted)
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<InvoiceItem>> {
        self.client
            .get("/invoiceitems", Some(&params.to_form()))
            .await
    }

    pub async fn list_for_customer(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> Result<List<InvoiceItem>> {
        let mut form = params.to_form();
        form.push("customer", customer_id);
        self.client.get("/invoiceitems", Some(&form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form() {
        let form = InvoiceItemParams::new("cus_3DUlLkVEmfp8xR", -250, Currency::Usd)
            .with_description("Loyalty credit")
            .to_form();
        assert_eq!(
            form.keys().collect::<Vec<_>>(),
            vec!["customer", "amount", "currency", "description"]
        );
        assert_eq!(form.get("amount"), Some("-250"));
    }

    #[test]
    fn test_update_sends_amount_key() {
        let params = InvoiceItemUpdateParams {
            amount: Some(1200),
            ..Default::default()
        };
        let form = params.to_form();
        assert_eq!(form.get("amount"), Some("1200"));
        assert!(!form.contains_key("invoice"));
    }
}
