use tillpoint_types::{Card, DeleteResponse, List};

use super::encode_id;
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// Raw card details, sent as nested `card[...]` fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardParams {
    pub number: Option<String>,
    pub exp_month: Option<u32>,
    pub exp_year: Option<u32>,
    pub cvc: Option<String>,
    /// Cardholder name
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_zip: Option<String>,
    pub address_state: Option<String>,
    pub address_country: Option<String>,
}

impl CardParams {
    /// Card number and expiry, the minimum the API accepts for a new card
    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: u32) -> Self {
        Self {
            number: Some(number.into()),
            exp_month: Some(exp_month),
            exp_year: Some(exp_year),
            ..Default::default()
        }
    }

    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Where a new card comes from: a token or raw card details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSource {
    Token(String),
    Card(CardParams),
}

impl CardSource {
    pub(crate) fn push_to(&self, form: &mut Form) {
        match self {
            CardSource::Token(token) => {
                form.push("card", token);
            }
            CardSource::Card(card) => {
                form.push_card(card);
            }
        }
    }
}

/// Cards saved on a customer
pub struct Cards<'a> {
    client: &'a Client,
}

impl<'a> Cards<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Attach a new card to a customer
    pub async fn create(&self, customer_id: &str, source: &CardSource) -> Result<Card> {
        let mut form = Form::new();
        source.push_to(&mut form);
        self.client
            .post(&format!("/customers/{}/cards", encode_id(customer_id)), &form)
            .await
    }

    pub async fn retrieve(&self, customer_id: &str, card_id: &str) -> Result<Card> {
        self.client.get(&card_path(customer_id, card_id), None).await
    }

    /// Update the fields that are set; the card number itself cannot change
    pub async fn update(
        &self,
        customer_id: &str,
        card_id: &str,
        params: &CardParams,
    ) -> Result<Card> {
        let mut form = Form::new();
        form.push_card(params);
        self.client
            .post(&card_path(customer_id, card_id), &form)
            .await
    }

    pub async fn delete(&self, customer_id: &str, card_id: &str) -> Result<bool> {
        let response: DeleteResponse = self
            .client
            .delete(&card_path(customer_id, card_id), None)
            .await?;
        Ok(response.deleted)
    }

    pub async fn list(&self, customer_id: &str, params: &ListParams) -> Result<List<Card>> {
        self.client
            .get(
                &format!("/customers/{}/cards", encode_id(customer_id)),
                Some(&params.to_form()),
            )
            .await
    }
}

fn card_path(customer_id: &str, card_id: &str) -> String {
    format!(
        "/customers/{}/cards/{}",
        encode_id(customer_id),
        encode_id(card_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields_are_nested() {
        let source = CardSource::Card(
            CardParams::new("4242424242424242", 12, 2030)
                .with_cvc("123")
                .with_name("Jane Doe"),
        );
        let mut form = Form::new();
        source.push_to(&mut form);

        assert_eq!(
            form.keys().collect::<Vec<_>>(),
            vec![
                "card[number]",
                "card[exp_month]",
                "card[exp_year]",
                "card[name]",
                "card[cvc]"
            ]
        );
        assert_eq!(form.get("card[exp_year]"), Some("2030"));
    }

    #[test]
    fn test_exp_year_sent_without_exp_month() {
        let params = CardParams {
            exp_year: Some(2031),
            ..Default::default()
        };
        let mut form = Form::new();
        form.push_card(&params);
        assert_eq!(form.pairs(), &[("card[exp_year]".to_string(), "2031".to_string())]);
    }

    #[test]
    fn test_token_source() {
        let mut form = Form::new();
        CardSource::Token("tok_103Q2x2eZvKYlo2C".to_string()).push_to(&mut form);
        assert_eq!(form.get("card"), Some("tok_103Q2x2eZvKYlo2C"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_card_path_encodes_ids() {
        assert_eq!(
            card_path("cus_1", "card 2"),
            "/customers/cus_1/cards/card%202"
        );
    }
}
