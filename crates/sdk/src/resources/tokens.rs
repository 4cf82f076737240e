use tillpoint_types::Token;

use super::{CardParams, encode_id};
use crate::{client::Client, error::Result, form::Form};

/// Fields for creating a card token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParams {
    pub card: CardParams,
}

impl TokenParams {
    pub fn new(card: CardParams) -> Self {
        Self { card }
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_card(&self.card);
        form
    }
}

/// Single-use card tokens
pub struct Tokens<'a> {
    client: &'a Client,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &TokenParams) -> Result<Token> {
        self.client.post("/tokens", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Token> {
        self.client
            .get(&format!("/tokens/{}", encode_id(id)), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_form() {
        let form = TokenParams::new(CardParams::new("5555555555554444", 6, 2029).with_cvc("321"))
            .to_form();
        assert_eq!(form.get("card[number]"), Some("5555555555554444"));
        assert_eq!(form.get("card[cvc]"), Some("321"));
        assert_eq!(form.len(), 4);
    }
}
