//! Form encoding for request parameters.
//!
//! The API takes `application/x-www-form-urlencoded` parameters. Optional
//! parameters are only added when they are set: an absent field is omitted
//! entirely rather than sent empty, so the API applies its own default.
//! Nested objects use bracketed keys (`card[number]`, `metadata[order]`).

use chrono::{DateTime, Utc};
use tillpoint_types::Metadata;

use crate::{error::Result, resources::CardParams};

/// Ordered list of form key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Add a field only when it is set
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Add a string field only when it is set and non-empty
    pub fn push_str(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        self.push_opt(key, value.filter(|v| !v.is_empty()))
    }

    /// Add a timestamp as Unix seconds, only when it is set
    pub fn push_timestamp(
        &mut self,
        key: impl Into<String>,
        value: Option<DateTime<Utc>>,
    ) -> &mut Self {
        self.push_opt(key, value.map(|t| t.timestamp()))
    }

    /// Add the card fields that are set, as `card[field]=value`
    pub fn push_card(&mut self, card: &CardParams) -> &mut Self {
        self.push_str("card[number]", card.number.as_deref())
            .push_opt("card[exp_month]", card.exp_month)
            .push_opt("card[exp_year]", card.exp_year)
            .push_str("card[name]", card.name.as_deref())
            .push_str("card[cvc]", card.cvc.as_deref())
            .push_str("card[address_line1]", card.address_line1.as_deref())
            .push_str("card[address_line2]", card.address_line2.as_deref())
            .push_str("card[address_zip]", card.address_zip.as_deref())
            .push_str("card[address_state]", card.address_state.as_deref())
            .push_str("card[address_country]", card.address_country.as_deref())
    }

    /// Add every metadata entry as `metadata[key]=value`
    pub fn push_metadata(&mut self, metadata: &Metadata) -> &mut Self {
        for (key, value) in metadata {
            self.push(format!("metadata[{}]", key), value);
        }
        self
    }

    /// Add the pagination fields of a list request
    pub fn push_list(&mut self, params: &ListParams) -> &mut Self {
        self.push_opt("limit", params.limit);
        self.push_str("ending_before", params.ending_before.as_deref());
        self.push_str("starting_after", params.starting_after.as_deref())
    }

    /// First value recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Cursor pagination for list requests
///
/// `ending_before` and `starting_after` take object IDs from a previous page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size, between 1 and 100 (the API defaults to 10)
    pub limit: Option<u32>,
    pub ending_before: Option<String>,
    pub starting_after: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Fetch the page that ends just before the given object
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Fetch the page that starts just after the given object
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_list(self);
        form
    }
}
