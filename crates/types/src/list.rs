use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by every list endpoint and by embedded
/// collections such as a customer's cards or an invoice's lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Total number of objects matching the query, when the API reports it
    #[serde(default)]
    pub total_count: u64,

    /// Whether more objects are available after this page
    #[serde(default)]
    pub has_more: bool,

    /// Objects in the order returned by the API
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            has_more: false,
            data: Vec::new(),
            url: None,
        }
    }
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// ID of the last object on this page, to pass as `starting_after` when
    /// fetching the next one
    pub fn last_id<'a>(&'a self, id: impl Fn(&'a T) -> &'a str) -> Option<&'a str> {
        self.data.last().map(id)
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Response body of every delete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}
