use reqwest::{Method, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{ApiError, Error, ErrorEnvelope, Result},
    form::Form,
    resources::{
        Cards, Charges, Coupons, Customers, InvoiceItems, Invoices, Plans, Subscriptions, Tokens,
    },
};

/// Client for the Stripe v1 API
///
/// Cheap to clone; clones share the underlying connection pool. Each call
/// issues exactly one HTTP request and decodes exactly one response.
///
/// # Example
///
/// ```ignore
/// use tillpoint_sdk::{Client, ClientConfig, ListParams};
///
/// let client = Client::new(ClientConfig::new("sk_test_..."))?;
///
/// let customer = client.customers().retrieve("cus_3DUlLkVEmfp8xR").await?;
/// let plans = client.plans().list(&ListParams::new().with_limit(20)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client, validating the configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }
        Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint {}: {}", config.endpoint, e)))?;

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("tillpoint/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client from `STRIPE_API_KEY` / `STRIPE_API_BASE`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    pub fn charges(&self) -> Charges<'_> {
        Charges::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn invoice_items(&self) -> InvoiceItems<'_> {
        InvoiceItems::new(self)
    }

    /// Build the full URL for an API path (which starts with `/`)
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    /// Issue one request and decode the JSON response into `T`.
    ///
    /// For `GET` and `DELETE` the form travels in the query string; for any
    /// other method it is the form-encoded body. Non-success statuses are
    /// returned as [`Error::Api`] carrying the decoded error body.
    pub async fn query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<&Form>,
    ) -> Result<T> {
        let mut url = self.build_url(path);
        let encoded = match form {
            Some(form) if !form.is_empty() => Some(form.encode()?),
            _ => None,
        };

        let in_query = method == Method::GET || method == Method::DELETE;
        if let (true, Some(query)) = (in_query, encoded.as_ref()) {
            url.push('?');
            url.push_str(query);
        }

        debug!(method = %method, url = %url, "Sending request");

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(&self.config.api_key);

        if let (false, Some(body)) = (in_query, encoded) {
            request = request
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error)
                .unwrap_or_else(|_| ApiError::from_body(body));
            warn!(
                method = %method,
                path = %path,
                status = %status,
                error = %error,
                "Request failed"
            );
            return Err(Error::Api { status, error });
        }

        debug!(method = %method, path = %path, status = %status, "Received response");

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, form: Option<&Form>) -> Result<T> {
        self.query(Method::GET, path, form).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str, form: &Form) -> Result<T> {
        self.query(Method::POST, path, Some(form)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Option<&Form>,
    ) -> Result<T> {
        self.query(Method::DELETE, path, form).await
    }
}
