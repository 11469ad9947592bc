//! HTTP client for the third-party REST API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::{PostRecord, UserRecord};
use crate::error::{PostgraphError, Result};

/// Client for the user/post REST API.
///
/// All endpoint paths are resolved against the configured base URL. One
/// client instance is shared by ingestion and verification so both read the
/// same source.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client with the given base URL and request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should not happen in
    /// normal operation)
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Resolve a resource path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PostgraphError::Config(format!("Invalid endpoint path {path}: {e}")))
    }

    /// Fetch every record of one resource and decode the JSON array.
    async fn fetch_resource<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = self.endpoint(resource)?;
        log::debug!("GET {url}");

        let records = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        Ok(records)
    }

    /// Fetch all user records from `/users`.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.fetch_resource("users").await
    }

    /// Fetch all post records from `/posts`.
    pub async fn fetch_posts(&self) -> Result<Vec<PostRecord>> {
        self.fetch_resource("posts").await
    }
}
