use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use reqwest::Method;
use reqwest::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::domain::errors::StoreError;

/// HTTP client for the external record store.
///
/// Every call is bounded by the configured deadline and attempted once.
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, anyhow::Error> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid store base url: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Store base url cannot carry paths: {}", config.base_url);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build store client")?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Resolve a collection path plus optional record id against the base url.
    ///
    /// Segments are percent-encoded, so an id can never escape its collection.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a collection and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, StoreError> {
        let response = self.execute(Method::GET, segments, None::<&()>).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| self.map_error(e))
    }

    /// Send a JSON body and discard the answer beyond its status.
    pub async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(), StoreError> {
        self.execute(method, segments, Some(body)).await?;
        Ok(())
    }

    /// DELETE a record.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), StoreError> {
        self.execute(Method::DELETE, segments, None::<&()>).await?;
        Ok(())
    }

    async fn execute<B: Serialize + Sync>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Response, StoreError> {
        let url = self.url(segments);
        tracing::debug!(method = %method, url = %url, "Calling store");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Store rejected request"
            );
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    fn map_error(&self, error: reqwest::Error) -> StoreError {
        if error.is_timeout() {
            StoreError::Timeout(self.timeout.as_millis() as u64)
        } else if error.is_decode() {
            StoreError::Decode(error.to_string())
        } else {
            StoreError::Transport(error.to_string())
        }
    }
}
