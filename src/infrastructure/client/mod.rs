pub mod novels;

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::errors::FetchError;
use crate::infrastructure::cache::{QueryCache, QueryKey};

pub const DEFAULT_API_URL: &str = "https://jj.lbj.moe";

/// Error body shape some upstream deployments return alongside non-2xx codes.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

pub struct JjClient {
    base_url: Url,
    http: Client,
    cache: QueryCache,
}

impl JjClient {
    pub fn new(base_url: Url) -> Result<Self, FetchError> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let http = Client::builder()
            .user_agent(concat!("jjstats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            base_url: normalized,
            http,
            cache: QueryCache::new(),
        })
    }

    pub fn from_base_url(base_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base_url)
            .map_err(|err| FetchError::InvalidUrl(format!("{base_url}: {err}")))?;
        Self::new(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn novels(&self) -> novels::NovelsClient<'_> {
        novels::NovelsClient::new(self)
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|err| FetchError::InvalidUrl(format!("{path}: {err}")))
    }

    /// GET the resource behind `key`, serving it from the cache when an
    /// earlier identical request already succeeded.
    pub(crate) async fn fetch<T>(&self, key: QueryKey) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        if let Some(body) = self.cache.get(&key) {
            debug!(%key, "query cache hit");
            return Ok(serde_json::from_str(&body)?);
        }

        let url = self.endpoint(&key.path())?;
        debug!(%key, %url, "fetching");
        let response = self.http.get(url).send().await?;
        let body = self.handle_response(response).await?;

        let value = serde_json::from_str(&body)?;
        self.cache.insert(key, body);
        Ok(value)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Arc<str>, FetchError> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            debug!(%status, bytes = text.len(), "response received");
            Ok(Arc::from(text))
        } else {
            Err(self.response_error(response).await)
        }
    }

    async fn response_error(&self, response: reqwest::Response) -> FetchError {
        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();

        let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(err) => err.message,
            Err(_) => String::from_utf8_lossy(&bytes).trim().to_string(),
        };
        debug!(%status, %message, "request failed");

        FetchError::Status { status, message }
    }
}
