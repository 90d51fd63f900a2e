pub mod models;

use std::time::Duration;

use thiserror::Error;

use crate::api::models::{CharacterDetail, CharacterPage};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no results for this search")]
    NotFound,

    #[error("error HTTP: {status}")]
    Http { status: u16 },

    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin wrapper around a configured reqwest client for the catalog API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(timeout_seconds: usize, proxy: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("charview/0.1"),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_seconds as u64));

        if let Some(proxy) = proxy {
            let p = reqwest::Proxy::all(proxy).map_err(|source| ApiError::ProxySetup {
                proxy: proxy.to_string(),
                source,
            })?;
            builder = builder.proxy(p);
        }

        let client = builder
            .build()
            .map_err(|source| ApiError::HttpClientBuild { source })?;

        Ok(Self { client })
    }

    /// Fetches one page of list results. A 404 is reported as "no results",
    /// any other non-success status as a generic HTTP failure.
    pub async fn get_page(&self, url: &str) -> Result<CharacterPage, ApiError> {
        let req = self
            .client
            .get(url)
            .build()
            .map_err(|source| ApiError::Transport { source })?;
        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = resp.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound);
            }
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        resp.json::<CharacterPage>()
            .await
            .map_err(|source| ApiError::Decode { source })
    }

    /// Fetches a single full character record by URL. This path carries no
    /// status classification; an error body simply fails to decode.
    pub async fn get_character(&self, url: &str) -> Result<CharacterDetail, ApiError> {
        let req = self
            .client
            .get(url)
            .build()
            .map_err(|source| ApiError::Transport { source })?;
        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|source| ApiError::Transport { source })?;

        resp.json::<CharacterDetail>()
            .await
            .map_err(|source| ApiError::Decode { source })
    }
}
