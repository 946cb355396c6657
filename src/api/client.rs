// file: src/api/client.rs
// description: HTTP client for the /search and /download/{format} endpoints
// reference: https://docs.rs/reqwest

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::exporter::ExportFormat;
use crate::models::{Query, SearchRequest, SearchResponse};
use crate::utils::RequestTimer;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Remote side of the search client. `HttpSearchApi` talks to the real
/// service; tests substitute their own.
pub trait SearchApi {
    fn search(&self, query: &Query) -> impl Future<Output = Result<SearchResponse>> + Send;

    fn download(
        &self,
        query: &Query,
        format: ExportFormat,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    client: Client,
    base_url: String,
    slow_threshold: Duration,
}

impl HttpSearchApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base().to_string(),
            slow_threshold: config.timeout() / 2,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn download_url(&self, format: ExportFormat) -> String {
        format!("{}/download/{}", self.base_url, format.as_str())
    }

    async fn post_query(&self, url: &str, query: &Query) -> Result<reqwest::Response> {
        debug!("POST {} (query: {:?})", url, query.as_str());
        let timer = RequestTimer::start(url, self.slow_threshold);

        let sent = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&SearchRequest { query })
            .send()
            .await;
        timer.finish();
        let response = sent?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

impl SearchApi for HttpSearchApi {
    async fn search(&self, query: &Query) -> Result<SearchResponse> {
        let url = self.search_url();
        let response = self.post_query(&url, query).await?;

        let body = response.bytes().await?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
                endpoint: url.clone(),
                message: e.to_string(),
            })?;

        debug!("{} returned {} result(s)", url, parsed.results.len());
        Ok(parsed)
    }

    async fn download(&self, query: &Query, format: ExportFormat) -> Result<Vec<u8>> {
        let url = self.download_url(format);
        let response = self.post_query(&url, query).await?;

        let body = response.bytes().await?;
        debug!("{} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
