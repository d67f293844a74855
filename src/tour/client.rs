//! HTTP client for the Korea Tourism open API

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::Result;
use crate::config::TourHubConfig;
use crate::error::TourHubError;
use crate::models::TourItem;
use crate::tour::envelope::{TourEnvelope, parse_envelope};
use crate::tour::query::TourQuery;
use crate::tour::source::TourSource;

/// Tour service API client
pub struct TourApiClient {
    client: Client,
    base_url: String,
    service_key: String,
    mobile_os: String,
    mobile_app: String,
    page_size: u32,
}

impl TourApiClient {
    /// Create a new client from configuration
    pub fn new(config: &TourHubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds.into()))
            .user_agent("TourHub/0.1.0")
            .build()
            .map_err(|e| TourHubError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            service_key: config.api.service_key.clone(),
            mobile_os: config.api.mobile_os.clone(),
            mobile_app: config.api.mobile_app.clone(),
            page_size: config.api.page_size,
        })
    }

    /// Build the full request URL for one page of a query
    ///
    /// The service key goes last so logging can elide everything from
    /// `serviceKey=` on.
    fn request_url(&self, query: &TourQuery, page_no: u32, num_of_rows: u32) -> String {
        let mut pairs = query.query_pairs(page_no, num_of_rows);
        pairs.push(("MobileOS", self.mobile_os.clone()));
        pairs.push(("MobileApp", self.mobile_app.clone()));
        pairs.push(("serviceKey", self.service_key.clone()));

        let query_string = pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}/{}?{query_string}",
            self.base_url,
            query.endpoint.path()
        )
    }

    async fn fetch_envelope(
        &self,
        query: &TourQuery,
        page_no: u32,
        num_of_rows: u32,
    ) -> Result<TourEnvelope> {
        let url = self.request_url(query, page_no, num_of_rows);
        debug!(
            "GET {}serviceKey=...",
            url.split("serviceKey=").next().unwrap_or(&url)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TourHubError::transport(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TourHubError::transport(format!(
                "Tour service returned HTTP {status}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TourHubError::transport(format!("Failed to read response body: {e}")))?;
        debug!("raw response body: {text}");

        parse_envelope(&text)
    }
}

#[async_trait]
impl TourSource for TourApiClient {
    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn total_count(&self, query: &TourQuery) -> Result<u32> {
        let envelope = self.fetch_envelope(query, 1, 1).await?;
        info!(
            endpoint = query.endpoint.path(),
            total = envelope.body.total_count,
            "resolved result count"
        );
        Ok(envelope.body.total_count)
    }

    async fn fetch_page(&self, query: &TourQuery, page_no: u32) -> Result<Vec<TourItem>> {
        let envelope = self.fetch_envelope(query, page_no, self.page_size).await?;
        let items = envelope.body.into_items();
        debug!(
            endpoint = query.endpoint.path(),
            page_no,
            count = items.len(),
            "fetched page"
        );
        Ok(items)
    }
}
