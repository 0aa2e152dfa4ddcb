//! Content API client
//!
//! One read, fired once at startup: `GET {api_url}/content`. The fetch is
//! fire-and-forget from the shell's perspective - until it resolves the
//! page directory stays `NotLoaded`, and on any failure the console
//! degrades to its static sections without surfacing an error in the
//! scrollback.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use super::{sanitize_pages, ContentDocument};
use crate::error::{Error, Result};
use crate::models::CustomPage;

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    api_url: String,
}

impl ContentClient {
    /// Create a client for the given API base URL
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// The API base URL this client targets
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the custom-page snapshot
    ///
    /// Pages with unaddressable ids are dropped with a warning; the order
    /// of the remaining pages is preserved.
    pub async fn fetch_custom_pages(&self) -> Result<Vec<CustomPage>> {
        let url = format!("{}/content", self.api_url.trim_end_matches('/'));
        debug!("fetching custom pages from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::ContentFetchFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ContentFetchFailed {
                url,
                reason: format!("HTTP {}", status),
            });
        }

        let document: ContentDocument =
            response
                .json()
                .await
                .map_err(|e| Error::ContentDecodeFailed {
                    reason: e.to_string(),
                })?;

        let pages = sanitize_pages(document.custom_pages);
        info!("content API returned {} custom page(s)", pages.len());
        Ok(pages)
    }

    /// Spawn the one-time startup fetch, delivering pages over a channel
    ///
    /// Must be called within a Tokio runtime. On failure nothing is sent:
    /// the directory stays `NotLoaded` and the console runs on its static
    /// sections, per the graceful-degradation contract.
    pub fn spawn_fetch(self, tx: UnboundedSender<Vec<CustomPage>>) {
        tokio::spawn(async move {
            match self.fetch_custom_pages().await {
                Ok(pages) => {
                    if tx.send(pages).is_err() {
                        debug!("page receiver dropped before fetch completed");
                    }
                }
                Err(e) => {
                    warn!("content fetch failed, static sections only: {}", e);
                }
            }
        });
    }
}
