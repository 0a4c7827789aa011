// src/utils/http.rs

//! HTTP client utilities.
//!
//! The batch is sequential and blocking: one client is built per run and
//! borrowed by everything that fetches. The [`Fetch`] trait is the seam that
//! lets tests substitute canned documents for live requests.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::HttpConfig;

/// Source of parsed HTML documents.
pub trait Fetch {
    /// Fetch a page and parse it as HTML.
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Live HTTP fetcher backed by a shared blocking client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let text = response.text()?;
        Ok(Html::parse_document(&text))
    }
}

/// Fetch a page, degrading any failure to `None`.
///
/// Transport errors and non-success statuses are logged and contained here;
/// they never cross the per-URL boundary.
pub fn fetch_document(fetcher: &dyn Fetch, url: &str) -> Option<Html> {
    match fetcher.fetch(url) {
        Ok(document) => Some(document),
        Err(error) => {
            log::warn!("Error retrieving the webpage {url}: {error}");
            None
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Stub fetcher for pipeline and service tests.

    use std::collections::HashMap;

    use scraper::Html;

    use crate::error::{AppError, Result};

    use super::Fetch;

    /// Serves canned HTML bodies keyed by URL; unknown URLs fail.
    #[derive(Default)]
    pub struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl Fetch for StubFetcher {
        fn fetch(&self, url: &str) -> Result<Html> {
            self.pages
                .get(url)
                .map(|html| Html::parse_document(html))
                .ok_or_else(|| AppError::input(format!("no stub page for {url}")))
        }
    }
}
