use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::github::link::next_page_url;

/// Follows `rel="next"` links from a starting URL until the provider stops
/// advertising one.
pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch every page starting at `start_url`, concatenating items in the
    /// order they were received.
    ///
    /// A 304 ends the walk with what has been collected so far. Any status
    /// >= 400 aborts the whole walk; no partial result is returned.
    pub async fn fetch_all<T: DeserializeOwned>(&self, start_url: &str) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut next = Some(start_url.to_string());
        let mut pages = 0usize;

        while let Some(url) = next.take() {
            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;
            pages += 1;

            let status = response.status();
            if status == StatusCode::NOT_MODIFIED {
                tracing::debug!("Not modified, stopping after {} pages", pages);
                break;
            }

            // reqwest accepts any three-digit code, so compare numerically
            if status.as_u16() >= 400 {
                tracing::warn!("GitHub returned {} for {}", status, url);
                return Err(Error::RemoteStatus {
                    status: status.as_u16(),
                    url,
                });
            }

            next = response
                .headers()
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_page_url);

            let body = response.bytes().await?;
            let items: Vec<T> = serde_json::from_slice(&body)?;
            all_items.extend(items);
        }

        tracing::debug!("Fetched {} items across {} pages", all_items.len(), pages);
        Ok(all_items)
    }
}
