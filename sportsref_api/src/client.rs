//! HTTP client for sports-reference HTML pages.

use std::time::Duration;

use crate::{locator::Locator, user_agent::get_user_agent, Error};

/// Request timeout applied to every page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for roster, schedule and boxscore pages.
///
/// Sends browser-like headers with a user agent picked once per client.
/// Requests are issued one at a time by callers; the client holds no queue.
pub struct Client {
    http: reqwest::Client,
    locator: Locator,
}

impl Client {
    /// Creates a client pointing at the production site and default season.
    pub fn new() -> Result<Self, Error> {
        Self::with_locator(Locator::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_locator(Locator::new(base_url, crate::DEFAULT_SEASON)?)
    }

    /// Creates a client around an already configured locator.
    pub fn with_locator(locator: Locator) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self { http, locator })
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Fetches a page and returns its body.
    ///
    /// Any non-success status comes back as [`Error::HttpStatus`];
    /// callers use [`Error::is_not_found`] to single out 404.
    pub async fn fetch_page(&self, url: &str) -> Result<String, Error> {
        let resp = self
            .http
            .get(url)
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::debug!("GET {} answered {}", url, status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Fetches the roster page of a school.
    pub async fn roster_page(&self, school: &str) -> Result<String, Error> {
        self.fetch_page(&self.locator.roster_url(school)).await
    }

    /// Fetches the schedule page of a school.
    pub async fn schedule_page(&self, school: &str) -> Result<String, Error> {
        self.fetch_page(&self.locator.schedule_url(school)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
