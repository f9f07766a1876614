//! Deterministic page URLs for rosters, schedules and boxscores.
//!
//! Nothing here touches the network; the client feeds these URLs to
//! [`crate::Client::fetch_page`].

use url::Url;

use crate::Error;

/// Production origin of the college basketball section of the site.
pub const DEFAULT_BASE_URL: &str = "https://www.sports-reference.com/cbb";

/// Season whose roster and schedule pages are crawled by default.
pub const DEFAULT_SEASON: u16 = 2018;

/// Builds page URLs from school slugs and game keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    base_url: String,
    season: u16,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            season: DEFAULT_SEASON,
        }
    }
}

impl Locator {
    /// Creates a locator for a custom origin. Used for testing with wiremock.
    pub fn new(base_url: &str, season: u16) -> Result<Self, Error> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(format!("{}: {}", base_url, e))
        })?;
        Ok(Self {
            base_url: trimmed.to_string(),
            season,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    /// `<base>/schools/<school>/<season>.html`
    pub fn roster_url(&self, school: &str) -> String {
        format!("{}/schools/{}/{}.html", self.base_url, school, self.season)
    }

    /// `<base>/schools/<school>/<season>-schedule.html`
    pub fn schedule_url(&self, school: &str) -> String {
        format!(
            "{}/schools/{}/{}-schedule.html",
            self.base_url, school, self.season
        )
    }

    /// `<base>/boxscores/<date>-<hour>-<school>.html`, date as `YYYY-MM-DD`
    /// and hour as two digits.
    pub fn boxscore_url(&self, school: &str, date: &str, hour: &str) -> String {
        format!("{}/boxscores/{}-{}-{}.html", self.base_url, date, hour, school)
    }
}
