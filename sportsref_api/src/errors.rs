//! Error types for the page client.

/// Errors that can occur when fetching a page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The site answered with a non-success status and a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A base URL or templated page URL did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// True when the site answered 404.
    ///
    /// Boxscore resolution treats this status differently from every other
    /// failure: it is the signal to retry under the other team's slug.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}
