//! Geoapify client error types.

/// Errors from the Geoapify HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeoapifyError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for debugging.
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response carried no features for the query
    #[error("no results for {query:?}")]
    NoResults { query: String },

    /// Rate limited by the API
    #[error("rate limited by Geoapify")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// The response parsed but did not contain usable data
    #[error("malformed response: {0}")]
    Malformed(String),
}
