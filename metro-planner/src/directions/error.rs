//! Directions client error types.

/// Errors from a point-to-point travel estimate.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, client timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Non-success HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered but with a non-OK status field
    #[error("directions status {status}: {message}")]
    Status { status: String, message: String },

    /// No route between the two points
    #[error("no route found")]
    NoRoute,

    /// Rate limited by the API
    #[error("rate limited by directions API")]
    RateLimited,

    /// Invalid or missing API key
    #[error("unauthorized (check GOOGLE_MAPS_API_KEY)")]
    Unauthorized,

    /// Estimate did not complete within the per-call deadline
    #[error("estimate timed out after {0} s")]
    Timeout(u64),
}
