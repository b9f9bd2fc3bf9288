//! Base fare provider error types.

/// Errors from looking up a base fare.
#[derive(Debug, thiserror::Error)]
pub enum BaseFareError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response had no usable `price` field
    #[error("response has no price")]
    MissingPrice,

    /// Price was negative or not finite
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
}
