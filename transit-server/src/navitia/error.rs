//! Navitia client error types.

/// Errors from the Navitia HTTP client.
///
/// Every query distinguishes these internally, even the ones that collapse
/// all failures into an empty result before returning to their caller.
#[derive(Debug, thiserror::Error)]
pub enum NavitiaError {
    /// Network-level failure (DNS, timeout, connection reset, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Well-formed `{"error": {...}}` envelope, whatever the HTTP status
    #[error("upstream error: {message}")]
    Upstream { message: String },

    /// Body was not JSON, or not the expected shape
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// The configured service root is not an absolute hierarchical URL
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    /// The configured API key cannot be sent as a header value
    #[error("invalid API key format")]
    InvalidApiKey,
}

impl NavitiaError {
    /// Whether this failure came from the network rather than the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, NavitiaError::Transport(_))
    }
}
