use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant is terminal for the attempt that produced it; the crate
/// never retries on its own. Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum FxError {
    /// The request target could not be built from the base URL and endpoint.
    #[error("invalid request target: {0}")]
    InvalidTarget(#[from] url::ParseError),

    /// The connectivity watch reported no usable network path.
    #[error("no internet connection")]
    Disconnected,

    /// The request failed below the HTTP layer (DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 2xx but sent no body to decode.
    #[error("no data was received from the server")]
    NoData,

    /// The response body could not be decoded into the expected shape.
    #[error("decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("HTTP error {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The provider rejected the API key (HTTP 401 without a provider error body).
    #[error("unauthorized, check your API key ({url})")]
    Unauthorized {
        /// The URL that returned the error.
        url: String,
    },

    /// The provider's request quota was exceeded (HTTP 429).
    #[error("request limit exceeded ({url})")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
    },

    /// An application-level error reported by the pricing provider inside
    /// the response body, distinct from transport/HTTP-level failures.
    #[error("provider error {code}: {info}")]
    Provider {
        /// The provider's own error code.
        code: i64,
        /// The provider's human-readable explanation.
        info: String,
    },

    /// A conversion request failed local validation before any network use.
    #[error("invalid conversion request: {0}")]
    InvalidRequest(String),
}
