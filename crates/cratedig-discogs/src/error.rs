use thiserror::Error;

/// Errors returned by the Discogs API client.
#[derive(Debug, Error)]
pub enum DiscogsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Discogs answered with a non-2xx status. `message` is the service's
    /// JSON `message` field when present.
    #[error("Discogs API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client could not be constructed from the given settings.
    #[error("client configuration error: {0}")]
    Config(String),
}
