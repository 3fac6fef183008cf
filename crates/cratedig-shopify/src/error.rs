use thiserror::Error;

/// Errors returned by the Shopify Admin API client.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-2xx status before any GraphQL processing.
    #[error("Shopify API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response carried top-level GraphQL errors.
    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    /// The mutation ran but reported input problems via `userErrors`.
    #[error("product create rejected: {0}")]
    UserError(String),

    /// The mutation returned neither a product nor user errors.
    #[error("product create returned no product")]
    MissingProduct,

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
