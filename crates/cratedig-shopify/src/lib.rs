//! Shopify Admin GraphQL client for product creation.
//!
//! Executes the single `productCreate` mutation this tool needs and maps the
//! three distinct failure surfaces (transport, top-level GraphQL errors, and
//! mutation `userErrors`) into typed variants. Product creation is
//! all-or-nothing per Shopify's own transactional guarantee, so no partial
//! success is modeled.

mod client;
mod error;
mod types;

pub use client::ShopifyClient;
pub use error::ShopifyError;
pub use types::{CreatedMedia, CreatedProduct, MediaConnection, MediaPreview};
