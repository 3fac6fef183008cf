//! Domain types and pure logic for the Discogs-to-Shopify importer.
//!
//! This crate has no HTTP dependencies. It holds the release-URL parser, the
//! Discogs release model, the product draft, the release-to-draft mapper, the
//! draft-to-request builder, and process configuration.

pub mod app_config;
pub mod config;
pub mod discogs_url;
pub mod mapper;
pub mod product;
pub mod release;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use discogs_url::{is_release_url, parse_release_url, ReleaseRef};
pub use product::{
    Condition, CreateMediaInput, MetafieldInput, ProductCreateRequest, ProductDraft, ProductInput,
    ProductStatus, SeoInput,
};
pub use release::{Artist, Format, Image, Label, Release};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Split a comma-separated form value into clean entries.
///
/// Trims each segment and drops empties, so `"Jazz, , Spiritual,"` yields
/// `["Jazz", "Spiritual"]`. The transport boundary only carries flat strings;
/// every handler re-parses list fields through this.
#[must_use]
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
