//! Discogs release response types.
//!
//! All types model the JSON body of the Discogs `/releases/{id}` endpoint.
//! Every field is optional or defaulted: the API omits fields freely and a
//! partial response must still deserialize. The release is read-only for the
//! lifetime of one import session and is never persisted.

use serde::{Deserialize, Serialize};

/// A single release as returned by `/releases/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    /// Sort-friendly artist credit, e.g. `"Coltrane, Alice"`.
    #[serde(default)]
    pub artists_sort: Option<String>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub formats: Vec<Format>,
    /// Raw release date, e.g. `"1982-06-01"`.
    #[serde(default)]
    pub released: Option<String>,
    /// Human-formatted release date, e.g. `"Jun 1, 1982"`.
    #[serde(default)]
    pub released_formatted: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    /// Canonical Discogs URL for this release.
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// An artist credit on a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// Artist name variation used on this particular release.
    #[serde(default)]
    pub anv: Option<String>,
}

/// A format descriptor: name, free-text qualifier, and descriptive tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub name: String,
    /// Free-text qualifier, e.g. `"Gatefold"`.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// A label credit with catalog number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catno: Option<String>,
}

/// An image attached to a release; order matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub uri: String,
    #[serde(default, rename = "type")]
    pub image_type: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}
