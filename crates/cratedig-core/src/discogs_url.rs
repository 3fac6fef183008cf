//! Discogs release-URL validation and ID extraction.
//!
//! Validation and extraction are deliberately independent: extraction succeeds
//! on any string containing a `/release/<digits>` segment, while validation
//! requires the full `https://(www.)discogs.com/release/…` shape. Callers use
//! extraction alone to show partial feedback ("Release ID: …") even when the
//! full URL is invalid.

use regex::Regex;

/// The resource-type token and numeric ID pulled out of a release URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRef {
    pub resource_type: String,
    pub id: String,
}

/// Extract the first `/release/<digits>` segment from an arbitrary string.
///
/// Returns `None` when no such segment exists; never fails on malformed
/// input. Only the leading digits after the segment are captured, so
/// `/release/27681219-Alice-Coltrane` yields `"27681219"`.
#[must_use]
pub fn parse_release_url(url: &str) -> Option<ReleaseRef> {
    let re = Regex::new(r"/(release)/(\d+)").expect("valid release-id regex");
    let caps = re.captures(url)?;
    Some(ReleaseRef {
        resource_type: caps[1].to_string(),
        id: caps[2].to_string(),
    })
}

/// Whether the string is a full Discogs release URL.
///
/// Requires an http(s) scheme, optional `www.`, the `discogs.com` host, and a
/// non-empty path under `/release/`.
#[must_use]
pub fn is_release_url(url: &str) -> bool {
    let re = Regex::new(r"(?i)^https?://(www\.)?discogs\.com/release/.+").expect("valid url regex");
    re.is_match(url)
}
