use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};

use cratedig_core::Release;

use crate::error::DiscogsError;

const DEFAULT_BASE_URL: &str = "https://api.discogs.com/";

/// Client for the Discogs REST API.
///
/// Manages the HTTP client, credentials, and base URL. Use
/// [`DiscogsClient::new`] for production or [`DiscogsClient::with_base_url`]
/// to point at a mock server in tests.
pub struct DiscogsClient {
    client: Client,
    base_url: Url,
}

impl DiscogsClient {
    /// Creates a new client pointed at the production Discogs API.
    ///
    /// # Errors
    ///
    /// Returns [`DiscogsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DiscogsError::Config`] if the credentials
    /// contain characters that cannot appear in a header value.
    pub fn new(
        api_key: &str,
        api_secret: &str,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self, DiscogsError> {
        Self::with_base_url(api_key, api_secret, user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DiscogsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DiscogsError::Config`] if `base_url` is not
    /// a valid URL or the credentials are not header-safe.
    pub fn with_base_url(
        api_key: &str,
        api_secret: &str,
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, DiscogsError> {
        // Discogs consumer auth: the whole key/secret pair rides in the
        // Authorization header on every request.
        let auth = format!("Discogs key={api_key}, secret={api_secret}");
        let mut auth_value = HeaderValue::from_str(&auth)
            .map_err(|e| DiscogsError::Config(format!("invalid credential characters: {e}")))?;
        auth_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.to_owned())
            .default_headers(headers)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends to the path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| DiscogsError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches a single release by numeric ID, pricing in `curr_abbr`.
    ///
    /// Calls `GET /releases/{id}?curr_abbr={code}` once. No retry: a failed
    /// attempt surfaces directly to the caller.
    ///
    /// # Errors
    ///
    /// - [`DiscogsError::Api`] on a non-2xx status, carrying the HTTP status
    ///   and the service's `message` field if the body had one.
    /// - [`DiscogsError::Http`] on network failure.
    /// - [`DiscogsError::Deserialize`] if the body does not match the
    ///   expected release shape.
    pub async fn get_release(
        &self,
        release_id: &str,
        curr_abbr: &str,
    ) -> Result<Release, DiscogsError> {
        let url = self.build_release_url(release_id, curr_abbr)?;
        tracing::debug!(release_id, "fetching Discogs release");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DiscogsError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| DiscogsError::Deserialize {
            context: format!("getRelease(id={release_id})"),
            source: e,
        })
    }

    /// Builds the release URL with a properly percent-encoded currency code.
    fn build_release_url(&self, release_id: &str, curr_abbr: &str) -> Result<Url, DiscogsError> {
        let mut url = self
            .base_url
            .join(&format!("releases/{release_id}"))
            .map_err(|e| DiscogsError::Config(format!("invalid release id '{release_id}': {e}")))?;
        url.query_pairs_mut().append_pair("curr_abbr", curr_abbr);
        Ok(url)
    }
}

/// Pulls the `message` field out of a Discogs error body, if it is JSON.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| "no error message in response".to_string())
}
