use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use cratedig_core::ProductCreateRequest;

use crate::error::ShopifyError;
use crate::types::{CreatedProduct, GraphQlResponse};

/// The one mutation this tool runs. Requests the created product's id,
/// title, and media preview statuses, plus `userErrors` for input problems.
const PRODUCT_CREATE_MUTATION: &str = r"
mutation CreateProductWithNewMedia($input: ProductInput!, $media: [CreateMediaInput!]) {
  productCreate(input: $input, media: $media) {
    product {
      id
      title
      media(first: 10) {
        nodes {
          alt
          mediaContentType
          preview {
            status
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}";

/// Client for the Shopify Admin GraphQL API.
///
/// Use [`ShopifyClient::new`] with the shop domain for production or
/// [`ShopifyClient::with_endpoint`] to point at a mock server in tests.
pub struct ShopifyClient {
    client: Client,
    endpoint: Url,
}

impl ShopifyClient {
    /// Creates a client for `https://{shop}/admin/api/{version}/graphql.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ShopifyError::Config`] if the domain or
    /// token is malformed.
    pub fn new(
        shop_domain: &str,
        admin_token: &str,
        api_version: &str,
        timeout_secs: u64,
    ) -> Result<Self, ShopifyError> {
        let endpoint = format!("https://{shop_domain}/admin/api/{api_version}/graphql.json");
        Self::with_endpoint(admin_token, timeout_secs, &endpoint)
    }

    /// Creates a client posting to an explicit endpoint (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ShopifyError::Config`] if `endpoint` is
    /// not a valid URL or the token is not header-safe.
    pub fn with_endpoint(
        admin_token: &str,
        timeout_secs: u64,
        endpoint: &str,
    ) -> Result<Self, ShopifyError> {
        let mut token_value = HeaderValue::from_str(admin_token)
            .map_err(|e| ShopifyError::Config(format!("invalid admin token characters: {e}")))?;
        token_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("X-Shopify-Access-Token", token_value);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| ShopifyError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Submits one `productCreate` mutation and returns the created product.
    ///
    /// All-or-nothing: on any error variant no product was created (Shopify's
    /// own guarantee). A single attempt per call, nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::Api`] on a non-2xx HTTP status.
    /// - [`ShopifyError::GraphQl`] when the response carries top-level
    ///   GraphQL errors.
    /// - [`ShopifyError::UserError`] when the mutation reports input
    ///   problems.
    /// - [`ShopifyError::MissingProduct`] when no product comes back.
    /// - [`ShopifyError::Http`] / [`ShopifyError::Deserialize`] on transport
    ///   or body-shape failures.
    pub async fn create_product(
        &self,
        request: &ProductCreateRequest,
    ) -> Result<CreatedProduct, ShopifyError> {
        let body = serde_json::json!({
            "query": PRODUCT_CREATE_MUTATION,
            "variables": {
                "input": request.input,
                "media": request.media,
            },
        });
        tracing::debug!(title = %request.input.title, "submitting productCreate");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        let parsed: GraphQlResponse =
            serde_json::from_str(&text).map_err(|e| ShopifyError::Deserialize {
                context: "productCreate".to_string(),
                source: e,
            })?;

        if !parsed.errors.is_empty() {
            let messages = parsed
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ShopifyError::GraphQl(messages));
        }

        let payload = parsed
            .data
            .and_then(|d| d.product_create)
            .ok_or(ShopifyError::MissingProduct)?;

        if !payload.user_errors.is_empty() {
            let messages = payload
                .user_errors
                .iter()
                .map(crate::types::UserError::render)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ShopifyError::UserError(messages));
        }

        payload.product.ok_or(ShopifyError::MissingProduct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_admin_endpoint_from_shop_domain() {
        let client = ShopifyClient::new("test-shop.myshopify.com", "shpat_test", "2024-07", 30)
            .expect("client construction should not fail");
        assert_eq!(
            client.endpoint.as_str(),
            "https://test-shop.myshopify.com/admin/api/2024-07/graphql.json"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = ShopifyClient::with_endpoint("shpat_test", 30, "not a url");
        assert!(matches!(result, Err(ShopifyError::Config(_))));
    }

    #[test]
    fn mutation_selects_media_preview_status() {
        assert!(PRODUCT_CREATE_MUTATION.contains("productCreate(input: $input, media: $media)"));
        assert!(PRODUCT_CREATE_MUTATION.contains("userErrors"));
        assert!(PRODUCT_CREATE_MUTATION.contains("preview"));
    }
}
