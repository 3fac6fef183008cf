//! Shopify GraphQL response types for the `productCreate` mutation.

use serde::{Deserialize, Serialize};

/// Top-level GraphQL response envelope: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(rename = "productCreate")]
    pub product_create: Option<ProductCreatePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductCreatePayload {
    #[serde(default)]
    pub product: Option<CreatedProduct>,
    #[serde(default, rename = "userErrors")]
    pub user_errors: Vec<UserError>,
}

/// An input problem reported by the mutation itself.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl UserError {
    pub(crate) fn render(&self) -> String {
        match &self.field {
            Some(field) if !field.is_empty() => {
                format!("{}: {}", field.join("."), self.message)
            }
            _ => self.message.clone(),
        }
    }
}

/// The created product echoed back by the mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub media: MediaConnection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaConnection {
    #[serde(default)]
    pub nodes: Vec<CreatedMedia>,
}

/// One media node on the created product, with its preview status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMedia {
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub media_content_type: String,
    #[serde(default)]
    pub preview: Option<MediaPreview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaPreview {
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_render_includes_field_path() {
        let err = UserError {
            field: Some(vec!["input".to_string(), "title".to_string()]),
            message: "can't be blank".to_string(),
        };
        assert_eq!(err.render(), "input.title: can't be blank");
    }

    #[test]
    fn user_error_render_without_field_is_bare_message() {
        let err = UserError {
            field: None,
            message: "something went wrong".to_string(),
        };
        assert_eq!(err.render(), "something went wrong");
    }

    #[test]
    fn created_product_deserializes_media_nodes() {
        let body = serde_json::json!({
            "id": "gid://shopify/Product/1",
            "title": "Coltrane, Alice - Turiya Sings",
            "media": {
                "nodes": [
                    { "alt": "", "mediaContentType": "IMAGE", "preview": { "status": "UPLOADED" } }
                ]
            }
        });
        let product: CreatedProduct = serde_json::from_value(body).expect("should deserialize");
        assert_eq!(product.media.nodes.len(), 1);
        assert_eq!(product.media.nodes[0].media_content_type, "IMAGE");
        assert_eq!(
            product.media.nodes[0]
                .preview
                .as_ref()
                .and_then(|p| p.status.as_deref()),
            Some("UPLOADED")
        );
    }
}
