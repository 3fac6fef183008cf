//! Product draft and product-create wire types.
//!
//! [`ProductDraft`] is the user-editable projection of a release; every field
//! starts pre-populated by the mapper but may be independently overridden
//! before submission. [`ProductCreateRequest`] is the outbound GraphQL
//! variables object, serialized camelCase to match the Shopify Admin API.

use serde::{Deserialize, Serialize};

/// Discogs record-grading scale, used for sleeve and media condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "M")]
    Mint,
    #[serde(rename = "NM")]
    NearMint,
    #[serde(rename = "VG")]
    VeryGood,
    #[serde(rename = "G")]
    Good,
    #[serde(rename = "F")]
    Fair,
    #[serde(rename = "P")]
    Poor,
}

impl Condition {
    /// Short grading code as used on Discogs listings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Condition::Mint => "M",
            Condition::NearMint => "NM",
            Condition::VeryGood => "VG",
            Condition::Good => "G",
            Condition::Fair => "F",
            Condition::Poor => "P",
        }
    }

    /// Human label for form dropdowns.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Mint => "Mint (M)",
            Condition::NearMint => "Near Mint (NM)",
            Condition::VeryGood => "Very Good (VG)",
            Condition::Good => "Good (G)",
            Condition::Fair => "Fair (F)",
            Condition::Poor => "Poor (P)",
        }
    }

    /// Parse a grading code, case-insensitively.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "M" => Some(Condition::Mint),
            "NM" => Some(Condition::NearMint),
            "VG" => Some(Condition::VeryGood),
            "G" => Some(Condition::Good),
            "F" => Some(Condition::Fair),
            "P" => Some(Condition::Poor),
            _ => None,
        }
    }
}

/// Product lifecycle status. Serialized uppercase to match the Shopify
/// `ProductStatus` enum casing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
}

impl ProductStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Draft => "DRAFT",
            ProductStatus::Active => "ACTIVE",
        }
    }

    /// Parse a status name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DRAFT" => Some(ProductStatus::Draft),
            "ACTIVE" => Some(ProductStatus::Active),
            _ => None,
        }
    }
}

/// A user-editable product draft derived from a release.
///
/// `image_uris` is the current image selection; its order becomes the
/// product's media order. `tags` stays a comma-separated string until the
/// builder re-parses it, mirroring how the form submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub status: ProductStatus,
    pub image_uris: Vec<String>,
    pub sleeve_condition: Option<Condition>,
    pub media_condition: Option<Condition>,
    pub music_genre: String,
    pub source_url: String,
}

/// Variables for the `productCreate` mutation: the product input object plus
/// the parallel media list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreateRequest {
    pub input: ProductInput,
    pub media: Vec<CreateMediaInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub title: String,
    pub description_html: String,
    pub tags: Vec<String>,
    pub status: ProductStatus,
    pub metafields: Vec<MetafieldInput>,
    pub seo: SeoInput,
}

/// A namespaced custom attribute on the product. The set is fixed and
/// explicit — four entries, never a dynamic key set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetafieldInput {
    pub namespace: String,
    pub key: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
}

impl MetafieldInput {
    /// A `single_line_text_field` metafield, the only type this tool emits.
    #[must_use]
    pub fn single_line(namespace: &str, key: &str, value: impl Into<String>) -> Self {
        Self {
            namespace: namespace.to_string(),
            key: key.to_string(),
            value_type: "single_line_text_field".to_string(),
            value: value.into(),
        }
    }
}

/// One media entry per selected image URI, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaInput {
    pub original_source: String,
    pub alt: String,
    pub media_content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoInput {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_codes_round_trip_through_parse() {
        for c in [
            Condition::Mint,
            Condition::NearMint,
            Condition::VeryGood,
            Condition::Good,
            Condition::Fair,
            Condition::Poor,
        ] {
            assert_eq!(Condition::parse(c.code()), Some(c));
        }
    }

    #[test]
    fn condition_parse_is_case_insensitive() {
        assert_eq!(Condition::parse("nm"), Some(Condition::NearMint));
        assert_eq!(Condition::parse(" vg "), Some(Condition::VeryGood));
        assert_eq!(Condition::parse("mint"), None);
    }

    #[test]
    fn condition_serializes_as_code() {
        let json = serde_json::to_string(&Condition::NearMint).expect("serialize");
        assert_eq!(json, "\"NM\"");
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Draft).expect("serialize"),
            "\"DRAFT\""
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Active).expect("serialize"),
            "\"ACTIVE\""
        );
    }

    #[test]
    fn status_parse_accepts_form_casing() {
        assert_eq!(ProductStatus::parse("Draft"), Some(ProductStatus::Draft));
        assert_eq!(ProductStatus::parse("active"), Some(ProductStatus::Active));
        assert_eq!(ProductStatus::parse("archived"), None);
    }

    #[test]
    fn product_input_serializes_camel_case() {
        let input = ProductInput {
            title: "T".to_string(),
            description_html: "<div>d</div>".to_string(),
            tags: vec!["Jazz".to_string()],
            status: ProductStatus::Draft,
            metafields: vec![MetafieldInput::single_line("custom", "discogs_url", "u")],
            seo: SeoInput {
                title: "T".to_string(),
                description: "d".to_string(),
            },
        };
        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(value["descriptionHtml"], "<div>d</div>");
        assert_eq!(value["metafields"][0]["type"], "single_line_text_field");
        assert_eq!(value["status"], "DRAFT");
    }

    #[test]
    fn media_input_serializes_camel_case() {
        let media = CreateMediaInput {
            original_source: "https://img.example/a.jpg".to_string(),
            alt: String::new(),
            media_content_type: "IMAGE".to_string(),
        };
        let value = serde_json::to_value(&media).expect("serialize");
        assert_eq!(value["originalSource"], "https://img.example/a.jpg");
        assert_eq!(value["mediaContentType"], "IMAGE");
        assert_eq!(value["alt"], "");
    }
}
