//! Product creation: re-assemble the edited draft from the submitted flat
//! strings and run the `productCreate` mutation.

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use cratedig_core::{
    split_csv, Condition, ProductCreateRequest, ProductDraft, ProductStatus,
};
use cratedig_shopify::{CreatedProduct, ShopifyError};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Statically declared submission schema. The transport carries flat strings
/// only; comma-separated lists are re-parsed here. The draft is assembled
/// exactly as submitted — user edits are never overwritten from the release.
#[derive(Debug, Deserialize)]
pub(in crate::api) struct CreateProductBody {
    pub title: String,
    pub description_html: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub image_uris: String,
    #[serde(default)]
    pub sleeve_condition: String,
    #[serde(default)]
    pub media_condition: String,
    #[serde(default)]
    pub music_genre: String,
    pub discogs_url: String,
    pub status: String,
}

fn parse_condition_field(
    req_id: &str,
    field: &str,
    value: &str,
) -> Result<Option<Condition>, ApiError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    Condition::parse(value).map(Some).ok_or_else(|| {
        ApiError::new(
            req_id,
            "validation_error",
            format!("'{field}' must be one of M, NM, VG, G, F, P; got '{value}'"),
        )
    })
}

fn map_shopify_error(req_id: &str, error: &ShopifyError) -> ApiError {
    tracing::error!(error = %error, "productCreate failed");
    ApiError::new(req_id, "shopify_error", error.to_string())
}

/// POST /api/v1/products — create a Shopify product from the edited draft.
pub(in crate::api) async fn create_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateProductBody>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedProduct>>), ApiError> {
    let rid = &req_id.0;

    let title = body.title.trim().to_owned();
    if title.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "title must be non-empty",
        ));
    }
    let status = ProductStatus::parse(&body.status).ok_or_else(|| {
        ApiError::new(
            rid,
            "validation_error",
            format!("status must be 'Draft' or 'Active', got '{}'", body.status),
        )
    })?;
    let sleeve_condition = parse_condition_field(rid, "sleeve_condition", &body.sleeve_condition)?;
    let media_condition = parse_condition_field(rid, "media_condition", &body.media_condition)?;

    let draft = ProductDraft {
        title,
        description: body.description_html,
        tags: body.tags,
        status,
        image_uris: split_csv(&body.image_uris),
        sleeve_condition,
        media_condition,
        music_genre: body.music_genre,
        source_url: body.discogs_url,
    };

    let request = ProductCreateRequest::from_draft(&draft);
    let product = state
        .shopify
        .create_product(&request)
        .await
        .map_err(|e| map_shopify_error(rid, &e))?;

    tracing::info!(product_id = %product.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: product,
            meta: ResponseMeta::new(rid.clone()),
        }),
    ))
}
