//! Release lookup: validate the pasted URL, fetch from Discogs, and return
//! the release alongside its pre-filled product draft.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use cratedig_core::{is_release_url, parse_release_url, ProductDraft, Release};
use cratedig_discogs::DiscogsError;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct LookupQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct LookupData {
    pub release: Release,
    pub draft: ProductDraft,
}

fn invalid_url_error(req_id: &str, url: &str) -> ApiError {
    // Extraction is looser than validation, so an almost-right URL still
    // gets its release ID echoed back as a hint.
    let message = match parse_release_url(url) {
        Some(parsed) => format!(
            "not a valid Discogs release URL (found release id {}, but expected the form \
             https://www.discogs.com/release/...)",
            parsed.id
        ),
        None => "not a Discogs release URL".to_string(),
    };
    ApiError::new(req_id, "validation_error", message)
}

fn map_discogs_error(req_id: &str, error: &DiscogsError) -> ApiError {
    tracing::error!(error = %error, "Discogs release fetch failed");
    ApiError::new(req_id, "catalog_error", error.to_string())
}

/// GET /api/v1/releases/lookup?url=… — fetch a release and map it to a draft.
pub(in crate::api) async fn lookup_release(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<ApiResponse<LookupData>>, ApiError> {
    let rid = &req_id.0;
    let url = query.url.trim();

    if !is_release_url(url) {
        return Err(invalid_url_error(rid, url));
    }
    let release_ref =
        parse_release_url(url).ok_or_else(|| invalid_url_error(rid, url))?;

    let release = state
        .discogs
        .get_release(&release_ref.id, &state.config.currency)
        .await
        .map_err(|e| map_discogs_error(rid, &e))?;

    let draft = ProductDraft::from_release(&release, url);
    tracing::info!(release_id = %release_ref.id, title = %draft.title, "mapped release to draft");

    Ok(Json(ApiResponse {
        data: LookupData { release, draft },
        meta: ResponseMeta::new(rid.clone()),
    }))
}
