//! Asset serving routes
//!
//! Serves the PNG pages generated by uploads from the local asset directory.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// URL prefix stored assets are served under
pub const ASSET_ROUTE_PREFIX: &str = "/static/assets";

/// Create the asset router
pub fn router() -> Router<AppState> {
    Router::new().route(&format!("{}/:filename", ASSET_ROUTE_PREFIX), get(serve_asset))
}

/// GET /static/assets/:filename
async fn serve_asset(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let data = state
        .assets()
        .read(&filename)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset not found: {}", filename)))?;

    let content_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, data.len())
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}
