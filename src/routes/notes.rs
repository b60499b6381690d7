//! Notes Routes
//!
//! Endpoints:
//! - POST /upload_notes - Upload a document (multipart field `file`)
//! - GET /upload_notes_result - Current notes as image URLs and text blocks

use axum::{
    extract::{Host, Multipart, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::notes::{self, UploadedDocument};
use crate::state::AppState;

use super::assets::ASSET_ROUTE_PREFIX;

/// Multipart field carrying the uploaded document
const FILE_FIELD: &str = "file";

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotesResponse {
    /// Absolute URLs of the stored page images
    pub images: Vec<String>,
    /// Extracted text blocks
    pub texts: Vec<String>,
}

// ============================================================================
// Router
// ============================================================================

/// Create the notes router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload_notes", post(upload_notes))
        .route("/upload_notes_result", get(upload_notes_result))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /upload_notes
///
/// Extracts the uploaded file and replaces the current notes with the result.
/// The previous notes stay visible until extraction has fully succeeded.
async fn upload_notes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let document = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    let file_name = document.file_name.clone();
    let size = document.data.len();

    let (format, result) = notes::extract_blocking(
        document,
        state.assets().clone(),
        state.config().extract_options(),
    )
    .await?;

    tracing::info!(
        file_name = %file_name,
        format = %format,
        size = size,
        texts = result.texts.len(),
        images = result.images.len(),
        "Notes uploaded"
    );

    if result.is_empty() {
        tracing::debug!(file_name = %file_name, "Upload produced no notes");
    }

    state.notes().replace(result);

    Ok(Json(UploadResponse {
        status: "Uploaded successfully".to_string(),
    }))
}

/// GET /upload_notes_result
///
/// Returns the current notes. Image filenames are turned into absolute URLs
/// rooted at the requesting host (or the configured public base URL).
async fn upload_notes_result(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
) -> Json<NotesResponse> {
    let current = state.notes().read();
    let root = host_root(host.as_ref().map(|Host(h)| h.as_str()), &headers, &state);

    let images = current
        .images
        .iter()
        .map(|name| format!("{}{}/{}", root, ASSET_ROUTE_PREFIX, name))
        .collect();

    Json(NotesResponse {
        images,
        texts: current.texts.clone(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Read the `file` part of the form, skipping any other fields
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedDocument>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        return Ok(Some(UploadedDocument::new(file_name, data.to_vec())));
    }

    Ok(None)
}

/// `scheme://host` of the incoming request, without a trailing slash
///
/// `host` is what axum resolved from `Forwarded`, `X-Forwarded-Host`, `Host`
/// or the request URI. The scheme comes from `Forwarded` or
/// `X-Forwarded-Proto`, defaulting to `http`.
fn host_root(host: Option<&str>, headers: &HeaderMap, state: &AppState) -> String {
    let config = state.config();
    if let Some(base) = &config.server.public_base_url {
        return base.clone();
    }

    let scheme = forwarded_proto(headers)
        .or_else(|| {
            headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "http".to_string());

    let host = host
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", config.server.port));

    format!("{}://{}", scheme, host)
}

/// `proto` of the first element of an RFC 7239 `Forwarded` header
fn forwarded_proto(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::FORWARDED)?.to_str().ok()?;
    let first = value.split(',').next()?;

    first.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("proto") {
            let proto = value.trim().trim_matches('"');
            (!proto.is_empty()).then(|| proto.to_string())
        } else {
            None
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
