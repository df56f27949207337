//! Image ingestion and serving
//!
//! Uploaded photos land in a server-local directory and are referenced by
//! relative URL from the claim record. Serving is restricted to sanitized
//! filenames so the uploads directory cannot be escaped.

use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use tracing::{error, info};

use domain_review::ClaimId;

use crate::dto::{ImageUrlResponse, SaveAnnotatedImageRequest, UploadImageRequest};
use crate::{error::ApiError, AppState};

/// Stores an uploaded claim photo and returns its relative URL
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UploadImageRequest>,
) -> Result<Json<ImageUrlResponse>, ApiError> {
    let id = ClaimId::new(id);
    if state.store.get(&id).is_none() {
        return Err(ApiError::NotFound(format!("Claim not found: {id}")));
    }

    let bytes = decode_image_payload(&request.image_data)?;

    let extension = request
        .file_name
        .as_deref()
        .map(sanitize_file_name)
        .and_then(|name| {
            name.rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
        })
        .unwrap_or_else(|| "jpg".to_string());
    let file_name = format!("{}_{}.{}", id, Utc::now().timestamp_millis(), extension);

    write_image(&state.config.uploads_dir, &file_name, &bytes).await?;

    info!(claim_id = %id, file = %file_name, "Stored uploaded image");
    Ok(Json(ImageUrlResponse {
        image_url: format!("/images/uploads/{file_name}"),
    }))
}

/// Stores an agent-annotated image exported from the review canvas
pub async fn save_annotated_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SaveAnnotatedImageRequest>,
) -> Result<Json<ImageUrlResponse>, ApiError> {
    let id = ClaimId::new(id);
    if state.store.get(&id).is_none() {
        return Err(ApiError::NotFound(format!("Claim not found: {id}")));
    }
    if !request.image_data_url.starts_with("data:image") {
        return Err(ApiError::BadRequest("Invalid image data".to_string()));
    }

    let bytes = decode_image_payload(&request.image_data_url)?;
    let file_name = format!("{}_annotated_{}.jpg", id, Utc::now().timestamp_millis());

    write_image(&state.config.annotated_dir, &file_name, &bytes).await?;

    info!(claim_id = %id, file = %file_name, "Stored annotated image");
    Ok(Json(ImageUrlResponse {
        image_url: format!("/images/annotated/edited_by_claims_agent/{file_name}"),
    }))
}

/// Serves a previously uploaded image by sanitized filename only
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !is_safe_file_name(&filename) {
        return Err(ApiError::BadRequest("Invalid filename".to_string()));
    }

    let path = FsPath::new(&state.config.uploads_dir).join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound("Image not found".to_string()))?;

    let content_type = content_type_for(&filename);
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "private, max-age=3600"),
        ],
        bytes,
    ))
}

// Accepts either a bare base64 string or a full data URL.
fn decode_image_payload(data: &str) -> Result<Vec<u8>, ApiError> {
    let encoded = data
        .split_once(',')
        .map(|(_, rest)| rest)
        .unwrap_or(data);
    BASE64
        .decode(encoded)
        .map_err(|_| ApiError::BadRequest("Invalid image data".to_string()))
}

async fn write_image(dir: &str, file_name: &str, bytes: &[u8]) -> Result<(), ApiError> {
    tokio::fs::create_dir_all(dir).await.map_err(|err| {
        error!(dir = %dir, error = %err, "Failed to create image directory");
        ApiError::Internal("Failed to save image".to_string())
    })?;
    let path = FsPath::new(dir).join(file_name);
    tokio::fs::write(&path, bytes).await.map_err(|err| {
        error!(path = %path.display(), error = %err, "Failed to write image");
        ApiError::Internal("Failed to save image".to_string())
    })
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}
