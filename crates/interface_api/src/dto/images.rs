//! Image ingestion DTOs

use serde::{Deserialize, Serialize};

/// Upload of a claim photo, base64-encoded (optionally a full data URL)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    pub image_data: String,
    pub file_name: Option<String>,
}

/// Agent-annotated image export; must be a `data:image/...` URL
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnnotatedImageRequest {
    pub image_data_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrlResponse {
    pub image_url: String,
}
