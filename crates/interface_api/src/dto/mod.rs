//! Request/Response data transfer objects

pub mod claims;
pub mod images;

pub use claims::UpdateClaimRequest;
pub use images::{ImageUrlResponse, SaveAnnotatedImageRequest, UploadImageRequest};
