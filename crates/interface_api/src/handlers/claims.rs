//! Claim handlers

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use domain_review::{Claim, ClaimId};

use crate::dto::UpdateClaimRequest;
use crate::{error::ApiError, AppState};

// Claim responses must never be cached: the review UI polls these routes
// and a stale status breaks the queue view.
const NO_STORE: (header::HeaderName, &str) = (header::CACHE_CONTROL, "no-store");

/// Lists all claims
pub async fn list_claims(State(state): State<AppState>) -> impl IntoResponse {
    let claims: Vec<Claim> = state.store.list();
    info!(count = claims.len(), "Listing claims");
    ([NO_STORE], Json(claims))
}

/// Gets a claim by id
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ClaimId::new(id);
    let claim = state
        .store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Claim not found: {id}")))?;

    info!(claim_id = %id, status = %claim.status, "Returning claim");
    Ok(([NO_STORE], Json(claim)))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ClaimId::new(id);
    let update = request.into_update()?;
    // A payload with no recognized fields is a no-op, not an error
    if update.is_empty() {
        let claim = state
            .store
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Claim not found: {id}")))?;
        return Ok(([NO_STORE], Json(claim)));
    }

    let requested_status = update.status;
    let updated = state.store.update(&id, update)?;

    if let Some(status) = requested_status {
        info!(claim_id = %id, status = %status, "Updated claim status");
    }
    info!(
        claim_id = %id,
        estimate_source = %updated.estimate_source,
        "Claim updated"
    );
    Ok(([NO_STORE], Json(updated)))
}
