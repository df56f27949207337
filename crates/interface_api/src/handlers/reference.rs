//! Reference data handlers

use axum::{
    extract::{Path, State},
    Json,
};

use infra_store::reference::{DamageTypeReference, VehicleValuation};

use crate::{error::ApiError, AppState};

/// Cost statistics for a damage type
pub async fn damage_cost_reference(
    State(state): State<AppState>,
    Path(damage_type): Path<String>,
) -> Result<Json<DamageTypeReference>, ApiError> {
    state
        .reference
        .lookup_damage_type(&damage_type)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No cost reference for damage type: {damage_type}"))
        })
}

/// Vehicle valuation data sources
pub async fn vehicle_valuation(State(state): State<AppState>) -> Json<VehicleValuation> {
    Json(state.reference.vehicle_valuation.clone())
}
