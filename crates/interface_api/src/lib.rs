//! HTTP API Layer
//!
//! This crate provides the REST API for the claims review tool using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, images, and reference data
//! - **Middleware**: Request tracing and audit logging
//! - **DTOs**: Request payloads with explicit optional-field semantics
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, reference, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_store::{ClaimStore, ReferenceDatabase};

use crate::config::ApiConfig;
use crate::handlers::{claims, health, images, reference};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClaimStore>,
    pub reference: Arc<ReferenceDatabase>,
    pub config: ApiConfig,
}

/// Creates the main API router
pub fn create_router(
    store: Arc<ClaimStore>,
    reference: Arc<ReferenceDatabase>,
    config: ApiConfig,
) -> Router {
    let state = AppState {
        store,
        reference,
        config,
    };

    let public_routes = Router::new().route("/health", get(health::health_check));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::get_claim))
        .route("/:id", patch(claims::update_claim))
        .route("/:id/images", post(images::upload_image))
        .route("/:id/annotated-image", post(images::save_annotated_image));

    // Reference data routes
    let reference_routes = Router::new()
        .route("/damage-costs/:damage_type", get(reference::damage_cost_reference))
        .route("/vehicle-valuation", get(reference::vehicle_valuation));

    let api_routes = Router::new()
        .nest("/claims", claim_routes)
        .route("/uploads/:filename", get(images::serve_upload))
        .nest("/reference", reference_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
