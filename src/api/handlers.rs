//! API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::Error;
use crate::types::{Permit, PermitCreate};

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        permits: state.store.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub permits: usize,
}

/// Submit a new permit
///
/// Malformed bodies are rejected here, before anything reaches the store;
/// the record is only appended once construction has succeeded. Identical
/// payloads are not deduplicated: each call creates a distinct record.
pub async fn create_permit(
    State(state): State<AppState>,
    payload: Result<Json<PermitCreate>, JsonRejection>,
) -> Result<Json<Permit>, Error> {
    let Json(submission) = payload.map_err(|err| Error::invalid_request(err.body_text()))?;

    let permit = Permit::submitted(submission);
    tracing::info!(
        permit_id = %permit.id,
        county_id = permit.submission.county_id,
        permit_type = %permit.submission.permit_type,
        "Permit submitted"
    );

    state.store.append(permit.clone()).await;

    Ok(Json(permit))
}

/// List every permit created since the process started, in insertion order
pub async fn list_permits(State(state): State<AppState>) -> Json<Vec<Permit>> {
    Json(state.store.list_all().await)
}
