// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Equipment (racket) routes.

use crate::error::{AppError, Result};
use crate::models::{NewRacket, Racket, UpdateRacket};
use crate::services::usage_minutes_by_racket;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/equipment/rackets",
            get(list_rackets).post(create_racket),
        )
        .route(
            "/api/equipment/rackets/{id}",
            get(get_racket).patch(update_racket),
        )
        .route("/api/equipment/usage", get(usage))
}

/// All rackets, newest first.
async fn list_rackets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Racket>>> {
    Ok(Json(state.db.list_rackets()))
}

/// Get a single racket.
async fn get_racket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Racket>> {
    let racket = state
        .db
        .get_racket(id)
        .ok_or_else(|| AppError::NotFound(format!("Racket {} not found", id)))?;
    Ok(Json(racket))
}

/// Register a new racket.
async fn create_racket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Racket>)> {
    let payload: NewRacket = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid racket data: {}", e)))?;
    payload.validate()?;

    let racket = state.db.create_racket(payload);
    tracing::info!(id = racket.id, brand = %racket.brand, "Racket created");

    Ok((StatusCode::CREATED, Json(racket)))
}

/// Partially update a racket (e.g. mark broken or retired).
async fn update_racket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Racket>> {
    let payload: UpdateRacket = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid racket data: {}", e)))?;
    payload.validate()?;

    let racket = state
        .db
        .update_racket(id, payload)
        .ok_or_else(|| AppError::NotFound(format!("Racket {} not found", id)))?;
    Ok(Json(racket))
}

/// Total minutes played per racket id, matched by normalized label.
async fn usage(State(state): State<Arc<AppState>>) -> Result<Json<HashMap<u64, i64>>> {
    let rackets = state.db.list_rackets();
    let activities = state.db.list_activities();
    Ok(Json(usage_minutes_by_racket(&rackets, &activities)))
}
