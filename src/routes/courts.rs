// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courts aggregation and favorites routes.

use crate::error::{AppError, Result};
use crate::models::{Court, CourtFilters};
use crate::services::courts_data;
use crate::time_utils::parse_iso_date;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/courts", get(get_courts))
        .route(
            "/api/courts/favorites",
            get(list_favorites)
                .post(add_favorite)
                .delete(remove_favorite),
        )
        .route("/api/courts/favorites/check", get(check_favorite))
}

// ─── Courts ──────────────────────────────────────────────────

/// Get per-venue summaries, filtered and sorted by play count.
async fn get_courts(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<CourtFilters>,
) -> Result<Json<Vec<Court>>> {
    validate_filter_dates(&filters)?;

    tracing::debug!(
        sport = ?filters.sport,
        activity_type = ?filters.activity_type,
        player = ?filters.player,
        start_date = ?filters.start_date,
        end_date = ?filters.end_date,
        "Computing courts"
    );

    let activities = state.db.activities_in_creation_order();
    Ok(Json(courts_data(&activities, &filters)))
}

fn validate_filter_dates(filters: &CourtFilters) -> Result<()> {
    for (name, value) in [
        ("startDate", &filters.start_date),
        ("endDate", &filters.end_date),
    ] {
        if let Some(raw) = value {
            if parse_iso_date(raw).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Invalid '{}' parameter: must be YYYY-MM-DD",
                    name
                )));
            }
        }
    }
    Ok(())
}

// ─── Favorites ───────────────────────────────────────────────

/// A (clubName, clubLocation) pair identifying a court.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoritePayload {
    club_name: String,
    #[serde(default)]
    club_location: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteCheckResponse {
    pub is_favorite: bool,
}

/// All favorite keys ("clubName|clubLocation").
async fn list_favorites(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.db.list_favorites()))
}

/// Mark a court as favorite (idempotent).
async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<FavoriteCheckResponse>)> {
    let payload = parse_favorite(body)?;
    state
        .db
        .add_favorite(&payload.club_name, &payload.club_location);

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCheckResponse { is_favorite: true }),
    ))
}

/// Unmark a court as favorite (idempotent).
async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode> {
    let payload = parse_favorite(body)?;
    state
        .db
        .remove_favorite(&payload.club_name, &payload.club_location);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteCheckQuery {
    club_name: String,
    #[serde(default)]
    club_location: String,
}

/// Check whether a court is in the favorites set.
async fn check_favorite(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FavoriteCheckQuery>,
) -> Result<Json<FavoriteCheckResponse>> {
    Ok(Json(FavoriteCheckResponse {
        is_favorite: state.db.is_favorite(&query.club_name, &query.club_location),
    }))
}

fn parse_favorite(body: serde_json::Value) -> Result<FavoritePayload> {
    let payload: FavoritePayload = serde_json::from_value(body)
        .map_err(|_| AppError::BadRequest("clubName is required".to_string()))?;
    if payload.club_name.is_empty() {
        return Err(AppError::BadRequest("clubName is required".to_string()));
    }
    Ok(payload)
}
