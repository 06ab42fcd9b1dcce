// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity CRUD, stats and CSV import routes.

use crate::error::{AppError, Result};
use crate::models::{Activity, NewActivity, StatsOverview, UpdateActivity};
use crate::services::csv::{import_rows, CsvRow};
use crate::time_utils::parse_iso_date;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity)
                .patch(update_activity)
                .delete(delete_activity),
        )
        .route("/api/activities/stats/overview", get(stats_overview))
        .route("/api/activities/import-csv", post(import_csv))
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivitiesQuery {
    /// Filter by sport (case-insensitive); takes precedence over the range
    sport: Option<String>,
    /// Inclusive date range, both bounds required together
    start_date: Option<String>,
    end_date: Option<String>,
}

/// List activities, most recent first, with optional filtering.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>> {
    let activities = if let Some(sport) = params.sport.as_deref() {
        state.db.activities_by_sport(sport)
    } else if let (Some(start), Some(end)) =
        (params.start_date.as_deref(), params.end_date.as_deref())
    {
        let start = parse_iso_date(start).ok_or_else(|| {
            AppError::BadRequest("Invalid 'startDate' parameter: must be YYYY-MM-DD".to_string())
        })?;
        let end = parse_iso_date(end).ok_or_else(|| {
            AppError::BadRequest("Invalid 'endDate' parameter: must be YYYY-MM-DD".to_string())
        })?;
        state.db.activities_by_date_range(start, end)
    } else {
        state.db.list_activities()
    };

    Ok(Json(activities))
}

/// Get a single activity.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Activity>> {
    let activity = state
        .db
        .get_activity(id)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;
    Ok(Json(activity))
}

// ─── Mutation ────────────────────────────────────────────────

/// Create a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Activity>)> {
    let payload: NewActivity = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid activity data: {}", e)))?;
    payload.validate()?;

    let activity = state.db.create_activity(payload);
    tracing::info!(id = activity.id, sport = %activity.sport, "Activity created");

    Ok((StatusCode::CREATED, Json(activity)))
}

/// Partially update an activity.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Activity>> {
    let payload: UpdateActivity = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid activity data: {}", e)))?;
    payload.validate()?;

    let activity = state
        .db
        .update_activity(id, payload)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;
    Ok(Json(activity))
}

/// Delete an activity.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    if !state.db.delete_activity(id) {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }
    tracing::info!(id, "Activity deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ─── Stats ───────────────────────────────────────────────────

/// Aggregate statistics over all activities.
async fn stats_overview(State(state): State<Arc<AppState>>) -> Result<Json<StatsOverview>> {
    let activities = state.db.list_activities();
    Ok(Json(StatsOverview::from_activities(&activities)))
}

// ─── CSV Import ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvImportRequest {
    csv_data: Vec<serde_json::Value>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CsvImportResponse {
    pub message: String,
    pub imported: usize,
    pub total: usize,
}

/// Import CSV rows (objects keyed by the export header names).
///
/// Best-effort: each row is converted, validated and inserted
/// independently; failures are logged and skipped.
async fn import_csv(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<CsvImportResponse>> {
    let request: CsvImportRequest = serde_json::from_value(body)
        .map_err(|_| AppError::BadRequest("Invalid CSV data format".to_string()))?;

    // Rows that fail to deserialize fall back to an empty row, which
    // then fails validation and is counted as skipped.
    let rows: Vec<CsvRow> = request
        .csv_data
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect();

    let outcome = import_rows(&state.db, &rows);
    tracing::info!(
        imported = outcome.imported,
        total = outcome.total,
        "CSV import finished"
    );

    Ok(Json(CsvImportResponse {
        message: format!("Imported {} activities", outcome.imported),
        imported: outcome.imported,
        total: outcome.total,
    }))
}
