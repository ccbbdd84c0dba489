//! HTTP handlers for the journal, metric, and habit endpoints.
//!
//! Handlers parse the request, delegate to the operations layer, and map
//! results to status codes. Analysis failure detail never appears in a
//! response; the only client-visible failures are invalid input and an
//! unavailable store.

use crate::api::{ApiError, AppState};
use crate::db::entries::Entry;
use crate::db::habits::Habit;
use crate::db::metrics::Metric;
use crate::ops;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Request body for creating a journal entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub content: String,
}

/// Request body for recording a metric.
#[derive(Debug, Deserialize)]
pub struct CreateMetricRequest {
    pub name: String,
    pub value: f64,
}

/// Request body for recording a habit.
#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

/// `GET /api/journal-entries`
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = ops::journal::list_entries(&state.db)?;
    Ok(Json(entries))
}

/// `POST /api/journal-entries`
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    // Run the write on its own task: if the client disconnects after the
    // analysis call has been issued, the entry still reaches the store.
    let entry = tokio::spawn(async move {
        ops::journal::create_entry(
            &state.db,
            &state.analysis,
            state.max_entry_len,
            &request.content,
        )
        .await
    })
    .await
    .map_err(|e| ApiError::internal(format!("Entry creation task failed: {}", e)))??;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /api/metrics`
pub async fn list_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Metric>>, ApiError> {
    let metrics = ops::metrics::list_metrics(&state.db)?;
    Ok(Json(metrics))
}

/// `POST /api/metrics`
pub async fn create_metric(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateMetricRequest>,
) -> Result<(StatusCode, Json<Metric>), ApiError> {
    let metric = ops::metrics::record_metric(&state.db, &request.name, request.value)?;
    Ok((StatusCode::CREATED, Json(metric)))
}

/// `GET /api/habits`
pub async fn list_habits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Habit>>, ApiError> {
    let habits = ops::habits::list_habits(&state.db)?;
    Ok(Json(habits))
}

/// `POST /api/habits`
pub async fn create_habit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), ApiError> {
    let habit = ops::habits::record_habit(&state.db, &request.name)?;
    Ok((StatusCode::CREATED, Json(habit)))
}

/// `PATCH /api/habits/{id}` — toggles the completed flag.
pub async fn toggle_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Habit>, ApiError> {
    let habit = ops::habits::toggle_habit(&state.db, id)?;
    Ok(Json(habit))
}
