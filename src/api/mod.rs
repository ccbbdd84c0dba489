//! HTTP API for the wellspring server.
//!
//! This module exposes the operations layer as JSON over HTTP:
//!
//! - `GET  /api/journal-entries` — ordered entry list
//! - `POST /api/journal-entries` — create an entry (analysis is best-effort)
//! - `GET/POST /api/metrics` — metric records
//! - `GET/POST /api/habits`, `PATCH /api/habits/{id}` — habit records
//!
//! Error mapping: validation failures become 400, a missing record 404, and
//! everything else 500, always as `{ "message": ... }`.

pub mod handlers;

use crate::ai::OllamaClient;
use crate::db::Database;
use crate::errors::{AppError, AppResult, DatabaseError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared state handed to every request handler.
pub struct AppState {
    /// Database handle (connection pool).
    pub db: Database,
    /// Analysis client for the journal write path.
    pub analysis: OllamaClient,
    /// Maximum accepted journal entry length, in characters.
    pub max_entry_len: usize,
}

/// An error response: a status code plus a client-facing message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Builds a 500 response with the given message.
    pub fn internal(message: String) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", err);
        }

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

/// Builds the application router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/journal-entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/metrics",
            get(handlers::list_metrics).post(handlers::create_metric),
        )
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route("/api/habits/{id}", patch(handlers::toggle_habit))
        .with_state(state)
}

/// Binds the listener and serves requests until interrupted.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: Arc<AppState>, bind_addr: &str) -> AppResult<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err = ApiError::from(AppError::Validation("Content cannot be empty".to_string()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Content cannot be empty");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(AppError::Database(DatabaseError::NotFound(
            "Habit with id 9 not found".to_string(),
        )));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_server_error() {
        let err = ApiError::from(AppError::Config("bad".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(AppError::Database(DatabaseError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
