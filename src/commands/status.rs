use crate::commands::db;
use crate::models::status_check::{StatusCheck, StatusCheckCreate};
use crate::server::{ApiError, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{SubsecRound, Utc};
use std::path::Path;

pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let database_path = state.settings.database_path.clone();
    run_blocking(move || create_status_check_internal(&database_path, input))
        .await
        .map(Json)
}

pub async fn get_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let database_path = state.settings.database_path.clone();
    run_blocking(move || get_status_checks_internal(&database_path))
        .await
        .map(Json)
}

pub fn create_status_check_internal(
    database_path: &Path,
    input: StatusCheckCreate,
) -> Result<StatusCheck, ApiError> {
    let client_name = input.client_name.trim();
    if client_name.is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "client_name must not be empty",
        ));
    }

    let check = StatusCheck {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: client_name.to_string(),
        // the store keeps microseconds; truncate so the response equals a later listing
        timestamp: Utc::now().trunc_subsecs(6),
    };

    let conn = db::get_db_connection(database_path)
        .map_err(|e| ApiError::internal(format!("DB error: {e}")))?;
    db::insert_status_check(&conn, &check)
        .map_err(|e| ApiError::internal(format!("Insert error: {e}")))?;

    log::info!("Recorded status check {} for {}", check.id, check.client_name);
    Ok(check)
}

pub fn get_status_checks_internal(database_path: &Path) -> Result<Vec<StatusCheck>, ApiError> {
    let conn = db::get_db_connection(database_path)
        .map_err(|e| ApiError::internal(format!("DB error: {e}")))?;
    db::list_status_checks(&conn).map_err(|e| ApiError::internal(format!("Query error: {e}")))
}

async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::internal(format!("Worker error: {e}")))?
}
