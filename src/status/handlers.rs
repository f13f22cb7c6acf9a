use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    state::AppState,
    status::dto::CreateStatusCheck,
    store::{StatusCheck, LIST_LIMIT},
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/status", post(create_status_check).get(list_status_checks))
}

#[instrument(skip(state, payload))]
pub async fn create_status_check(
    State(state): State<AppState>,
    payload: Result<Json<CreateStatusCheck>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(payload) = payload?;
    if payload.client_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "client_name must not be empty".to_string(),
        ));
    }

    let check = StatusCheck::new(payload.client_name);
    state.store.insert(&check).await?;
    info!(id = %check.id, client_name = %check.client_name, "status check recorded");
    Ok(Json(check))
}

#[instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.store.list(LIST_LIMIT).await?;
    Ok(Json(checks))
}
