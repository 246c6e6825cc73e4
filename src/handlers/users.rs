//! User CRUD handlers: list, create, update, delete.
//!
//! Success bodies are the plain resource representation; errors render
//! through `AppError`. Non-integer path ids and malformed JSON are rejected
//! by the extractors before a handler runs.

use crate::error::AppError;
use crate::model::User;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.service.list_all().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<User>,
) -> Result<Json<User>, AppError> {
    let user = state.service.create(body).await?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<User>,
) -> Result<Json<User>, AppError> {
    let user = state.service.update(id, body).await?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.service.remove(id).await?;
    Ok(StatusCode::OK)
}
