//! Users resource routes. Mounted under `/api` by the server.

use crate::handlers::users::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/:id", put(update).delete(delete_handler))
        .with_state(state)
}
