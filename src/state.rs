//! Shared application state for all routes.

use crate::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
}
