//! Users backend: User CRUD REST service library.

pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod test_utils;

pub use error::AppError;
pub use model::User;
pub use repository::UserRepository;
pub use routes::{common_routes, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_users_table, PgUserRepository};
