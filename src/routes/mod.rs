//! Route assembly: common endpoints and the users resource.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;
