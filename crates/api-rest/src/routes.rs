//! HTTP route handlers.

pub mod health;
pub mod maintenance;
pub mod upload;

pub use health::routes as health_routes;
pub use maintenance::routes as maintenance_routes;
pub use upload::routes as upload_routes;
