//! HTTP middleware components.
//!
//! - Request ID propagation (`x-request-id`)
//! - Request logging
//! - Maintenance-mode redirect

pub mod logging;
pub mod maintenance;
pub mod request_id;

pub use logging::logging_middleware;
pub use maintenance::maintenance_middleware;
pub use request_id::{request_id_middleware, RequestId};
