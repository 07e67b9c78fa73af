//! HTTP API handlers for devops-info-service

pub mod errors;
pub mod extract;
pub mod health;
pub mod info;

pub use errors::{handle_panic, not_found, reject_head};
pub use extract::IncomingRequest;
pub use health::health_check;
pub use info::service_info;
