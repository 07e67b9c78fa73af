//! # DevOps Info Common Library
//!
//! Shared code for the DevOps info service including:
//! - Error types
//! - Configuration defaults and flag parsing
//! - Start time and uptime tracking
//! - Human-readable uptime formatting

pub mod config;
pub mod error;
pub mod human_time;
pub mod time;

pub use error::{Error, Result};
pub use time::StartTime;
