//! Response snapshots
//!
//! Each section of a response is collected fresh per request. Nothing here is
//! cached; the only shared input is the read-only [`StartTime`].

pub mod request;
pub mod runtime;
pub mod service;
pub mod system;

use devops_info_common::time::{self, iso_utc};
use devops_info_common::StartTime;
use serde::Serialize;

pub use request::{RequestFacts, RequestSnapshot};
pub use runtime::RuntimeSnapshot;
pub use service::{EndpointDescriptor, ServiceDescriptor};
pub use system::SystemSnapshot;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: ServiceDescriptor,
    pub system: SystemSnapshot,
    pub runtime: RuntimeSnapshot,
    pub request: RequestSnapshot,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl ServiceInfo {
    /// Gather all five sections for the given request
    pub fn collect(start: &StartTime, request: &impl RequestFacts) -> Self {
        Self {
            service: ServiceDescriptor::current(),
            system: SystemSnapshot::collect(),
            runtime: RuntimeSnapshot::collect(start),
            request: RequestSnapshot::from_facts(request),
            endpoints: EndpointDescriptor::all(),
        }
    }
}

/// Status reported by a responsive service
pub const HEALTHY: &str = "healthy";

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

impl HealthStatus {
    pub fn collect(start: &StartTime) -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp: iso_utc(time::now()),
            uptime_seconds: start.uptime_seconds(),
        }
    }
}
