//! Static service identity and endpoint listing

use serde::Serialize;

/// Service name reported by `GET /`
pub const SERVICE_NAME: &str = "devops-info-service";

/// Service version reported by `GET /`
pub const SERVICE_VERSION: &str = "1.0.0";

/// One-line service description
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";

/// Web framework serving the API
pub const FRAMEWORK: &str = "Axum";

/// Static identity metadata about the running service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

impl ServiceDescriptor {
    /// Descriptor of this service, constant for the process lifetime
    pub const fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            description: SERVICE_DESCRIPTION,
            framework: FRAMEWORK,
        }
    }
}

/// One public route, as advertised by `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: [EndpointDescriptor; 2] = [
    EndpointDescriptor {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointDescriptor {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

impl EndpointDescriptor {
    /// All public routes, in display order
    pub fn all() -> Vec<Self> {
        ENDPOINTS.to_vec()
    }
}
