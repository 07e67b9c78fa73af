//! Per-request facts
//!
//! Handlers see the incoming request only through [`RequestFacts`], which keeps
//! snapshot logic independent of the HTTP library.

use serde::Serialize;
use std::net::IpAddr;

use super::system::UNKNOWN;

/// Read-only view of an incoming HTTP request
pub trait RequestFacts {
    /// HTTP method, e.g. `GET`
    fn method(&self) -> &str;

    /// Path component of the request target (no query string)
    fn path(&self) -> &str;

    /// Header value by case-insensitive name, if present and readable
    fn header(&self, name: &str) -> Option<&str>;

    /// Address of the connected peer, if the transport exposes one
    fn client_addr(&self) -> Option<IpAddr>;
}

/// Request facts computed per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSnapshot {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestSnapshot {
    /// Build a snapshot, defaulting missing client address and user agent to `"unknown"`
    pub fn from_facts(request: &impl RequestFacts) -> Self {
        Self {
            client_ip: request
                .client_addr()
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            user_agent: request
                .header("user-agent")
                .unwrap_or(UNKNOWN)
                .to_string(),
            method: request.method().to_string(),
            path: request.path().to_string(),
        }
    }
}
