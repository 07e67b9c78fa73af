//! Request adapter for axum
//!
//! [`IncomingRequest`] captures the parts of an axum request that snapshots
//! need and exposes them through [`RequestFacts`].

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap, Method, Uri},
};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use crate::snapshot::RequestFacts;

/// Method, target, headers and peer address of the current request
///
/// The peer address is present only when the server was started with
/// `into_make_service_with_connect_info` (or a test inserted `ConnectInfo`).
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub client: Option<SocketAddr>,
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let client = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
            headers: parts.headers.clone(),
            client,
        })
    }
}

impl RequestFacts for IncomingRequest {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn path(&self) -> &str {
        self.uri.path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    fn client_addr(&self) -> Option<IpAddr> {
        self.client.map(|addr| addr.ip())
    }
}
