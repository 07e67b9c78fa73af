//! Startup configuration
//!
//! Command-line flags with environment variable fallbacks. Parsed once in
//! `main` and passed down; handlers never read the environment.

use clap::Parser;
use devops_info_common::config::{self, DEFAULT_DEBUG, DEFAULT_HOST, DEFAULT_PORT};
use devops_info_common::{Error, Result};
use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::net::TcpListener;

/// Command-line arguments for devops-info-service
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "devops-info-service")]
#[command(about = "DevOps course info service")]
#[command(version)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Verbose logging ("true" in any case enables it)
    #[arg(
        long,
        env = "DEBUG",
        default_value_t = DEFAULT_DEBUG,
        action = clap::ArgAction::Set,
        value_parser = parse_debug
    )]
    pub debug: bool,
}

fn parse_debug(value: &str) -> std::result::Result<bool, Infallible> {
    Ok(config::parse_debug_flag(value))
}

impl Config {
    /// Resolve `host:port` to a socket address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                Error::Config(format!("Cannot resolve {}:{}: {}", self.host, self.port, e))
            })?
            .next()
            .ok_or_else(|| Error::Config(format!("No address for {}:{}", self.host, self.port)))
    }

    /// Resolve the bind address and open the listening socket
    ///
    /// Socket failures (port in use, permission denied) surface as `Error::Io`.
    pub async fn bind_listener(&self) -> Result<TcpListener> {
        let addr = self.bind_addr()?;
        Ok(TcpListener::bind(addr).await?)
    }

    /// Default tracing filter directive
    pub fn log_directive(&self) -> &'static str {
        config::log_directive(self.debug)
    }
}
