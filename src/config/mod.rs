//! Configuration management for `trackerd`.
//!
//! The only configuration surface is the listen address: `--host` and
//! `--port` flags, with the `PORT` environment variable honored for the
//! port. No config files.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Command-line and environment configuration for the service.
#[derive(Debug, Clone, Parser)]
#[command(name = "trackerd", version, about = "In-memory issue tracker HTTP service")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServerConfig {
    /// The socket address to bind.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
