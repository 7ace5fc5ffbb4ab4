//! Server configuration and command-line parsing.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Default port for the catalogue server.
pub const DEFAULT_PORT: u16 = 8765;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "extcat")]
#[command(version, about = "Serve the extension catalogue over HTTP", long_about = None)]
pub struct Cli {
    /// Port to listen on (loopback only).
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Runtime configuration for the catalogue server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,
    /// Port to bind to. `0` picks an ephemeral port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Creates a loopback configuration on the given port.
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl From<&Cli> for ServerConfig {
    fn from(cli: &Cli) -> Self {
        Self::with_port(cli.port)
    }
}
