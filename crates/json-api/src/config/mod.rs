//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    checkout::CheckoutConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ListenConfig,
    session::SessionConfig,
};

pub(crate) mod checkout;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod session;

/// Shop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shop-json", about = "Shop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Listen address settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Session cookie and expiry settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Checkout pricing settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
