//! Session Config

use std::time::Duration;

use clap::Args;
use jiff::SignedDuration;

/// Session cookie and expiry settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id.
    #[arg(
        long = "session-cookie-name",
        env = "SESSION_COOKIE_NAME",
        default_value = "SESSION"
    )]
    pub cookie_name: String,

    /// Idle time after which a session and its cart expire.
    #[arg(
        long = "session-ttl-seconds",
        env = "SESSION_TTL_SECONDS",
        default_value_t = 1_800_u64
    )]
    pub ttl_seconds: u64,

    /// How often expired sessions are swept from the store.
    #[arg(
        long = "session-sweep-interval-seconds",
        env = "SESSION_SWEEP_INTERVAL_SECONDS",
        default_value_t = 60_u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_seconds: u64,
}

impl SessionConfig {
    /// Session idle timeout.
    #[must_use]
    pub fn ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX))
    }

    /// Interval between expired session sweeps.
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}
