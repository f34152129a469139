use std::env;
use std::time::Duration;

use stockd_core::StockdError;

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Period between self-ping ticks.
pub const SELF_PING_PERIOD: Duration = Duration::from_secs(300);

/// Service configuration resolved from the environment.
///
/// Only two variables are consulted; there are no CLI flags:
/// - `PORT` — listen port, defaults to [`DEFAULT_PORT`]. An unparsable value is
///   a startup error rather than a silent fallback.
/// - `STOCKD_SELF_PING_URL` — overrides the self-ping target, which otherwise
///   points at this process's own `/api/test` route on the loopback interface.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server binds on.
    pub port: u16,
    /// Absolute URL the self-ping task issues GETs against.
    pub self_ping_url: String,
    /// Interval between self-ping attempts.
    pub self_ping_period: Duration,
}

impl Config {
    /// Resolve the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns `StockdError::Config` when `PORT` is present but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, StockdError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| StockdError::config(format!("PORT {raw:?} is not a valid port: {e}")))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(e) => return Err(StockdError::config(format!("PORT is not readable: {e}"))),
        };

        let self_ping_url = env::var("STOCKD_SELF_PING_URL")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{port}/api/test"));

        Ok(Self {
            port,
            self_ping_url,
            self_ping_period: SELF_PING_PERIOD,
        })
    }
}
