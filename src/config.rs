use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the NexCart backend API
    #[arg(long, env = "NEXCART_API_URL", default_value = "http://localhost:8000/api")]
    pub api_url: String,

    /// Directory for persisted client state (tokens, cached profile)
    #[arg(long, env = "NEXCART_STATE_DIR", default_value = ".nexcart")]
    pub state_dir: PathBuf,

    #[command(flatten)]
    pub http: HttpConfig,

    #[command(flatten)]
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, Args)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[arg(long, env = "NEXCART_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "NEXCART_USER_AGENT", default_value = "nexcart-client")]
    pub user_agent: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Forward-looking margin in seconds when checking token expiry,
    /// so a token does not expire between the check and its use
    #[arg(long, env = "NEXCART_TOKEN_EXPIRY_SKEW_SECS", default_value_t = 5)]
    pub token_expiry_skew_secs: u64,

    /// Route the UI should send unauthenticated users to
    #[arg(long, env = "NEXCART_LOGIN_ROUTE", default_value = "/login")]
    pub login_route: String,
}

impl Config {
    /// Loads configuration from environment variables, ignoring process arguments.
    #[must_use]
    pub fn load() -> Self {
        Self::parse_from(["nexcart-client"])
    }
}
