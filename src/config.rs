use std::time::Duration;

/// Production membership webhook; override with `MEMBERSHIP_WEBHOOK_URL`
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n-production-8414.up.railway.app/webhook/Membership-Info";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOOKUP_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub webhook_url: String,
    /// Upper bound on the outbound lookup call, so a stalled upstream can't
    /// hold requests for the HTTP client's default lifetime
    pub lookup_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let webhook_url = std::env::var("MEMBERSHIP_WEBHOOK_URL")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        let timeout_seconds = std::env::var("MEMBERSHIP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECONDS);

        Self {
            port,
            webhook_url,
            lookup_timeout: Duration::from_secs(timeout_seconds),
        }
    }
}
