//! Central configuration: endpoint resolution and runtime defaults.

use std::env;

/// Default seconds a toast stays visible before auto-hiding.
/// Zero would mean manual dismissal only.
pub const DEFAULT_TOAST_SECONDS: u32 = 5;

/// Default delay before a post-sign-in redirect fires, in milliseconds.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 3000;

/// Default timeout applied to every backend HTTP request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Default port for the SPA static-file server.
pub const DEFAULT_STATIC_PORT: u16 = 8080;

/// Debounce window for as-you-type field validation, in milliseconds.
pub const VALIDATION_DEBOUNCE_MS: u64 = 400;

/// Countdown seconds displayed for a redirect delay: `ceil(delay / 1000)`.
pub fn redirect_countdown_secs(delay_ms: u64) -> u32 {
    delay_ms.div_ceil(1000) as u32
}

/// Per-module backend base URLs, one per platform module.
///
/// Resolved from the environment with localhost defaults so a fresh dev
/// checkout talks to a locally running backend without any setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth: String,
    pub financial: String,
    pub billing: String,
    pub inventory: String,
    pub users: String,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Self {
            auth: base_url("OPSDESK_API_AUTH", "http://localhost:5000/api/auth"),
            financial: base_url("OPSDESK_API_FINANCIAL", "http://localhost:5001/api/financial"),
            billing: base_url("OPSDESK_API_BILLING", "http://localhost:5002/api/billing"),
            inventory: base_url("OPSDESK_API_INVENTORY", "http://localhost:5003/api/inventory"),
            users: base_url("OPSDESK_API_USERS", "http://localhost:5004/api/users"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_env()
    }
}

fn base_url(key: &str, fallback: &str) -> String {
    let raw = env::var(key).unwrap_or_else(|_| fallback.to_string());
    raw.trim_end_matches('/').to_string()
}

/// Settings for the static-file server, read from `PORT` / `OPSDESK_MODE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub mode: String,
}

impl ServeConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_STATIC_PORT);
        let mode = env::var("OPSDESK_MODE").unwrap_or_else(|_| "production".to_string());
        Self { port, mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_countdown_rounds_up() {
        assert_eq!(redirect_countdown_secs(3000), 3);
        assert_eq!(redirect_countdown_secs(3001), 4);
        assert_eq!(redirect_countdown_secs(999), 1);
        assert_eq!(redirect_countdown_secs(0), 0);
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        assert_eq!(
            base_url("OPSDESK_TEST_UNSET_KEY", "http://localhost:9/api/"),
            "http://localhost:9/api"
        );
    }
}
