//! Client configuration: API host, version segment, access token, and cursor policy.

use std::str::FromStr;

/// Host serving the versioned Open API endpoints.
pub const BASE_URL: &str = "https://open.tiktokapis.com";

/// Host serving the Login Kit authorization page.
pub const BASE_AUTHORIZATION_URL: &str = "https://www.tiktok.com";

/// API version segment used when none is configured.
pub const DEFAULT_GRAPH_VERSION: &str = "v2";

/// What happens to the client's last-seen cursor when a response carries no
/// more pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorPolicy {
    /// Keep the last cursor seen, even if later responses are not paginated.
    #[default]
    KeepLastKnown,
    /// Reset the cursor whenever a response does not signal more pages.
    ClearWhenExhausted,
}

impl FromStr for CursorPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(CursorPolicy::KeepLastKnown),
            "clear" => Ok(CursorPolicy::ClearWhenExhausted),
            _ => Err(()),
        }
    }
}

/// Immutable settings handed to every request the client builds.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bearer token. Empty for unauthenticated flows such as client credentials.
    pub access_token: String,
    /// Version path segment, e.g. `v2`.
    pub graph_version: String,
    /// Base URL for API requests. Defaults to [`BASE_URL`].
    pub base_url: String,
    /// Base URL for the authorization page. Defaults to [`BASE_AUTHORIZATION_URL`].
    pub authorization_base_url: String,
    pub cursor_policy: CursorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            graph_version: DEFAULT_GRAPH_VERSION.to_string(),
            base_url: BASE_URL.to_string(),
            authorization_base_url: BASE_AUTHORIZATION_URL.to_string(),
            cursor_policy: CursorPolicy::default(),
        }
    }
}

impl Config {
    /// Builds a config from `TIKTOK_*` environment variables, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_token: env_string("TIKTOK_ACCESS_TOKEN", defaults.access_token),
            graph_version: env_string("TIKTOK_GRAPH_VERSION", defaults.graph_version),
            base_url: env_string("TIKTOK_BASE_URL", defaults.base_url),
            authorization_base_url: env_string(
                "TIKTOK_AUTH_BASE_URL",
                defaults.authorization_base_url,
            ),
            cursor_policy: parse_cursor_policy(
                std::env::var("TIKTOK_CURSOR_POLICY").ok().as_deref(),
                defaults.cursor_policy,
            ),
        }
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = access_token.to_string();
        self
    }

    pub fn with_graph_version(mut self, graph_version: &str) -> Self {
        self.graph_version = graph_version.to_string();
        self
    }

    /// Points API requests at a custom host. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_authorization_base_url(mut self, base_url: &str) -> Self {
        self.authorization_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_cursor_policy(mut self, cursor_policy: CursorPolicy) -> Self {
        self.cursor_policy = cursor_policy;
        self
    }

    /// The token to attach, or `None` when it is empty.
    pub fn bearer_token(&self) -> Option<&str> {
        if self.access_token.is_empty() {
            None
        } else {
            Some(self.access_token.as_str())
        }
    }
}

fn parse_cursor_policy(raw: Option<&str>, default: CursorPolicy) -> CursorPolicy {
    match raw.filter(|val| !val.is_empty()) {
        None => default,
        Some(val) => val.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Unrecognized TIKTOK_CURSOR_POLICY {:?}, expected \"keep\" or \"clear\"; using {:?}",
                val,
                default
            );
            default
        }),
    }
}

fn env_string(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://open.tiktokapis.com");
        assert_eq!(config.graph_version, "v2");
        assert_eq!(config.cursor_policy, CursorPolicy::KeepLastKnown);
        assert!(config.bearer_token().is_none());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = Config::default()
            .with_access_token("act.123")
            .with_graph_version("v3")
            .with_base_url("http://127.0.0.1:8080/")
            .with_cursor_policy(CursorPolicy::ClearWhenExhausted);
        assert_eq!(config.bearer_token(), Some("act.123"));
        assert_eq!(config.graph_version, "v3");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.cursor_policy, CursorPolicy::ClearWhenExhausted);
    }

    #[test]
    fn cursor_policy_from_str() {
        assert_eq!("keep".parse(), Ok(CursorPolicy::KeepLastKnown));
        assert_eq!("clear".parse(), Ok(CursorPolicy::ClearWhenExhausted));
        assert!("sometimes".parse::<CursorPolicy>().is_err());
    }

    #[test]
    fn unknown_cursor_policy_falls_back_to_default() {
        let keep = CursorPolicy::KeepLastKnown;
        assert_eq!(parse_cursor_policy(None, keep), keep);
        assert_eq!(parse_cursor_policy(Some(""), keep), keep);
        assert_eq!(parse_cursor_policy(Some("sometimes"), keep), keep);
        assert_eq!(
            parse_cursor_policy(Some("clear"), keep),
            CursorPolicy::ClearWhenExhausted
        );
    }
}
