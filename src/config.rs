use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::{CfError, Result};

/// Configuration constants for the control plane API
pub mod api {
    /// Spaces endpoint, also the prefix of per-space summaries
    pub const SPACES: &str = "/v2/spaces";

    /// Apps endpoint, prefix of per-app stats
    pub const APPS: &str = "/v2/apps";

    /// Per-space summary suffix
    pub const SUMMARY: &str = "summary";

    /// Per-app stats suffix
    pub const STATS: &str = "stats";

    /// The only app state that gets its stats fetched
    pub const STATE_STARTED: &str = "STARTED";

    /// Marker the control plane puts in the spaces body for a rejected token
    pub const INVALID_AUTH_TOKEN: &str = "Invalid Auth Token";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Connection settings shared by every request of a run
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct CfConfig {
    base_url: String,
    token: String,
    timeout: Option<Duration>,
}

impl CfConfig {
    /// Create a configuration, rejecting an empty base URL
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(CfError::Config("base URL must not be empty".to_string()));
        }
        Ok(Self {
            base_url,
            token: token.into(),
            timeout: None,
        })
    }

    /// Set a whole-request timeout (none by default)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw Authorization header value, sent as given
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Report behaviour options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Cap on in-flight stats fetches per space; `None` means one per started app
    pub concurrency: Option<NonZeroUsize>,
}

impl ReportOptions {
    /// Effective `buffer_unordered` limit for a space with `started` apps
    pub fn concurrency_for(&self, started: usize) -> usize {
        let unbounded = started.max(1);
        match self.concurrency {
            Some(cap) => cap.get().min(unbounded),
            None => unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_absolute() {
        assert!(api::SPACES.starts_with('/'));
        assert!(api::APPS.starts_with('/'));
    }

    #[test]
    fn test_config_keeps_values_verbatim() {
        let config = CfConfig::new("https://api.example.com/", "bearer abc").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/");
        assert_eq!(config.token(), "bearer abc");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_rejects_empty_base_url() {
        let err = CfConfig::new("  ", "token").unwrap_err();
        assert!(matches!(err, CfError::Config(_)));
    }

    #[test]
    fn test_config_with_timeout() {
        let config = CfConfig::new("http://localhost", "t")
            .unwrap()
            .with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_concurrency_unbounded_matches_started_apps() {
        let options = ReportOptions::default();
        assert_eq!(options.concurrency_for(7), 7);
    }

    #[test]
    fn test_concurrency_never_zero() {
        let options = ReportOptions::default();
        assert_eq!(options.concurrency_for(0), 1);
    }

    #[test]
    fn test_concurrency_capped() {
        let options = ReportOptions {
            concurrency: NonZeroUsize::new(2),
        };
        assert_eq!(options.concurrency_for(10), 2);
        assert_eq!(options.concurrency_for(1), 1);
    }
}
