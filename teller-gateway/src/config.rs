//! Gateway configuration read from the environment at startup.

use std::{net::SocketAddr, time::Duration};

use crate::error::GatewayError;

const LISTEN_ADDR: &str = "TELLER_LISTEN_ADDR";
const DATABASE_URL: &str = "TELLER_DATABASE_URL";
const FALLBACK_DATABASE_URL: &str = "DATABASE_URL";
const PROBE_TIMEOUT_MS: &str = "TELLER_DB_PROBE_TIMEOUT_MS";

/// Runtime settings for the gateway process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,

    /// Connection string for the database probe, if any.
    pub database_url: Option<String>,

    /// Upper bound on a single database probe.
    pub probe_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3456)),
            database_url: None,
            probe_timeout: Duration::from_millis(2000),
        }
    }
}

impl GatewayConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LISTEN_ADDR) {
            config.listen_addr = raw.parse().map_err(|e| GatewayError::Config {
                key: LISTEN_ADDR,
                reason: format!("'{raw}' is not a socket address: {e}"),
            })?;
        }

        config.database_url = lookup(DATABASE_URL)
            .or_else(|| lookup(FALLBACK_DATABASE_URL))
            .filter(|url| !url.trim().is_empty());

        if let Some(raw) = lookup(PROBE_TIMEOUT_MS) {
            let millis: u64 = raw.parse().map_err(|e| GatewayError::Config {
                key: PROBE_TIMEOUT_MS,
                reason: format!("'{raw}' is not a number of milliseconds: {e}"),
            })?;
            if millis == 0 {
                return Err(GatewayError::Config {
                    key: PROBE_TIMEOUT_MS,
                    reason: "must be greater than zero".to_owned(),
                });
            }
            config.probe_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3456");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn all_variables_are_applied() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[
            ("TELLER_LISTEN_ADDR", "0.0.0.0:8080"),
            ("TELLER_DATABASE_URL", "postgres://bank@db/bank"),
            ("TELLER_DB_PROBE_TIMEOUT_MS", "250"),
        ])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_url.as_deref(), Some("postgres://bank@db/bank"));
        assert_eq!(config.probe_timeout, Duration::from_millis(250));
    }

    #[test]
    fn generic_database_url_is_used_as_fallback() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://fallback/bank",
        )])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.database_url.as_deref(), Some("postgres://fallback/bank"));
    }

    #[test]
    fn blank_database_url_counts_as_unset() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[("TELLER_DATABASE_URL", "  ")]))
        {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(config.database_url.is_none());
    }

    #[test]
    fn malformed_listen_addr_rejects() {
        let result = GatewayConfig::from_lookup(lookup_from(&[("TELLER_LISTEN_ADDR", "localhost")]));
        assert!(
            matches!(result, Err(GatewayError::Config { key: "TELLER_LISTEN_ADDR", .. })),
            "expected config error, got {result:?}"
        );
    }

    #[test]
    fn zero_probe_timeout_rejects() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("TELLER_DB_PROBE_TIMEOUT_MS", "0")]));
        assert!(matches!(result, Err(GatewayError::Config { key: "TELLER_DB_PROBE_TIMEOUT_MS", .. })));
    }
}
