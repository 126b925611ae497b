//! Centralized configuration for Shriek.
//!
//! All tunable values live here instead of being scattered through the
//! codebase. The upstream API credential is an explicit configuration
//! value injected into the metadata client at construction time; its
//! absence surfaces as a typed error there, never as a crash.

/// Central configuration for all Shriek components.
#[derive(Debug, Clone, Default)]
pub struct ShriekConfig {
    /// Metadata provider settings
    pub tmdb: TmdbConfig,
    /// HTTP server settings
    pub http: HttpConfig,
}

/// TMDB metadata provider configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API credential; required for all upstream calls
    pub api_key: Option<String>,
    /// API base URL
    pub api_base: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.themoviedb.org/3".to_string(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Socket address to bind, as "host:port"
    pub bind: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl ShriekConfig {
    /// Loads configuration from the environment over defaults.
    ///
    /// Reads `TMDB_API_KEY` for the upstream credential and `SHRIEK_BIND`
    /// for the listen address. An empty credential counts as absent.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.trim().is_empty() {
                config.tmdb.api_key = Some(key);
            }
        }
        if let Ok(bind) = std::env::var("SHRIEK_BIND") {
            if !bind.trim().is_empty() {
                config.http.bind = bind;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tmdb_v3_without_credential() {
        let config = ShriekConfig::default();
        assert!(config.tmdb.api_key.is_none());
        assert_eq!(config.tmdb.api_base, "https://api.themoviedb.org/3");
        assert_eq!(config.http.bind, "127.0.0.1:3000");
    }
}
