use std::time::Duration;

/// Problems with the process environment, reported once at startup.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a whole number of seconds, got `{value}`")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub bind_addr: String,
    pub request_timeout: Duration,
    /// Zero disables the shared query cache.
    pub cache_ttl: Duration,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. The `VITE_` names are accepted so an
    /// existing frontend `.env` can be reused unchanged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let supabase_url = get("SUPABASE_URL")
            .or_else(|| get("VITE_SUPABASE_URL"))
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let supabase_anon_key = get("SUPABASE_ANON_KEY")
            .or_else(|| get("VITE_SUPABASE_ANON_KEY"))
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let seconds = |key: &'static str, default: u64| -> Result<Duration, ConfigError> {
            match get(key) {
                None => Ok(Duration::from_secs(default)),
                Some(value) => value
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidSeconds { key, value }),
            }
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            request_timeout: seconds("REQUEST_TIMEOUT_SECS", 10)?,
            cache_ttl: seconds("CACHE_TTL_SECS", 0)?,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "./static".to_string()),
        })
    }
}
