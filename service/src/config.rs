use std::env;

const DEFAULT_LOG_FILTER: &str = "info,produto_service=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Emit ANSI colours in log output
    pub log_ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_filter: lookup("PRODUTO_LOG_FILTER")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_ansi: lookup("PRODUTO_LOG_ANSI")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_ansi),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
