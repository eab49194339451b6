//! Environment configuration for the `wealthdash` binary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `WD_LOG_FORMAT`: `text` (default) or `json`.
    pub log_format: LogFormat,
    /// `WD_PRETTY`: pretty-print JSON output (default true).
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            pretty: true,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment, loading `.env`
    /// first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_format = match lookup("WD_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };
        let pretty = lookup("WD_PRETTY")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.pretty);
        Self { log_format, pretty }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
