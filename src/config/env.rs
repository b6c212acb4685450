// src/config/env.rs
// Environment-based configuration (FOLIO_* variables, optional .env file)

use std::path::PathBuf;
use std::str::FromStr;

/// Values read from the process environment
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub chat_delay_ms: u64,
    pub log_level: String,
    pub out_dir: PathBuf,
    /// Optional TOML file with site settings (FOLIO_CONFIG)
    pub config_path: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            chat_delay_ms: 1500,
            log_level: "info".to_string(),
            out_dir: PathBuf::from("dist"),
            config_path: None,
        }
    }
}

/// Drop a trailing `# comment`. Only a '#' after whitespace starts one, so
/// values like `/tmp/out#1` survive.
fn strip_comment(val: &str) -> &str {
    let cut = val
        .char_indices()
        .find(|&(i, c)| c == '#' && val[..i].ends_with(char::is_whitespace))
        .map(|(i, _)| i)
        .unwrap_or(val.len());
    val[..cut].trim()
}

// Runs before the tracing subscriber exists, so problems go to stderr.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = strip_comment(&val);
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl EnvConfig {
    /// Load `.env` if present, then read FOLIO_* variables over the defaults
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Read FOLIO_* variables without touching `.env`
    pub fn from_current_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_var_or("FOLIO_HOST", defaults.host),
            port: env_var_or("FOLIO_PORT", defaults.port),
            chat_delay_ms: env_var_or("FOLIO_CHAT_DELAY_MS", defaults.chat_delay_ms),
            log_level: env_var_or("FOLIO_LOG_LEVEL", defaults.log_level),
            out_dir: env_var_or("FOLIO_OUT_DIR", defaults.out_dir),
            config_path: std::env::var("FOLIO_CONFIG")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Level for the subscriber installed before the config file is read
    pub fn tracing_level(&self) -> tracing::Level {
        super::parse_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.chat_delay_ms, 1500);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("3000 # dev port"), "3000");
        assert_eq!(strip_comment("  debug\t#note"), "debug");
        assert_eq!(strip_comment("/tmp/out#1"), "/tmp/out#1");
        assert_eq!(strip_comment("#leading"), "#leading");
    }

    #[test]
    fn test_hash_inside_value_kept() {
        let parsed: PathBuf = strip_comment("/tmp/out#1 # build here").parse().unwrap();
        assert_eq!(parsed, PathBuf::from("/tmp/out#1"));
    }

    #[test]
    fn test_tracing_level_from_env_config() {
        let config = EnvConfig {
            log_level: "warn".to_string(),
            ..EnvConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_env_var_or_missing_uses_default() {
        let value: u16 = env_var_or("FOLIO_TEST_DEFINITELY_UNSET_VAR", 42);
        assert_eq!(value, 42);
    }
}
