// src/config/mod.rs
// Configuration: environment, optional TOML file, CLI overrides

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::SiteConfig;

use std::path::PathBuf;
use std::time::Duration;

/// Effective settings after merging every source
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub chat_delay: Duration,
    pub log_level: String,
    pub out_dir: PathBuf,
    /// Replaces the catalog owner name in titles when set
    pub owner: Option<String>,
    /// Link prefix, empty or starting with '/', never ending with '/'
    pub base_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::merge(EnvConfig::default(), SiteConfig::default())
    }
}

impl Settings {
    /// Read the optional file `env` points at and merge it over `env`.
    ///
    /// Install the tracing subscriber first; file problems are logged.
    pub fn resolve(env: EnvConfig) -> Self {
        let file = env
            .config_path
            .as_deref()
            .map(SiteConfig::load)
            .unwrap_or_default();
        Self::merge(env, file)
    }

    /// File values win over environment values
    pub fn merge(env: EnvConfig, file: SiteConfig) -> Self {
        let delay_ms = file.chat.delay_ms.unwrap_or(env.chat_delay_ms);
        Self {
            host: env.host,
            port: env.port,
            chat_delay: Duration::from_millis(delay_ms),
            log_level: env.log_level,
            out_dir: env.out_dir,
            owner: file.site.owner.filter(|o| !o.trim().is_empty()),
            base_path: normalize_base_path(file.site.base_path.as_deref().unwrap_or("")),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed tracing level; unknown names fall back to INFO
    pub fn tracing_level(&self) -> tracing::Level {
        parse_level(&self.log_level)
    }
}

pub(crate) fn parse_level(name: &str) -> tracing::Level {
    name.parse().unwrap_or(tracing::Level::INFO)
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use file::{ChatSection, SiteSection};

    #[test]
    fn test_merge_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.chat_delay, Duration::from_millis(1500));
        assert_eq!(settings.base_path, "");
        assert!(settings.owner.is_none());
    }

    #[test]
    fn test_file_overrides_env_delay() {
        let file = SiteConfig {
            site: SiteSection::default(),
            chat: ChatSection { delay_ms: Some(0) },
        };
        let settings = Settings::merge(EnvConfig::default(), file);
        assert_eq!(settings.chat_delay, Duration::ZERO);
    }

    #[test]
    fn test_base_path_normalized() {
        assert_eq!(normalize_base_path("portfolio/"), "/portfolio");
        assert_eq!(normalize_base_path("/a/b/"), "/a/b");
        assert_eq!(normalize_base_path("/"), "");
    }

    #[test]
    fn test_resolve_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[site]\nowner = \"Jane\"\n[chat]\ndelay_ms = 10\n").unwrap();

        let env = EnvConfig {
            config_path: Some(path),
            ..EnvConfig::default()
        };
        let settings = Settings::resolve(env);
        assert_eq!(settings.owner.as_deref(), Some("Jane"));
        assert_eq!(settings.chat_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_resolve_without_file_keeps_env() {
        let settings = Settings::resolve(EnvConfig::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_tracing_level() {
        let mut settings = Settings::default();
        settings.log_level = "debug".to_string();
        assert_eq!(settings.tracing_level(), tracing::Level::DEBUG);
        settings.log_level = "loud".to_string();
        assert_eq!(settings.tracing_level(), tracing::Level::INFO);
    }
}
