//! Configuration management

use crate::error::{LarisManisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog JSON file used when no path is given on the command line
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Text-generation service used to summarize matches
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// Wire protocol spoken by the summarization service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerKind {
    /// `{query, context}` in, `{text}` out
    Endpoint,

    /// OpenAI-compatible `/v1/chat/completions`
    Chat,
}

impl std::str::FromStr for SummarizerKind {
    type Err = LarisManisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "endpoint" => Ok(Self::Endpoint),
            "chat" => Ok(Self::Chat),
            other => Err(LarisManisError::Config(format!(
                "unknown summarizer kind: {}",
                other
            ))),
        }
    }
}

/// Summarization service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Whether replies are enriched with a generated summary
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_kind")]
    pub kind: SummarizerKind,

    /// Endpoint URL (`Endpoint`) or service base URL (`Chat`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Model name for chat completions
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum characters of product context sent in a chat prompt
    #[serde(default = "default_context_char_limit")]
    pub context_char_limit: usize,

    /// How long a generated summary is reused, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            kind: default_kind(),
            url: default_url(),
            model: default_model(),
            api_key: std::env::var("LARISMANIS_LLM_API_KEY").ok(),
            timeout_secs: default_timeout(),
            context_char_limit: default_context_char_limit(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_enabled() -> bool {
    std::env::var("LARISMANIS_USE_LLM")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn default_kind() -> SummarizerKind {
    std::env::var("LARISMANIS_LLM_KIND")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(SummarizerKind::Endpoint)
}

fn default_url() -> String {
    std::env::var("LARISMANIS_LLM_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api/chat".to_string())
}

fn default_model() -> String {
    std::env::var("LARISMANIS_LLM_MODEL")
        .unwrap_or_else(|_| "meta-llama/Llama-3.1-8B-Instruct".to_string())
}

fn default_timeout() -> u64 {
    std::env::var("LARISMANIS_LLM_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(15)
}

fn default_context_char_limit() -> usize {
    6000
}

fn default_cache_ttl() -> u64 {
    3600
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Catalog path: explicit override, then `LARISMANIS_CATALOG`, then the config file
    pub fn resolve_catalog_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var("LARISMANIS_CATALOG") {
            return Ok(PathBuf::from(path));
        }
        self.catalog_path.clone().ok_or_else(|| {
            LarisManisError::Config(
                "no catalog configured; pass --catalog or set LARISMANIS_CATALOG".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("chat".parse::<SummarizerKind>().unwrap(), SummarizerKind::Chat);
        assert_eq!(
            " Endpoint ".parse::<SummarizerKind>().unwrap(),
            SummarizerKind::Endpoint
        );
        assert!("gemini".parse::<SummarizerKind>().is_err());
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("missing.yml")).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.summarizer.context_char_limit, 6000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");

        let mut config = Config::default();
        config.catalog_path = Some(PathBuf::from("/srv/catalog.json"));
        config.summarizer.kind = SummarizerKind::Chat;
        config.summarizer.timeout_secs = 5;
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(loaded.summarizer.kind, SummarizerKind::Chat);
        assert_eq!(loaded.summarizer.timeout_secs, 5);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "summarizer:\n  enabled: true\n  url: http://llm.local/api/chat\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.summarizer.enabled);
        assert_eq!(config.summarizer.url, "http://llm.local/api/chat");
        assert_eq!(config.summarizer.cache_ttl_secs, 3600);
    }

    #[test]
    fn test_explicit_catalog_path_wins() {
        let config = Config {
            catalog_path: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };
        let path = config
            .resolve_catalog_path(Some(Path::new("explicit.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("explicit.json"));
    }
}
