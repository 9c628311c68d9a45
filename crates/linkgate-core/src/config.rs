use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Limits and extra blacklist entries for the URL gate (`[validation]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum trimmed length in characters.
    pub min_length: usize,
    /// Maximum trimmed length in characters.
    pub max_length: usize,
    /// Domains blocked in addition to the built-in list (exact or subdomain match).
    pub extra_blocked_domains: Vec<String>,
    /// Keywords blocked in addition to the built-in list (substring match).
    pub extra_blocked_keywords: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 2048,
            extra_blocked_domains: Vec::new(),
            extra_blocked_keywords: Vec::new(),
        }
    }
}

/// Short-code allocation parameters (`[allocation]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Generate/insert attempts before giving up (including the first).
    pub max_attempts: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self { max_attempts: 10 }
    }
}

/// Global configuration loaded from `~/.config/linkgate/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkgateConfig {
    /// Public origin used to build share links, e.g. `https://go.example.com`.
    pub base_url: String,
    /// Optional database location; defaults to `~/.local/state/linkgate/links.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub allocation: AllocationConfig,
}

impl Default for LinkgateConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:13001".to_string(),
            database_path: None,
            validation: ValidationConfig::default(),
            allocation: AllocationConfig::default(),
        }
    }
}

impl LinkgateConfig {
    /// Rejects settings the core cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.allocation.max_attempts == 0 {
            bail!("allocation.max_attempts must be at least 1");
        }
        if self.validation.min_length > self.validation.max_length {
            bail!(
                "validation.min_length ({}) exceeds validation.max_length ({})",
                self.validation.min_length,
                self.validation.max_length
            );
        }
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<LinkgateConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LinkgateConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LinkgateConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:13001");
        assert!(cfg.database_path.is_none());
        assert_eq!(cfg.validation.min_length, 10);
        assert_eq!(cfg.validation.max_length, 2048);
        assert_eq!(cfg.allocation.max_attempts, 10);
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkgateConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkgateConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.validation.max_length, cfg.validation.max_length);
        assert_eq!(parsed.allocation.max_attempts, cfg.allocation.max_attempts);
    }

    #[test]
    fn config_toml_partial_sections() {
        let toml = r#"
            base_url = "https://go.example.com"

            [validation]
            max_length = 512
            extra_blocked_domains = ["evil.example"]

            [allocation]
            max_attempts = 3
        "#;
        let cfg: LinkgateConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://go.example.com");
        assert_eq!(cfg.validation.min_length, 10);
        assert_eq!(cfg.validation.max_length, 512);
        assert_eq!(cfg.validation.extra_blocked_domains, vec!["evil.example"]);
        assert!(cfg.validation.extra_blocked_keywords.is_empty());
        assert_eq!(cfg.allocation.max_attempts, 3);
    }

    #[test]
    fn invalid_values_rejected() {
        let mut cfg = LinkgateConfig::default();
        cfg.allocation.max_attempts = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = LinkgateConfig::default();
        cfg.validation.min_length = 100;
        cfg.validation.max_length = 50;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"https://s.example\"\ndatabase_path = \"/tmp/l.db\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.base_url, "https://s.example");
        assert_eq!(cfg.database_path.as_deref(), Some(Path::new("/tmp/l.db")));

        fs::write(&path, "base_url = \"x\"\n[allocation]\nmax_attempts = 0\n").unwrap();
        assert!(load_from(&path).is_err());
        assert!(load_from(&dir.path().join("missing.toml")).is_err());
    }
}
