use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::site::SiteTable;
use crate::url_host::SAMPLE_URL;

/// Global configuration loaded from `~/.config/scrapecfg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapecfgConfig {
    /// URL whose host the default run prints.
    #[serde(default = "default_sample_url")]
    pub sample_url: String,
    /// Optional sites file; if missing, the built-in table is used.
    #[serde(default)]
    pub sites_file: Option<PathBuf>,
}

fn default_sample_url() -> String {
    SAMPLE_URL.to_string()
}

impl Default for ScrapecfgConfig {
    fn default() -> Self {
        Self {
            sample_url: default_sample_url(),
            sites_file: None,
        }
    }
}

impl ScrapecfgConfig {
    /// Site table to use: `override_path` first, then `sites_file`, then the
    /// built-in table.
    pub fn site_table(&self, override_path: Option<&Path>) -> Result<SiteTable> {
        match override_path.or(self.sites_file.as_deref()) {
            Some(path) => SiteTable::load_from_path(path),
            None => Ok(SiteTable::builtin()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scrapecfg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapecfgConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<ScrapecfgConfig> {
    if !path.exists() {
        let default_cfg = ScrapecfgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ScrapecfgConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ScrapecfgConfig::default();
        assert_eq!(
            cfg.sample_url,
            "https://fakenews.example-news.com:8080/post/business/168936864"
        );
        assert!(cfg.sites_file.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ScrapecfgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ScrapecfgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            sample_url = "https://udn.com/news/story/1"
            sites_file = "/etc/scrapecfg/sites.toml"
        "#;
        let cfg: ScrapecfgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.sample_url, "https://udn.com/news/story/1");
        assert_eq!(
            cfg.sites_file.as_deref(),
            Some(Path::new("/etc/scrapecfg/sites.toml"))
        );
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: ScrapecfgConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ScrapecfgConfig::default());
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, ScrapecfgConfig::default());

        fs::write(&path, "sample_url = \"https://example.com/x\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.sample_url, "https://example.com/x");
    }

    #[test]
    fn site_table_prefers_override_then_config() {
        let dir = tempfile::tempdir().unwrap();
        let from_cfg = dir.path().join("cfg.toml");
        let from_flag = dir.path().join("flag.toml");
        fs::write(&from_cfg, "[[site]]\nid = \"cfg\"\n").unwrap();
        fs::write(&from_flag, "[[site]]\nid = \"flag\"\n").unwrap();

        let mut cfg = ScrapecfgConfig::default();
        assert_eq!(cfg.site_table(None).unwrap(), SiteTable::builtin());

        cfg.sites_file = Some(from_cfg);
        assert!(cfg.site_table(None).unwrap().get("cfg").is_some());
        assert!(cfg
            .site_table(Some(&from_flag))
            .unwrap()
            .get("flag")
            .is_some());
    }

    #[test]
    fn site_table_missing_file_is_error() {
        let cfg = ScrapecfgConfig {
            sites_file: Some(PathBuf::from("/nonexistent/scrapecfg/sites.toml")),
            ..ScrapecfgConfig::default()
        };
        assert!(cfg.site_table(None).is_err());
    }
}
