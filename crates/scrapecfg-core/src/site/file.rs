//! Sites file: a [`SiteTable`] stored as TOML.
//!
//! Sites and their fields are arrays of tables so the file order is the
//! table order. A field without a `selector` key is declared but not scraped.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::entry::{FieldSelector, SiteConfig};
use super::table::SiteTable;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SitesFile {
    #[serde(default, rename = "site")]
    sites: Vec<SiteRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SiteRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hosts: Vec<String>,
    #[serde(default, rename = "field")]
    fields: Vec<FieldSelector>,
}

impl SiteTable {
    /// Parse a sites file body. Repeated site ids or field names replace the
    /// earlier entry.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let file: SitesFile = toml::from_str(data).context("parse sites file")?;
        let mut table = SiteTable::new();
        for record in file.sites {
            let mut site = SiteConfig::new(record.id);
            for host in record.hosts {
                site.add_host(host);
            }
            for field in record.fields {
                if site.insert_field(field.name.clone(), field.selector).is_some() {
                    tracing::warn!(site = site.id(), field = %field.name, "duplicate field, keeping last");
                }
            }
            if let Some(previous) = table.insert(site) {
                tracing::warn!(site = previous.id(), "duplicate site id, keeping last");
            }
        }
        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let file = SitesFile {
            sites: self
                .sites()
                .iter()
                .map(|s| SiteRecord {
                    id: s.id().to_string(),
                    hosts: s.hosts().to_vec(),
                    fields: s.field_selectors().to_vec(),
                })
                .collect(),
        };
        toml::to_string_pretty(&file).context("serialize sites file")
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read sites file: {}", path.display()))?;
        let table = Self::from_toml_str(&data)
            .with_context(|| format!("load sites file: {}", path.display()))?;
        tracing::info!("loaded {} site(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Write the table as a sites file (creates parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let toml = self.to_toml_string()?;
        std::fs::write(path, toml)
            .with_context(|| format!("write sites file: {}", path.display()))?;
        Ok(())
    }
}
