//! Ordered collection of site configurations.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::entry::{FieldSelector, SiteConfig};
use crate::error::HostError;
use crate::url_host;

/// Site id → [`SiteConfig`], in insertion order. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteTable {
    sites: Vec<SiteConfig>,
}

impl SiteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two example sites shipped with the tool.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(
            SiteConfig::new("a")
                .with_field("title", Some("#title"))
                .with_field("content", Some("#content"))
                .with_field("reporter", Some("#reporter_name"))
                .with_field("extra_img_alt", Some("#cover[alt]")),
        );
        table.insert(
            SiteConfig::new("b")
                .with_field("title", Some("#news_title"))
                .with_field("content", Some("#news_content"))
                .with_field("reporter", None)
                .with_field("extra_image_cover_alt", Some("#img_cover[alt]"))
                .with_field("extra_image_sub_alt", Some("#img_sub[alt]")),
        );
        table
    }

    /// Add `site`, replacing (in place) any entry with the same id.
    /// Returns the replaced entry.
    pub fn insert(&mut self, site: SiteConfig) -> Option<SiteConfig> {
        match self.sites.iter_mut().find(|s| s.id() == site.id()) {
            Some(existing) => Some(std::mem::replace(existing, site)),
            None => {
                self.sites.push(site);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id() == id)
    }

    /// `(site id, config)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteConfig)> + '_ {
        self.sites.iter().map(|s| (s.id(), s))
    }

    pub fn sites(&self) -> &[SiteConfig] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// One display line per site, e.g. `a {title: "#title", ...}`.
    pub fn render_lines(&self) -> Vec<String> {
        self.sites.iter().map(ToString::to_string).collect()
    }

    /// JSON array of `{id, hosts, fields}` objects. Field order is kept and
    /// absent selectors are `null`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let view: Vec<SiteJson<'_>> = self.sites.iter().map(SiteJson).collect();
        serde_json::to_string_pretty(&view)
    }

    /// Site configured for the host of `url`.
    ///
    /// Hosts compare ignoring ASCII case. When the URL carries an explicit
    /// port and no site lists `host:port`, the bare hostname is tried.
    pub fn match_url(&self, url: &str) -> Result<Option<&SiteConfig>, HostError> {
        let parts = url_host::parse_url(url)?;
        let host = parts.host();
        let found = self
            .sites
            .iter()
            .find(|s| s.serves_host(&host))
            .or_else(|| {
                parts.port?;
                self.sites.iter().find(|s| s.serves_host(&parts.hostname))
            });
        match found {
            Some(site) => tracing::debug!(%host, site = site.id(), "matched site"),
            None => tracing::debug!(%host, "no site for host"),
        }
        Ok(found)
    }
}

struct SiteJson<'a>(&'a SiteConfig);

struct FieldsJson<'a>(&'a [FieldSelector]);

impl Serialize for SiteJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Site", 3)?;
        s.serialize_field("id", self.0.id())?;
        s.serialize_field("hosts", self.0.hosts())?;
        s.serialize_field("fields", &FieldsJson(self.0.field_selectors()))?;
        s.end()
    }
}

impl Serialize for FieldsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|f| (&f.name, &f.selector)))
    }
}
