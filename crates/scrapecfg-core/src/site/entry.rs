//! A single site's field → selector mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical field and where to find it on a site's pages.
///
/// `selector == None` means the field is not scraped for this site, which is
/// not the same thing as an empty selector string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Selector configuration for one site.
///
/// Field names are unique and keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    id: String,
    hosts: Vec<String>,
    fields: Vec<FieldSelector>,
}

impl SiteConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hosts: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Builder form of [`SiteConfig::insert_field`].
    pub fn with_field(mut self, name: impl Into<String>, selector: Option<&str>) -> Self {
        self.insert_field(name, selector.map(str::to_string));
        self
    }

    /// Builder form of [`SiteConfig::add_host`].
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.add_host(host);
        self
    }

    /// Set the selector for `name`. An existing field keeps its position and
    /// gets the new selector; the previous one is returned.
    pub fn insert_field(
        &mut self,
        name: impl Into<String>,
        selector: Option<String>,
    ) -> Option<Option<String>> {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            return Some(std::mem::replace(&mut existing.selector, selector));
        }
        self.fields.push(FieldSelector { name, selector });
        None
    }

    /// Register a URL host this configuration applies to. Duplicates
    /// (ignoring ASCII case) are ignored.
    pub fn add_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        if !self.hosts.iter().any(|h| h.eq_ignore_ascii_case(&host)) {
            self.hosts.push(host);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn field_selectors(&self) -> &[FieldSelector] {
        &self.fields
    }

    /// `(field name, selector)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.selector.as_deref()))
    }

    /// Outer `None`: the site has no such field. Inner `None`: the field is
    /// declared but not scraped.
    pub fn selector(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.selector.as_deref())
    }

    pub fn serves_host(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

/// `a {title: "#title", reporter: null}`
impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.id)?;
        for (i, (name, selector)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match selector {
                Some(sel) => write!(f, "{name}: {sel:?}")?,
                None => write!(f, "{name}: null")?,
            }
        }
        write!(f, "}}")
    }
}
