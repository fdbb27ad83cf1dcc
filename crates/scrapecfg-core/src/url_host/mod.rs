//! URL host extraction.
//!
//! Decomposes an absolute URL into the pieces the rest of the crate cares
//! about and reports its host: the hostname, plus `:port` when the URL names
//! a port other than the scheme default.

use crate::error::HostError;

/// URL whose host the default run prints.
pub const SAMPLE_URL: &str = "https://fakenews.example-news.com:8080/post/business/168936864";

/// Components of a parsed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Hostname as normalised by the URL parser (lowercase for web schemes,
    /// brackets kept for IPv6 literals).
    pub hostname: String,
    /// Explicit non-default port. A port equal to the scheme default is
    /// dropped during parsing.
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
}

impl UrlParts {
    /// `hostname` or `hostname:port`.
    pub fn host(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.hostname, port),
            None => self.hostname.clone(),
        }
    }
}

/// Parse `url` into its components.
///
/// Fails with [`HostError::Parse`] when `url` is not an absolute URL and with
/// [`HostError::MissingHost`] when it parses but has no host.
pub fn parse_url(url: &str) -> Result<UrlParts, HostError> {
    let parsed = url::Url::parse(url).map_err(|source| HostError::Parse {
        url: url.to_string(),
        source,
    })?;

    let hostname = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| HostError::MissingHost {
            url: url.to_string(),
        })?
        .to_string();

    Ok(UrlParts {
        scheme: parsed.scheme().to_string(),
        hostname,
        port: parsed.port(),
        path: parsed.path().to_string(),
        query: parsed.query().map(str::to_string),
    })
}

/// Host of `url`, e.g. `"example.com"` or `"example.com:8080"`.
pub fn extract_host(url: &str) -> Result<String, HostError> {
    let parts = parse_url(url)?;
    let host = parts.host();
    tracing::debug!(%url, %host, "extracted host");
    Ok(host)
}
