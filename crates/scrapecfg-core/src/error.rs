//! Error types for URL host extraction.

use thiserror::Error;

/// Failure to turn a string into a host.
#[derive(Debug, Error)]
pub enum HostError {
    /// The string is not an absolute URL.
    #[error("invalid URL {url:?}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no host (e.g. `mailto:` or `data:` URLs).
    #[error("URL has no host: {url}")]
    MissingHost { url: String },
}
