//! CLI command handlers, one per file.

mod default;
mod export_sites;
mod host;
mod match_url;
mod sites;

pub use default::run_default;
pub use export_sites::run_export_sites;
pub use host::run_host;
pub use match_url::run_match;
pub use sites::run_sites;
