//! `scrapecfg` with no subcommand: dump the site table, then the sample host.

use anyhow::Result;
use scrapecfg_core::site::SiteTable;

use super::{run_host, run_sites};

/// The two steps are independent; a bad sample URL fails only after the
/// table has been printed.
pub fn run_default(table: &SiteTable, sample_url: &str) -> Result<()> {
    run_sites(table, false)?;
    run_host(sample_url)
}
