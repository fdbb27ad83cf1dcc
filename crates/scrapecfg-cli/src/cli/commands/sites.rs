//! `scrapecfg sites` – print the active site table.

use anyhow::{Context, Result};
use scrapecfg_core::site::SiteTable;

pub fn run_sites(table: &SiteTable, json: bool) -> Result<()> {
    if json {
        let out = table.to_json_pretty().context("serialize site table")?;
        println!("{out}");
        return Ok(());
    }
    for line in table.render_lines() {
        println!("{line}");
    }
    Ok(())
}
