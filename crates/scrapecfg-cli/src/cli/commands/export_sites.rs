//! `scrapecfg export-sites <path>` – write the active table as a sites file.

use anyhow::Result;
use scrapecfg_core::site::SiteTable;
use std::path::Path;

pub fn run_export_sites(table: &SiteTable, path: &Path) -> Result<()> {
    table.save_to_path(path)?;
    println!("Wrote {} site(s) to {}", table.len(), path.display());
    Ok(())
}
