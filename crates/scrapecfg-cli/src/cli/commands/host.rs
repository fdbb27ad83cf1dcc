//! `scrapecfg host <url>` – print a URL's host.

use anyhow::Result;
use scrapecfg_core::url_host;

pub fn run_host(url: &str) -> Result<()> {
    let host = url_host::extract_host(url)?;
    println!("{host}");
    Ok(())
}
