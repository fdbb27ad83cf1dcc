//! `scrapecfg match <url>` – find the site configured for a URL's host.

use anyhow::Result;
use scrapecfg_core::site::SiteTable;
use scrapecfg_core::url_host;

pub fn run_match(table: &SiteTable, url: &str) -> Result<()> {
    match table.match_url(url)? {
        Some(site) => println!("{}", site.id()),
        None => {
            let host = url_host::extract_host(url)?;
            println!("no site configured for {host}");
        }
    }
    Ok(())
}
