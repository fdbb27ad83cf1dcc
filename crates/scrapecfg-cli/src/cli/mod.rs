//! CLI for scrapecfg.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrapecfg_core::config;
use std::path::PathBuf;

use commands::{run_default, run_export_sites, run_host, run_match, run_sites};

/// Top-level CLI. Without a subcommand, dumps the site table and then the
/// host of the configured sample URL.
#[derive(Debug, Parser)]
#[command(name = "scrapecfg")]
#[command(about = "Per-site scraping selector tables and URL hosts", long_about = None)]
pub struct Cli {
    /// Load the site table from this TOML file instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub sites: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every site and its field → selector mapping.
    Sites {
        /// Emit JSON instead of one line per site.
        #[arg(long)]
        json: bool,
    },

    /// Print the host (hostname plus non-default port) of a URL.
    Host {
        /// Absolute URL, e.g. https://example.com:8080/path.
        url: String,
    },

    /// Print the id of the site configured for a URL's host.
    Match {
        /// Absolute URL to look up.
        url: String,
    },

    /// Write the active site table as a TOML sites file.
    ExportSites {
        /// Destination file.
        path: PathBuf,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let sites_override = cli.sites.as_deref();

        match cli.command {
            None => run_default(&cfg.site_table(sites_override)?, &cfg.sample_url)?,
            Some(CliCommand::Sites { json }) => run_sites(&cfg.site_table(sites_override)?, json)?,
            Some(CliCommand::Host { url }) => run_host(&url)?,
            Some(CliCommand::Match { url }) => run_match(&cfg.site_table(sites_override)?, &url)?,
            Some(CliCommand::ExportSites { path }) => {
                run_export_sites(&cfg.site_table(sites_override)?, &path)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
