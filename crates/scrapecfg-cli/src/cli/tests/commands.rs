//! Tests for the default run and each subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_no_subcommand() {
    let cli = parse(&["scrapecfg"]);
    assert!(cli.command.is_none());
    assert!(cli.sites.is_none());
}

#[test]
fn cli_parse_sites() {
    match parse(&["scrapecfg", "sites"]).command {
        Some(CliCommand::Sites { json }) => assert!(!json),
        _ => panic!("expected Sites"),
    }
}

#[test]
fn cli_parse_sites_json() {
    match parse(&["scrapecfg", "sites", "--json"]).command {
        Some(CliCommand::Sites { json }) => assert!(json),
        _ => panic!("expected Sites with --json"),
    }
}

#[test]
fn cli_parse_host() {
    match parse(&["scrapecfg", "host", "https://example.com:8080/x"]).command {
        Some(CliCommand::Host { url }) => assert_eq!(url, "https://example.com:8080/x"),
        _ => panic!("expected Host"),
    }
}

#[test]
fn cli_parse_host_requires_url() {
    assert!(Cli::try_parse_from(["scrapecfg", "host"]).is_err());
}

#[test]
fn cli_parse_match() {
    match parse(&["scrapecfg", "match", "https://udn.com/news"]).command {
        Some(CliCommand::Match { url }) => assert_eq!(url, "https://udn.com/news"),
        _ => panic!("expected Match"),
    }
}

#[test]
fn cli_parse_export_sites() {
    match parse(&["scrapecfg", "export-sites", "/tmp/sites.toml"]).command {
        Some(CliCommand::ExportSites { path }) => {
            assert_eq!(path, Path::new("/tmp/sites.toml"))
        }
        _ => panic!("expected ExportSites"),
    }
}

#[test]
fn cli_parse_global_sites_flag() {
    let cli = parse(&["scrapecfg", "--sites", "my.toml"]);
    assert_eq!(cli.sites.as_deref(), Some(Path::new("my.toml")));
    assert!(cli.command.is_none());

    let cli = parse(&["scrapecfg", "match", "https://udn.com/", "--sites", "my.toml"]);
    assert_eq!(cli.sites.as_deref(), Some(Path::new("my.toml")));
    assert!(matches!(cli.command, Some(CliCommand::Match { .. })));
}

#[test]
fn cli_parse_unknown_subcommand() {
    assert!(Cli::try_parse_from(["scrapecfg", "fetch", "https://udn.com/"]).is_err());
}
