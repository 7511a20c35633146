//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_target_short_and_long() {
    let cli = parse(&["urlsize", "-t", "https://example.com/file.iso"]);
    assert_eq!(cli.target.as_deref(), Some("https://example.com/file.iso"));
    assert!(cli.source.is_none());
    assert!(cli.dest.is_none());

    let cli = parse(&["urlsize", "--target", "https://example.com/file.iso"]);
    assert_eq!(cli.target.as_deref(), Some("https://example.com/file.iso"));
}

#[test]
fn cli_parse_source() {
    let cli = parse(&["urlsize", "-s", "targets.json"]);
    assert_eq!(cli.source.as_deref(), Some(Path::new("targets.json")));
    assert!(cli.target.is_none());

    let cli = parse(&["urlsize", "--source", "targets.json"]);
    assert_eq!(cli.source.as_deref(), Some(Path::new("targets.json")));
}

#[test]
fn cli_parse_dest() {
    let cli = parse(&["urlsize", "-t", "https://example.com/x", "-d", "out.json"]);
    assert_eq!(cli.dest.as_deref(), Some(Path::new("out.json")));

    let cli = parse(&["urlsize", "-t", "https://example.com/x", "--dest", "out.json"]);
    assert_eq!(cli.dest.as_deref(), Some(Path::new("out.json")));
}

#[test]
fn cli_parse_all_flags_together() {
    let cli = parse(&[
        "urlsize",
        "--target",
        "https://example.com/x",
        "--source",
        "targets.json",
        "--dest",
        "out.json",
    ]);
    assert_eq!(cli.target.as_deref(), Some("https://example.com/x"));
    assert_eq!(cli.source.as_deref(), Some(Path::new("targets.json")));
    assert_eq!(cli.dest.as_deref(), Some(Path::new("out.json")));
}

#[test]
fn cli_no_args_shows_help() {
    let err = Cli::try_parse_from(["urlsize"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn cli_dest_alone_still_parses() {
    // Only --dest given: parses fine; the handler then reports No URL Specified.
    let cli = parse(&["urlsize", "-d", "out.json"]);
    assert!(cli.target.is_none());
    assert!(cli.source.is_none());
    assert_eq!(cli.dest.as_deref(), Some(Path::new("out.json")));
}
