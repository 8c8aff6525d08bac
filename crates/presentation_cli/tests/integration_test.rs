//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "schoolpass-cli")]
#[command(author, version, about = "School transit pass route assignment", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Resolve {
        #[arg(long)]
        school: String,
        #[arg(long, default_value = "")]
        street: String,
        #[arg(long, default_value = "")]
        number: String,
        #[arg(long, default_value = "")]
        neighborhood: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        #[arg(long)]
        strategy: Option<String>,
        #[arg(long)]
        json: bool,
    },
    ResolveBatch {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        strategy: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Routes,
    CheckCatalog {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_resolve_by_neighborhood() {
    let cli = parse_args(&[
        "schoolpass-cli",
        "resolve",
        "--school",
        "EMEF Rui Barbosa",
        "--neighborhood",
        "Mariluz",
    ])
    .unwrap();

    if let Commands::Resolve {
        school,
        neighborhood,
        street,
        lat,
        json,
        ..
    } = cli.command
    {
        assert_eq!(school, "EMEF Rui Barbosa");
        assert_eq!(neighborhood, "Mariluz");
        assert!(street.is_empty());
        assert!(lat.is_none());
        assert!(!json);
    } else {
        panic!("Expected Resolve command");
    }
}

#[test]
fn cli_resolve_requires_school() {
    let result = parse_args(&["schoolpass-cli", "resolve", "--neighborhood", "Mariluz"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_full_address() {
    let cli = parse_args(&[
        "schoolpass-cli",
        "resolve",
        "--school",
        "EMEI Vó Rosa",
        "--street",
        "Rua das Gaivotas",
        "--number",
        "120",
        "--neighborhood",
        "Mariluz",
        "--city",
        "Imbé",
        "--state",
        "RS",
        "--json",
    ])
    .unwrap();

    if let Commands::Resolve {
        street,
        number,
        city,
        state,
        json,
        ..
    } = cli.command
    {
        assert_eq!(street, "Rua das Gaivotas");
        assert_eq!(number, "120");
        assert_eq!(city.as_deref(), Some("Imbé"));
        assert_eq!(state.as_deref(), Some("RS"));
        assert!(json);
    } else {
        panic!("Expected Resolve command");
    }
}

#[test]
fn cli_coordinates_come_in_pairs() {
    let result = parse_args(&[
        "schoolpass-cli",
        "resolve",
        "--school",
        "X",
        "--lon",
        "-50.13",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_resolve_batch() {
    let cli = parse_args(&[
        "schoolpass-cli",
        "resolve-batch",
        "--input",
        "students.json",
        "--strategy",
        "itinerary",
    ])
    .unwrap();

    if let Commands::ResolveBatch {
        input,
        strategy,
        json,
    } = cli.command
    {
        assert_eq!(input, PathBuf::from("students.json"));
        assert_eq!(strategy.as_deref(), Some("itinerary"));
        assert!(!json);
    } else {
        panic!("Expected ResolveBatch command");
    }
}

#[test]
fn cli_parses_routes() {
    let cli = parse_args(&["schoolpass-cli", "routes"]).unwrap();
    assert!(matches!(cli.command, Commands::Routes));
}

#[test]
fn cli_parses_check_catalog_with_path() {
    let cli = parse_args(&["schoolpass-cli", "check-catalog", "-p", "routes.json"]).unwrap();
    if let Commands::CheckCatalog { path } = cli.command {
        assert_eq!(path, Some(PathBuf::from("routes.json")));
    } else {
        panic!("Expected CheckCatalog command");
    }
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = parse_args(&[
        "schoolpass-cli",
        "routes",
        "--config",
        "/etc/schoolpass.toml",
        "-vv",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/schoolpass.toml")));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["schoolpass-cli", "status"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["schoolpass-cli"]).is_err());
}
