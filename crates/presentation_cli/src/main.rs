//! SchoolPass CLI
//!
//! Suggests school bus routes for students from the command line.

#![allow(clippy::print_stdout)]

mod app;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use application::{StrategySelection, StudentRouteRequest};
use clap::{Parser, Subcommand};
use domain::{AddressQuery, GeoLocation, MatchResult};
use infrastructure::init_logging;

use crate::report::ResolutionReport;

/// SchoolPass CLI
#[derive(Parser)]
#[command(name = "schoolpass-cli")]
#[command(author, version, about = "School transit pass route assignment", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./schoolpass.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a route for one student
    ///
    /// Example: schoolpass-cli resolve --school "EMEF Rui Barbosa" --neighborhood Mariluz
    Resolve {
        /// Destination school
        #[arg(long)]
        school: String,

        /// Street name (only used for geocoding)
        #[arg(long, default_value = "")]
        street: String,

        /// House number
        #[arg(long, default_value = "")]
        number: String,

        /// Neighborhood (bairro)
        #[arg(long, default_value = "")]
        neighborhood: String,

        /// City (default from geocoding configuration)
        #[arg(long)]
        city: Option<String>,

        /// State (default from geocoding configuration)
        #[arg(long)]
        state: Option<String>,

        /// Home latitude, skips geocoding
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Home longitude, skips geocoding
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Matching strategy: auto, itinerary or geo
        #[arg(long)]
        strategy: Option<StrategySelection>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest routes for every student in a JSON file
    ///
    /// The file holds an array of `{"address": {...}, "school": "...",
    /// "coordinates": {"latitude": .., "longitude": ..}}` objects.
    ResolveBatch {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Matching strategy: auto, itinerary or geo
        #[arg(long)]
        strategy: Option<StrategySelection>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the routes of the configured catalog
    Routes,

    /// Load and validate a route catalog
    CheckCatalog {
        /// Catalog file (default: the configured one)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

/// Determine log filter level from verbosity count
///
/// `None` keeps the configured filter.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Assemble a request from `resolve` arguments
#[allow(clippy::too_many_arguments)]
fn build_request(
    school: String,
    street: String,
    number: String,
    neighborhood: String,
    city: Option<String>,
    state: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<StudentRouteRequest> {
    let mut address = AddressQuery::new(street, number, neighborhood);
    if let Some(city) = city {
        address = address.with_city(city);
    }
    if let Some(state) = state {
        address = address.with_state(state);
    }

    let mut request = StudentRouteRequest::new(address, school);
    if let (Some(lat), Some(lon)) = (lat, lon) {
        let home = GeoLocation::new(lat, lon).context("invalid --lat/--lon")?;
        request = request.with_coordinates(home);
    }
    Ok(request)
}

fn print_results(
    requests: &[StudentRouteRequest],
    results: &[MatchResult],
    json: bool,
    batch: bool,
) -> anyhow::Result<()> {
    if json {
        let reports: Vec<ResolutionReport<'_>> = requests
            .iter()
            .zip(results)
            .enumerate()
            .map(|(i, (request, result))| {
                ResolutionReport::new(batch.then_some(i), &request.school, result)
            })
            .collect();
        if batch {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else if let Some(report) = reports.first() {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        return Ok(());
    }

    for (i, (request, result)) in requests.iter().zip(results).enumerate() {
        if batch {
            println!("#{} {}", i + 1, request.school);
        }
        println!("{}", report::describe(result));
    }

    if batch {
        let found = results.iter().filter(|r| r.is_ok()).count();
        println!();
        println!("📊 {found}/{} students assigned", results.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = app::load_config(cli.config.as_deref())?;
    init_logging(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Resolve {
            school,
            street,
            number,
            neighborhood,
            city,
            state,
            lat,
            lon,
            strategy,
            json,
        } => {
            let request =
                build_request(school, street, number, neighborhood, city, state, lat, lon)?;
            let resolver = app::build_resolver(&config, strategy)?;
            let result = resolver.resolve_route(&request).await;

            print_results(&[request], &[result], json, false)?;
        },

        Commands::ResolveBatch {
            input,
            strategy,
            json,
        } => {
            let contents = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let requests: Vec<StudentRouteRequest> = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse {}", input.display()))?;

            let resolver = app::build_resolver(&config, strategy)?;
            let results = resolver.resolve_batch(&requests).await;

            print_results(&requests, &results, json, true)?;
        },

        Commands::Routes => {
            let catalog = app::load_route_catalog(&config, None)?;
            println!("🗺️  {} routes, {} schools:", catalog.routes().len(), catalog.schools().len());
            for line in report::describe_routes(&catalog) {
                println!("{line}");
            }
        },

        Commands::CheckCatalog { path } => {
            let catalog = app::load_route_catalog(&config, path.as_deref())?;
            println!("✅ Catalog is valid");
            println!("   🚌 Routes: {}", catalog.routes().len());
            println!("   🏫 Schools: {}", catalog.schools().len());
            if !catalog.has_stop_data() {
                println!("   ⚠️  No GPS stops: only itinerary matching is available");
            }
            for school in catalog.schools().iter() {
                println!("   📍 {}: {}", school.name, school.location);
            }
        },
    }

    Ok(())
}
