//! Geohash CLI
//!
//! Thin command-line front end over `geohash-core`.
//!
//! # Commands
//!
//! - `encode "lat, lng"`: print the 12-character geohash
//! - `decode <geohash>`: print `lat, lng` (4 decimals by default)
//! - `bbox "lat, lng, radius_km"`: print `min_lat, max_lat, min_lng, max_lng`
//! - `distance "lat1, lng1, lat2, lng2"`: print the great-circle distance in km
//! - `length <radius_km>`: print the geohash length suited to a search radius
//!
//! When the input argument is omitted it is read from stdin (last
//! non-empty line), so `echo "21.0278, 105.8342" | geohash encode` works.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geohash_core::settings::OutputFormat;
use geohash_core::{Command, GeohashCore};
use log::{debug, LevelFilter};

mod config;

/// Geohash encoder/decoder
#[derive(Parser)]
#[command(name = "geohash")]
#[command(about = "Encode coordinates as geohashes and decode them back", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON settings file ({"decimal_places": 4, "format": "plain"})
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for printed coordinates and distances
    #[arg(long, global = true)]
    decimals: Option<u8>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode "lat, lng" into a geohash
    #[command(visible_alias = "e")]
    Encode {
        /// Coordinates as "lat, lng" (read from stdin if omitted)
        input: Option<String>,
    },
    /// Decode a geohash into "lat, lng"
    #[command(visible_alias = "d")]
    Decode {
        /// Geohash of 1 to 12 characters (read from stdin if omitted)
        input: Option<String>,
    },
    /// Bounding box around a point: "lat, lng, radius_km"
    Bbox {
        /// Centre and radius as "lat, lng, radius_km"
        input: Option<String>,
    },
    /// Great-circle distance: "lat1, lng1, lat2, lng2"
    Distance {
        /// Two points as "lat1, lng1, lat2, lng2"
        input: Option<String>,
    },
    /// Geohash length for a search radius in km
    Length {
        /// Radius in kilometres
        input: Option<String>,
    },
}

impl Commands {
    fn split(self) -> (Command, Option<String>) {
        match self {
            Self::Encode { input } => (Command::Encode, input),
            Self::Decode { input } => (Command::Decode, input),
            Self::Bbox { input } => (Command::BoundingBox, input),
            Self::Distance { input } => (Command::Distance, input),
            Self::Length { input } => (Command::EstimateLength, input),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let mut settings = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::OutputSettings::default(),
    };
    if let Some(decimals) = cli.decimals {
        settings.decimal_places = decimals;
    }
    if cli.json {
        settings.format = OutputFormat::Json;
    }
    debug!("output settings: {settings:?}");

    let (command, input) = cli.command.split();
    let input = match input {
        Some(input) => input,
        None => read_last_line(io::stdin().lock())
            .context("failed to read input from stdin")?
            .with_context(|| format!("no input given; expected \"{}\"", command.usage()))?,
    };

    let core = GeohashCore::new(settings);
    core.execute(command, &input)
        .with_context(|| format!("{command} failed"))
}

/// Returns the last non-empty line of `reader`, trimmed.
fn read_last_line(reader: impl BufRead) -> io::Result<Option<String>> {
    let mut last = None;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            last = Some(line.to_string());
        }
    }
    Ok(last)
}
