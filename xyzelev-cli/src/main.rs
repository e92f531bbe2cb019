use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Convert ECEF XYZ coordinates to an elevation using the NOAA NGS services
#[derive(Parser)]
#[command(name = "xyzelev")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// NCAT XYZ conversion endpoint
    #[arg(long, env = "XYZELEV_NCAT_URL", global = true)]
    ncat_url: Option<String>,

    /// GEOID height endpoint
    #[arg(long, env = "XYZELEV_GEOID_URL", global = true)]
    geoid_url: Option<String>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the elevation for an XYZ coordinate (prompts when no coordinates are given)
    Elevation {
        /// X coordinate in meters (commas allowed)
        #[arg(long, allow_hyphen_values = true, requires_all = ["y", "z"])]
        x: Option<String>,

        /// Y coordinate in meters (commas allowed)
        #[arg(long, allow_hyphen_values = true, requires_all = ["x", "z"])]
        y: Option<String>,

        /// Z coordinate in meters (commas allowed)
        #[arg(long, allow_hyphen_values = true, requires_all = ["x", "y"])]
        z: Option<String>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert XYZ to latitude, longitude and ellipsoid height only
    Convert {
        /// X coordinate in meters
        #[arg(long, allow_hyphen_values = true)]
        x: String,

        /// Y coordinate in meters
        #[arg(long, allow_hyphen_values = true)]
        y: String,

        /// Z coordinate in meters
        #[arg(long, allow_hyphen_values = true)]
        z: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Look up the geoid height for a latitude/longitude
    Geoid {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "xyzelev=debug"
    } else {
        "xyzelev=error"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let endpoints = commands::Endpoints {
        ncat_url: cli.ncat_url,
        geoid_url: cli.geoid_url,
    };

    match cli.command {
        None => commands::elevation::run(&endpoints, None, false),
        Some(Commands::Elevation { x, y, z, json }) => {
            let coords = match (x, y, z) {
                (Some(x), Some(y), Some(z)) => Some((x, y, z)),
                _ => None,
            };
            commands::elevation::run(&endpoints, coords, json)
        }
        Some(Commands::Convert { x, y, z, json }) => {
            commands::convert::run(&endpoints, &x, &y, &z, json)
        }
        Some(Commands::Geoid { lat, lon, json }) => {
            commands::geoid::run(&endpoints, lat, lon, json)
        }
    }
}
