use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NDVI Watch - parcel vegetation monitoring
#[derive(Parser, Debug)]
#[command(name = "ndvi")]
#[command(about = "Compute NDVI trends and degradation scores for land parcels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./ndvi.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL (e.g., http://localhost:7860)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory where downloaded reports are saved
    #[arg(long, global = true, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session
    Shell(ShellArgs),

    /// Log in, analyze one parcel and exit
    Analyze(AnalyzeArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct ShellArgs {
    /// Pre-fill the email prompt
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Create the account instead of logging in
    #[arg(long)]
    pub signup: bool,

    /// Parcel as a GeoJSON file or inline GeoJSON string
    /// Example: --parcel field.geojson
    /// Example: --parcel '{"type":"Polygon","coordinates":[[[30.0,-2.0],[30.1,-2.0],[30.1,-1.9],[30.0,-2.0]]]}'
    #[arg(long, value_name = "GEOJSON", conflicts_with = "bbox")]
    pub parcel: Option<String>,

    /// Rectangular parcel as min_lon,min_lat,max_lon,max_lat
    #[arg(long, value_name = "BBOX", allow_hyphen_values = true)]
    pub bbox: Option<String>,

    /// Parcel name stored with the analysis
    #[arg(long)]
    pub name: Option<String>,

    /// Print the NDVI trend chart
    #[arg(long)]
    pub chart: bool,

    /// Download the PDF report into the report directory
    #[arg(long)]
    pub report: bool,

    /// Request the NDVI map overlay URL
    #[arg(long)]
    pub ndvi_map: bool,
}
