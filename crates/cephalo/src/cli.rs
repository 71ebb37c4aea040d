use std::path::PathBuf;

use cephalo_format::OutputFormat;
use cephalo_types::Point;
use clap::{Args, Parser, Subcommand};

/// Cephalometric analysis from digitized landmarks.
#[derive(Parser, Debug)]
#[command(name = "cephalo", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis on a landmark file.
    Analyze(AnalyzeArgs),
    /// Compute a mm/px factor from two reference points.
    Calibrate(CalibrateArgs),
    /// Print the effective norm table as JSON.
    Norms(NormsArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON object mapping landmark codes to `{ "x": .., "y": .. }`.
    #[arg(long)]
    pub landmarks: PathBuf,

    /// Calibration factor in millimeters per pixel.
    #[arg(long)]
    pub mm_per_px: Option<f64>,

    /// JSON patient record (name, age, sex, date, doctor).
    #[arg(long)]
    pub patient: Option<PathBuf>,

    /// TOML config with `[analysis]` switches and `[norms.*]` overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub no_steiner: bool,

    #[arg(long)]
    pub no_bjork: bool,

    #[arg(long)]
    pub no_extended: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// First reference point as `X,Y` (pixels).
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub p1: Point,

    /// Second reference point as `X,Y` (pixels).
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub p2: Point,

    /// Real distance between the two points, in millimeters.
    #[arg(long, default_value_t = cephalo_calibration::DEFAULT_KNOWN_MM)]
    pub known_mm: f64,
}

#[derive(Args, Debug)]
pub struct NormsArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub(crate) fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x coordinate '{x}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y coordinate '{y}'"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("non-finite point '{s}'"));
    }
    Ok(Point::new(x, y))
}
