use std::path::Path;

use anyhow::{Context, Result};
use cephalo_analysis::analyze_with_norms;
use cephalo_format::render;
use cephalo_types::{LandmarkMap, PatientData};
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::config::CephaloConfig;

pub(crate) fn handle(args: AnalyzeArgs) -> Result<()> {
    let config = CephaloConfig::load(args.config.as_deref())?;
    let norms = config.norm_table()?;

    let mut switches = config.analysis;
    switches.steiner &= !args.no_steiner;
    switches.bjork &= !args.no_bjork;
    switches.extended &= !args.no_extended;

    let points: LandmarkMap = read_json(&args.landmarks, "landmarks")?;
    let patient: PatientData = match args.patient.as_deref() {
        Some(path) => read_json(path, "patient")?,
        None => PatientData::default(),
    };

    info!(
        landmarks = points.len(),
        mm_per_px = ?args.mm_per_px,
        "running analysis"
    );
    let results = analyze_with_norms(&points, args.mm_per_px, &patient, switches, &norms);
    let output = render(&results, args.format)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {what} JSON {}", path.display()))
}
