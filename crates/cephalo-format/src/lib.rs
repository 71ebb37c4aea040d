//! # cephalo-format
//!
//! Rendering for analysis results.

use anyhow::Result;
use cephalo_types::{FullAnalysisResults, MeasureResult, OcclusalReference};
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Md,
    Json,
}

pub fn render(results: &FullAnalysisResults, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(render_md(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

const UNAVAILABLE: &str = "—";

fn fmt2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => UNAVAILABLE.to_string(),
    }
}

fn render_row(row: &MeasureResult) -> String {
    format!(
        "| {} | {} | {} | {:.2} ± {:.2} | {} | {} |\n",
        row.label,
        fmt2(row.value),
        row.units,
        row.norm.mean,
        row.norm.sd,
        fmt2(row.z_score),
        row.interpretation
    )
}

fn render_md(results: &FullAnalysisResults) -> String {
    let mut out = String::new();
    out.push_str("# Cephalometric analysis\n\n");

    out.push_str("| Measure | Value | Units | Norm | Z | Interpretation |\n");
    out.push_str("|---|---:|---|---:|---:|---|\n");
    for row in &results.measures {
        out.push_str(&render_row(row));
    }
    out.push('\n');

    if let Some(reference) = results.extended.occlusal_reference {
        let label = match reference {
            OcclusalReference::Occlusal => "Oc1-Oc2 (functional occlusal plane)",
            OcclusalReference::Frankfort => "Po-Or (Frankfort horizontal)",
        };
        out.push_str(&format!("Occlusal reference: {label}\n\n"));
    }

    out.push_str("## Summary\n\n");
    out.push_str(&results.clinical_summary);
    out.push('\n');
    out
}
