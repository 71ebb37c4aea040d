use cephalo_analysis::analyze;
use cephalo_format::{OutputFormat, render};
use cephalo_types::{AnalysisConfig, LandmarkKey as L, LandmarkMap, PatientData};

fn steiner_fixture() -> cephalo_types::FullAnalysisResults {
    let points = LandmarkMap::new()
        .with(L::S, 0.0, 0.0)
        .with(L::N, 0.0, -10.0)
        .with(L::A, 10.0, -10.0)
        .with(L::B, 5.0, -10.0);
    let config = AnalysisConfig {
        steiner: true,
        bjork: false,
        extended: false,
    };
    analyze(&points, None, &PatientData::default(), config)
}

#[test]
fn snapshot_md_steiner_fixture() {
    let text = render(&steiner_fixture(), OutputFormat::Md).unwrap();
    insta::assert_snapshot!("md_steiner_fixture", text);
}

#[test]
fn json_uses_null_for_unavailable_values() {
    let text = render(&steiner_fixture(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["steiner"]["sn_gogn"].is_null());
    assert!(value["soft"]["e_line_li"].is_null());
    assert_eq!(value["soft"]["linear_unit"], "px");
    assert_eq!(value["measures"].as_array().unwrap().len(), 11);
    assert_eq!(value["measures"][0]["key"], "SNA");
    assert_eq!(value["measures"][0]["interpretation"], "above");
    assert!(value["measures"][3]["value"].is_null());
}

#[test]
fn json_round_trips_into_results() {
    let results = steiner_fixture();
    let text = render(&results, OutputFormat::Json).unwrap();
    let back: cephalo_types::FullAnalysisResults = serde_json::from_str(&text).unwrap();
    assert_eq!(back.measures.len(), results.measures.len());
    assert_eq!(back.clinical_summary, results.clinical_summary);
}

#[test]
fn md_lists_occlusal_reference_when_resolved() {
    let points = LandmarkMap::new()
        .with(L::S, 0.0, 0.0)
        .with(L::N, 10.0, 0.0)
        .with(L::Po, 0.0, 5.0)
        .with(L::Or, 10.0, 6.0);
    let results = analyze(&points, None, &PatientData::default(), AnalysisConfig::default());
    let text = render(&results, OutputFormat::Md).unwrap();
    assert!(text.contains("Occlusal reference: Po-Or (Frankfort horizontal)"));
}
