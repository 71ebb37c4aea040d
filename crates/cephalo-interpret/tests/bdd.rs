use cephalo_interpret::build_measures;
use cephalo_norms::{NormOverrides, NormTable};
use cephalo_types::{
    AnalysisConfig, BjorkResults, ExtendedResults, FamilyResults, Interpretation, MeasureKey,
    SoftTissueResults, SteinerResults, Unit,
};

fn results(linear_unit: Unit) -> FamilyResults {
    let mut steiner = SteinerResults::unavailable(linear_unit);
    steiner.sna = Some(86.5);
    steiner.snb = Some(80.0);
    steiner.anb = Some(6.5);
    steiner.u1_na_mm = Some(4.5);

    let bjork = BjorkResults {
        saddle: Some(123.0),
        articular: Some(143.0),
        gonial: Some(130.0),
        sum: Some(396.0),
        jarabak: Some(58.0),
    };

    let mut extended = ExtendedResults::unavailable(linear_unit);
    extended.wits = Some(-4.0);

    FamilyResults {
        steiner,
        bjork,
        soft: SoftTissueResults {
            e_line_li: Some(-2.0),
            linear_unit,
        },
        extended,
    }
}

#[test]
fn given_all_families_when_building_then_rows_follow_table_order() {
    let rows = build_measures(
        &results(Unit::Millimeters),
        &NormTable::standard(),
        &AnalysisConfig::default(),
    );
    let keys: Vec<_> = rows.iter().map(|row| row.key).collect();
    let mut expected = Vec::new();
    expected.extend_from_slice(cephalo_types::Family::Steiner.measures());
    expected.extend_from_slice(cephalo_types::Family::Bjork.measures());
    expected.extend_from_slice(cephalo_types::Family::Extended.measures());
    expected.push(MeasureKey::ELineLi);
    assert_eq!(keys, expected);
}

#[test]
fn given_calibrated_results_when_building_then_rows_are_classified() {
    let rows = build_measures(
        &results(Unit::Millimeters),
        &NormTable::standard(),
        &AnalysisConfig::default(),
    );
    let row = |key| rows.iter().find(|r| r.key == key).unwrap();

    assert_eq!(row(MeasureKey::Sna).interpretation, Interpretation::Above);
    assert_eq!(row(MeasureKey::Sna).units, Unit::Degrees);
    assert_eq!(row(MeasureKey::Snb).interpretation, Interpretation::Normal);
    assert_eq!(row(MeasureKey::Anb).interpretation, Interpretation::Above);
    assert_eq!(row(MeasureKey::U1NaMm).units, Unit::Millimeters);
    assert_eq!(row(MeasureKey::U1NaMm).interpretation, Interpretation::Normal);
    assert_eq!(row(MeasureKey::Jarabak).units, Unit::Percent);
    assert_eq!(row(MeasureKey::Jarabak).interpretation, Interpretation::Below);
    assert_eq!(row(MeasureKey::Wits).interpretation, Interpretation::Below);
    assert_eq!(row(MeasureKey::Wits).z_score, Some(-2.0));
    assert_eq!(row(MeasureKey::Impa).value, None);
    assert_eq!(row(MeasureKey::Impa).interpretation, Interpretation::Indeterminate);
    assert_eq!(row(MeasureKey::ELineLi).interpretation, Interpretation::Normal);
}

#[test]
fn given_uncalibrated_results_when_building_then_linear_rows_stay_in_pixels() {
    let rows = build_measures(
        &results(Unit::Pixels),
        &NormTable::standard(),
        &AnalysisConfig::default(),
    );
    for key in [MeasureKey::U1NaMm, MeasureKey::Wits, MeasureKey::ELineLi] {
        let row = rows.iter().find(|r| r.key == key).unwrap();
        assert_eq!(row.units, Unit::Pixels, "{key}");
        assert_eq!(row.z_score, None, "{key}");
        assert_eq!(row.interpretation, Interpretation::Indeterminate, "{key}");
    }
    let sna = rows.iter().find(|r| r.key == MeasureKey::Sna).unwrap();
    assert_eq!(sna.interpretation, Interpretation::Above);
}

#[test]
fn given_disabled_families_when_building_then_only_soft_row_remains() {
    let config = AnalysisConfig {
        steiner: false,
        bjork: false,
        extended: false,
    };
    let rows = build_measures(&results(Unit::Millimeters), &NormTable::standard(), &config);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, MeasureKey::ELineLi);
}

#[test]
fn given_overridden_norms_when_building_then_rows_use_them() {
    let overrides = NormOverrides::from_toml("[steiner]\nSNA = { mean = 86.0, sd = 3.0 }\n").unwrap();
    let norms = NormTable::standard().with_overrides(&overrides).unwrap();
    let rows = build_measures(&results(Unit::Millimeters), &norms, &AnalysisConfig::default());
    let sna = rows.iter().find(|r| r.key == MeasureKey::Sna).unwrap();
    assert_eq!(sna.norm.mean, 86.0);
    assert_eq!(sna.interpretation, Interpretation::Normal);
}
