use cephalo_analysis::analyze;
use cephalo_types::{AnalysisConfig, LandmarkKey, LandmarkMap, MeasureKey, PatientData, Point};
use proptest::prelude::*;

fn sparse_map() -> impl Strategy<Value = LandmarkMap> {
    proptest::collection::vec(
        (0..LandmarkKey::ALL.len(), -300.0f64..300.0, -300.0f64..300.0),
        0..30,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(i, x, y)| (LandmarkKey::ALL[i], Point::new(x, y)))
            .collect()
    })
}

proptest! {
    #[test]
    fn any_landmark_subset_yields_complete_table(
        points in sparse_map(),
        factor in prop_oneof![Just(None), (0.01f64..1.0).prop_map(Some)],
    ) {
        let result = analyze(&points, factor, &PatientData::default(), AnalysisConfig::default());
        prop_assert_eq!(result.measures.len(), MeasureKey::ALL.len());
        for row in &result.measures {
            if let Some(v) = row.value {
                prop_assert!(v.is_finite());
            }
            if row.value.is_none() {
                prop_assert!(!row.interpretation.is_determinate());
            }
        }
        prop_assert!(!result.clinical_summary.is_empty());
    }

    #[test]
    fn anb_row_matches_composition(points in sparse_map()) {
        let result = analyze(&points, None, &PatientData::default(), AnalysisConfig::default());
        let expected = result.steiner.sna.zip(result.steiner.snb).map(|(a, b)| a - b);
        prop_assert_eq!(result.steiner.anb, expected);
    }
}
