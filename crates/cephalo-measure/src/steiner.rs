//! Steiner analysis.

use cephalo_calibration::LinearScale;
use cephalo_geometry::{
    acute_angle_between_lines, angle_between, angle_between_lines, point_line_distance_signed,
};
use cephalo_types::{LandmarkKey as L, LandmarkMap, SteinerResults};

use crate::landmarks;

pub fn compute_steiner(points: &LandmarkMap, mm_per_px: Option<f64>) -> SteinerResults {
    let scale = LinearScale::from_mm_per_px(mm_per_px);

    let sna = landmarks(points, [L::S, L::N, L::A]).and_then(|[s, n, a]| angle_between(n, s, a));
    let snb = landmarks(points, [L::S, L::N, L::B]).and_then(|[s, n, b]| angle_between(n, s, b));
    let anb = sna.zip(snb).map(|(sna, snb)| sna - snb);

    let sn_gogn = landmarks(points, [L::S, L::N, L::Go, L::Gn])
        .and_then(|[s, n, go, gn]| angle_between_lines(s, n, go, gn));

    let u1_na_deg = landmarks(points, [L::U1A, L::U1T, L::N, L::A])
        .and_then(|[apex, tip, n, a]| acute_angle_between_lines(apex, tip, n, a));
    let u1_na_mm = landmarks(points, [L::U1T, L::N, L::A])
        .and_then(|[tip, n, a]| point_line_distance_signed(tip, n, a))
        .map(|d| scale.apply(d.abs()))
        .filter(|v| v.is_finite());

    let l1_nb_deg = landmarks(points, [L::L1A, L::L1T, L::N, L::B])
        .and_then(|[apex, tip, n, b]| acute_angle_between_lines(apex, tip, n, b));
    let l1_nb_mm = landmarks(points, [L::L1T, L::N, L::B])
        .and_then(|[tip, n, b]| point_line_distance_signed(tip, n, b))
        .map(|d| scale.apply(d.abs()))
        .filter(|v| v.is_finite());

    let interincisal = landmarks(points, [L::U1T, L::U1A, L::L1T, L::L1A])
        .and_then(|[ut, ua, lt, la]| angle_between_lines(ut, ua, lt, la));

    // B→N orientation: chin ahead of NB is positive.
    let pg_nb = landmarks(points, [L::Pg, L::B, L::N])
        .and_then(|[pg, b, n]| point_line_distance_signed(pg, b, n))
        .map(|d| scale.apply(d))
        .filter(|v| v.is_finite());

    SteinerResults {
        sna,
        snb,
        anb,
        sn_gogn,
        u1_na_deg,
        u1_na_mm,
        l1_nb_deg,
        l1_nb_mm,
        interincisal,
        pg_nb,
        linear_unit: scale.unit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cephalo_types::Unit;

    fn close(got: Option<f64>, want: f64) -> bool {
        got.is_some_and(|v| (v - want).abs() < 1e-9)
    }

    #[test]
    fn sna_is_measured_at_nasion() {
        let map = LandmarkMap::new()
            .with(L::S, 0.0, 0.0)
            .with(L::N, 0.0, -10.0)
            .with(L::A, 10.0, -20.0);
        let got = compute_steiner(&map, None);
        assert!(close(got.sna, 135.0));
        assert_eq!(got.snb, None);
        assert_eq!(got.anb, None);
    }

    #[test]
    fn incisor_offsets_are_absolute_and_scaled() {
        let map = LandmarkMap::new()
            .with(L::N, 0.0, 0.0)
            .with(L::A, 0.0, 100.0)
            .with(L::U1T, -6.0, 120.0);
        let px = compute_steiner(&map, None);
        assert!(close(px.u1_na_mm, 6.0));
        assert_eq!(px.linear_unit, Unit::Pixels);

        let mm = compute_steiner(&map, Some(0.5));
        assert!(close(mm.u1_na_mm, 3.0));
        assert_eq!(mm.linear_unit, Unit::Millimeters);
    }

    #[test]
    fn pg_nb_keeps_its_sign() {
        let base = LandmarkMap::new()
            .with(L::N, 100.0, 0.0)
            .with(L::B, 100.0, 150.0);
        let ahead = base.clone().with(L::Pg, 104.0, 190.0);
        let behind = base.with(L::Pg, 97.0, 190.0);
        assert!(close(compute_steiner(&ahead, None).pg_nb, 4.0));
        assert!(close(compute_steiner(&behind, None).pg_nb, -3.0));
    }
}
