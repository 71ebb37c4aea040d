use anyhow::{Result, bail};
use cephalo_calibration::{CalibrationStatus, Calibrator};

use crate::cli::CalibrateArgs;

pub(crate) fn handle(args: CalibrateArgs) -> Result<()> {
    let calibrator = Calibrator::new(args.known_mm);
    calibrator.add_point(args.p1);
    match calibrator.add_point(args.p2) {
        CalibrationStatus::Calibrated(mm_per_px) => {
            println!("mm_per_px: {mm_per_px}");
            if let Some(label) = calibrator.scale_label() {
                println!("scale: {label}");
            }
            Ok(())
        }
        CalibrationStatus::Rejected | CalibrationStatus::Pending => bail!(
            "Calibration rejected: points must differ and --known-mm must be positive (got {})",
            args.known_mm
        ),
    }
}
