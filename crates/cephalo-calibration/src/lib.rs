//! # cephalo-calibration
//!
//! **Tier 1 (Stateful Protocol)**
//!
//! Converts two reference clicks plus a known real-world distance into a
//! millimeters-per-pixel factor.
//!
//! The [`Calibrator`] keeps exactly one current [`CalibrationData`] snapshot
//! in a `watch` channel. Every transition publishes the new snapshot;
//! subscribers only ever see the latest value.
//!
//! [`LinearScale`] is how measurement code turns pixel lengths into
//! millimeters, or keeps pixels when no valid factor exists.

use cephalo_geometry::{Point, distance};
use cephalo_types::{CalibrationData, Unit};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Known distance used when the caller does not supply one.
pub const DEFAULT_KNOWN_MM: f64 = 10.0;

/// Outcome of [`Calibrator::add_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationStatus {
    /// First reference point recorded, waiting for the second.
    Pending,
    /// Both points recorded and the factor (mm/px) was computed.
    Calibrated(f64),
    /// Both points recorded but the attempt failed (coincident points,
    /// non-positive known distance, or a factor that is not finite).
    Rejected,
}

/// Two-click calibration state machine.
#[derive(Debug)]
pub struct Calibrator {
    state: watch::Sender<CalibrationData>,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_MM)
    }
}

impl Calibrator {
    pub fn new(known_mm: f64) -> Self {
        let (state, _) = watch::channel(CalibrationData::uncalibrated(known_mm));
        Self { state }
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CalibrationData> {
        self.state.subscribe()
    }

    pub fn calibration(&self) -> CalibrationData {
        *self.state.borrow()
    }

    pub fn mm_per_px(&self) -> Option<f64> {
        self.state.borrow().mm_per_px
    }

    pub fn is_calibrated(&self) -> bool {
        self.state.borrow().is_calibrated()
    }

    /// Update the known reference distance, recalibrating if both points exist.
    pub fn set_known_mm(&self, mm: f64) -> Option<f64> {
        let mut result = None;
        self.state.send_modify(|data| {
            data.known_mm = mm;
            if data.point1.is_some() && data.point2.is_some() {
                attempt(data);
            }
            result = data.mm_per_px;
        });
        debug!(known_mm = mm, mm_per_px = ?result, "calibration known distance updated");
        result
    }

    /// Record a reference click.
    ///
    /// With no first point yet, the click becomes `point1` and any earlier
    /// second point or factor is cleared. Otherwise it becomes `point2`
    /// (replacing a previous one) and a calibration attempt is made.
    pub fn add_point(&self, pt: Point) -> CalibrationStatus {
        let mut status = CalibrationStatus::Pending;
        self.state.send_modify(|data| {
            if data.point1.is_none() {
                data.point1 = Some(pt);
                data.point2 = None;
                data.mm_per_px = None;
                return;
            }
            data.point2 = Some(pt);
            status = match attempt(data) {
                Some(factor) => CalibrationStatus::Calibrated(factor),
                None => CalibrationStatus::Rejected,
            };
        });
        match status {
            CalibrationStatus::Pending => debug!(x = pt.x, y = pt.y, "calibration point 1 set"),
            CalibrationStatus::Calibrated(factor) => {
                info!(mm_per_px = factor, "calibration established")
            }
            CalibrationStatus::Rejected => {
                warn!(x = pt.x, y = pt.y, "calibration attempt rejected")
            }
        }
        status
    }

    /// Drop both points and the factor; the known distance is kept.
    pub fn reset(&self) {
        self.state.send_modify(|data| {
            data.point1 = None;
            data.point2 = None;
            data.mm_per_px = None;
        });
        debug!("calibration reset");
    }

    pub fn px_to_mm(&self, px: f64) -> Option<f64> {
        px_to_mm(px, self.mm_per_px())
    }

    /// Human-readable scale, e.g. `"4.00 px/mm"`.
    pub fn scale_label(&self) -> Option<String> {
        scale_label(self.mm_per_px())
    }
}

/// Recompute the factor in place. Clears it on any invalid input.
fn attempt(data: &mut CalibrationData) -> Option<f64> {
    data.mm_per_px = match (data.point1, data.point2) {
        (Some(p1), Some(p2)) if data.known_mm.is_finite() && data.known_mm > 0.0 => {
            let px = distance(p1, p2);
            (px > 0.0).then(|| data.known_mm / px).filter(|f| is_valid_factor(*f))
        }
        _ => None,
    };
    data.mm_per_px
}

/// A usable mm/px factor is finite and strictly positive.
fn is_valid_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 0.0
}

/// `px * mm_per_px` when calibrated; `None` otherwise.
pub fn px_to_mm(px: f64, mm_per_px: Option<f64>) -> Option<f64> {
    LinearScale::from_mm_per_px(mm_per_px)
        .mm_per_px()
        .map(|factor| px * factor)
}

pub fn scale_label(mm_per_px: Option<f64>) -> Option<String> {
    let factor = LinearScale::from_mm_per_px(mm_per_px).mm_per_px()?;
    Some(format!("{:.2} px/mm", 1.0 / factor))
}

/// Scale applied to linear measurements.
///
/// A missing, non-finite or non-positive factor counts as uncalibrated, in
/// which case lengths stay in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    mm_per_px: Option<f64>,
}

impl LinearScale {
    pub fn from_mm_per_px(mm_per_px: Option<f64>) -> Self {
        Self {
            mm_per_px: mm_per_px.filter(|f| is_valid_factor(*f)),
        }
    }

    pub const fn mm_per_px(&self) -> Option<f64> {
        self.mm_per_px
    }

    pub const fn is_calibrated(&self) -> bool {
        self.mm_per_px.is_some()
    }

    pub const fn unit(&self) -> Unit {
        Unit::linear(self.is_calibrated())
    }

    /// Convert a pixel length to this scale's unit.
    pub fn apply(&self, px: f64) -> f64 {
        match self.mm_per_px {
            Some(factor) => px * factor,
            None => px,
        }
    }
}
