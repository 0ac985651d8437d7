//! Mapping of reported accuracy onto covariance and confidence.

use ndarray::Array2;

use crate::convert::report::PositionalAccuracy;

/// Largest usable position standard deviation, meters.
///
/// A one-sigma error at this bound no longer gives a 95% interval that fits
/// the actor within a single 3.7 m lane, so confidence scales to zero here.
pub const MAX_POSITION_STD: f64 = 1.85;

/// Confidence assigned when the report carries no position accuracy.
pub const DEFAULT_CONFIDENCE: f64 = 0.1;

// Diagonal indices into the 6x6 pose covariance over (x, y, z, roll, pitch, yaw).
const X: usize = 0;
const Y: usize = 1;
const YAW: usize = 5;

/// Pose covariance with only the entries backed by reported accuracy
/// populated, plus the scalar confidence derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceEstimate {
    pub matrix: Array2<f64>,
    pub confidence: f64,
    /// False when `confidence` is the fixed default rather than a value
    /// derived from the report.
    pub measured: bool,
}

/// Map the reported accuracy fields onto a covariance estimate.
///
/// The resulting confidence is later used for both position and velocity:
/// a single report carries no velocity accuracy, so the position confidence
/// is the only available stand-in.
pub fn map_accuracy(accuracy: Option<&PositionalAccuracy>) -> CovarianceEstimate {
    let mut matrix = Array2::zeros((6, 6));
    let mut confidence = DEFAULT_CONFIDENCE;
    let mut measured = false;

    if let Some(ellipse) = accuracy.and_then(|a| a.position) {
        // The ellipse orientation relative to the map frame is unknown, so
        // the larger axis pessimistically applies to both planar directions.
        let position_std = ellipse.semi_major.max(ellipse.semi_minor);
        matrix[[X, X]] = position_std * position_std;
        matrix[[Y, Y]] = position_std * position_std;

        confidence = 1.0 - (position_std / MAX_POSITION_STD).abs().min(1.0);
        measured = true;
    }

    if let Some(std) = accuracy.and_then(|a| a.orientation_std) {
        matrix[[YAW, YAW]] = std * std;
    }

    CovarianceEstimate {
        matrix,
        confidence,
        measured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::report::PositionEllipse;

    #[test]
    fn test_no_accuracy_yields_defaults() {
        let estimate = map_accuracy(None);

        assert!(estimate.matrix.iter().all(|v| *v == 0.0));
        assert_eq!(estimate.confidence, DEFAULT_CONFIDENCE);
        assert!(!estimate.measured);
    }

    #[test]
    fn test_position_and_orientation() {
        let accuracy = PositionalAccuracy {
            position: Some(PositionEllipse {
                semi_major: 0.925,
                semi_minor: 0.4,
            }),
            orientation_std: Some(0.2),
        };
        let estimate = map_accuracy(Some(&accuracy));

        assert!((estimate.matrix[[0, 0]] - 0.925 * 0.925).abs() < 1e-12);
        assert!((estimate.matrix[[1, 1]] - 0.925 * 0.925).abs() < 1e-12);
        assert!((estimate.matrix[[5, 5]] - 0.04).abs() < 1e-12);
        assert!((estimate.confidence - 0.5).abs() < 1e-12);
        assert!(estimate.measured);
    }

    #[test]
    fn test_position_only() {
        let accuracy = PositionalAccuracy {
            position: Some(PositionEllipse {
                semi_major: 1.85,
                semi_minor: 0.1,
            }),
            orientation_std: None,
        };
        let estimate = map_accuracy(Some(&accuracy));

        assert!((estimate.matrix[[0, 0]] - 1.85 * 1.85).abs() < 1e-12);
        assert_eq!(estimate.matrix[[5, 5]], 0.0);
        // A deviation at the bound gives zero confidence.
        assert!(estimate.confidence.abs() < 1e-12);
        assert!(estimate.measured);
    }

    #[test]
    fn test_orientation_only() {
        let accuracy = PositionalAccuracy {
            position: None,
            orientation_std: Some(0.5),
        };
        let estimate = map_accuracy(Some(&accuracy));

        assert_eq!(estimate.matrix[[0, 0]], 0.0);
        assert!((estimate.matrix[[5, 5]] - 0.25).abs() < 1e-12);
        assert_eq!(estimate.confidence, DEFAULT_CONFIDENCE);
        assert!(!estimate.measured);
    }
}
