//! Forecast trajectory sampling.

use chrono::{DateTime, Duration, Utc};
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use thiserror::Error;
use tracing::debug;

use crate::convert::object::{MapPose, PredictedState};
use crate::convert::report::PathPrediction;

/// Sampling parameters for forecast trajectories.
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    /// Total forecast duration, seconds.
    pub horizon: f64,
    /// Sample spacing, seconds.
    pub step: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            horizon: 2.0,
            step: 0.1,
        }
    }
}

/// Arc sampling is undefined for a zero radius of curvature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("radius of curvature is zero, turning angle undefined")]
pub struct DegenerateCurvature;

/// Per-step multiplicative confidence decay.
const CONFIDENCE_DECAY: f64 = 0.9;

fn step_count(horizon: f64, step: f64) -> usize {
    (horizon / step).ceil() as usize
}

/// Sample constant-speed motion along a circular arc.
///
/// The radius originates in the frame of `pose`, so the turn center sits at
/// (0, radius); positive radii curve toward +y. Each sample is the initial
/// pose composed with the local arc offset, never re-derived from scratch.
pub fn sample_arc_path(
    pose: &MapPose,
    speed: f64,
    radius: f64,
    horizon: f64,
    step: f64,
) -> Result<Vec<MapPose>, DegenerateCurvature> {
    if radius == 0.0 {
        return Err(DegenerateCurvature);
    }

    let pose_in_map = pose.to_isometry();
    let steps = step_count(horizon, step);
    let mut output = Vec::with_capacity(steps);

    for k in 1..=steps {
        let t = k as f64 * step;
        let arc_length = speed * t; // assumes perfect point motion along the curve
        let turning_angle = arc_length / radius;

        // Position relative to the turn center at (0, radius): the sample
        // starts on the circle at the pose origin and sweeps by the turning
        // angle.
        let x = radius * turning_angle.sin();
        let y = radius - radius * turning_angle.cos();

        let local = Isometry3::from_parts(
            Translation3::new(x, y, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), turning_angle),
        );

        output.push(MapPose::from_isometry(&(pose_in_map * local)));
    }

    Ok(output)
}

/// Sample constant-speed straight-line motion along the pose's forward axis.
pub fn sample_linear_path(pose: &MapPose, speed: f64, horizon: f64, step: f64) -> Vec<MapPose> {
    let pose_in_map = pose.to_isometry();
    let steps = step_count(horizon, step);
    let mut output = Vec::with_capacity(steps);

    for k in 1..=steps {
        let t = k as f64 * step;
        let local = Isometry3::translation(speed * t, 0.0, 0.0);

        output.push(MapPose::from_isometry(&(pose_in_map * local)));
    }

    output
}

/// Produce the forecast state sequence for a report.
///
/// A sender-supplied path prediction selects the arc model; its radius uses
/// the on-wire convention of positive-to-the-right and is negated here to
/// match the map convention. Reports without prediction data, and arcs with
/// a degenerate radius, use the linear model instead.
///
/// Position and velocity confidence decay independently by 10% per step,
/// both seeded from `seed_confidence`. The predicted velocity stays at the
/// constant input speed; deceleration is not modeled.
pub fn predict_states(
    pose: &MapPose,
    speed: f64,
    prediction: Option<&PathPrediction>,
    start: DateTime<Utc>,
    seed_confidence: f64,
    config: &PredictionConfig,
) -> Vec<PredictedState> {
    let poses = match prediction {
        Some(p) => {
            sample_arc_path(pose, speed, -p.radius_of_curvature, config.horizon, config.step)
                .unwrap_or_else(|_| {
                    debug!("degenerate radius of curvature, falling back to linear motion");
                    sample_linear_path(pose, speed, config.horizon, config.step)
                })
        }
        None => sample_linear_path(pose, speed, config.horizon, config.step),
    };

    let step = Duration::nanoseconds((config.step * 1e9) as i64);
    let velocity = Vector3::new(speed, 0.0, 0.0);

    let mut stamp = start;
    let mut position_confidence = seed_confidence;
    let mut velocity_confidence = seed_confidence;
    let mut output = Vec::with_capacity(poses.len());

    for sample in poses {
        stamp += step;
        position_confidence *= CONFIDENCE_DECAY;
        velocity_confidence *= CONFIDENCE_DECAY;

        output.push(PredictedState {
            stamp,
            pose: sample,
            velocity,
            position_confidence,
            velocity_confidence,
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_zero_speed_arc_stays_in_place() {
        let pose = MapPose::new(
            nalgebra::Point3::new(3.0, -1.0, 0.5),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.7),
        );
        let samples = sample_arc_path(&pose, 0.0, -10.0, 2.0, 0.1).unwrap();

        assert_eq!(samples.len(), 20);
        for sample in samples {
            assert!((sample.position - pose.position).norm() < 1e-12);
        }
    }

    #[test]
    fn test_arc_first_sample_offset_from_center() {
        // Report radius 10 (right turn) negated to -10, speed 2 m/s,
        // step 0.1 s: the first sample sits at angle 0.02 rad around the
        // center at (0, -10).
        let samples = sample_arc_path(&MapPose::identity(), 2.0, -10.0, 1.0, 0.1).unwrap();
        assert_eq!(samples.len(), 10);

        let first = samples[0].position;
        let dx = first.x - 0.0;
        let dy = first.y - (-10.0);
        assert!((dx - 10.0 * 0.02f64.sin()).abs() < 1e-9);
        assert!((dy - 10.0 * 0.02f64.cos()).abs() < 1e-9);

        let (_, _, yaw) = samples[0].orientation.euler_angles();
        assert!((yaw - (-0.02)).abs() < 1e-9);
    }

    #[test]
    fn test_linear_path_follows_heading() {
        let pose = MapPose::new(
            nalgebra::Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
        );
        let samples = sample_linear_path(&pose, 1.5, 2.0, 0.1);

        assert_eq!(samples.len(), 20);
        // Facing +y, so forward motion accumulates along y.
        let last = samples[19].position;
        assert!(last.x.abs() < 1e-9);
        assert!((last.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_radius_matches_linear_model() {
        let pose = MapPose::new(
            nalgebra::Point3::new(1.0, 2.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.3),
        );
        let config = PredictionConfig::default();
        let prediction = PathPrediction {
            radius_of_curvature: 0.0,
        };

        let curved = predict_states(&pose, 1.2, Some(&prediction), start_time(), 0.5, &config);
        let linear = predict_states(&pose, 1.2, None, start_time(), 0.5, &config);

        assert_eq!(curved.len(), linear.len());
        for (c, l) in curved.iter().zip(&linear) {
            assert!((c.pose.position - l.pose.position).norm() < 1e-12);
            assert_eq!(c.stamp, l.stamp);
        }
    }

    #[test]
    fn test_confidence_decay_closed_form() {
        let states = predict_states(
            &MapPose::identity(),
            1.0,
            None,
            start_time(),
            0.8,
            &PredictionConfig::default(),
        );

        assert_eq!(states.len(), 20);
        for (k, state) in states.iter().enumerate() {
            let expected = 0.8 * CONFIDENCE_DECAY.powi(k as i32 + 1);
            assert!((state.position_confidence - expected).abs() < 1e-12);
            assert!((state.velocity_confidence - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_step_count_rounds_up() {
        assert_eq!(step_count(2.0, 0.1), 20);
        assert_eq!(step_count(1.05, 0.1), 11);
        assert_eq!(step_count(1.0, 0.3), 4);
    }

    #[test]
    fn test_timestamps_advance_by_step() {
        let states = predict_states(
            &MapPose::identity(),
            1.0,
            None,
            start_time(),
            0.1,
            &PredictionConfig::default(),
        );

        assert_eq!(states[0].stamp, start_time() + Duration::milliseconds(100));
        assert_eq!(states[19].stamp, start_time() + Duration::milliseconds(2000));
    }
}
