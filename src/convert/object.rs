//! Output model: tracked external objects and their forecast states.

use chrono::{DateTime, Utc};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use ndarray::Array2;

use crate::convert::timestamp::TimeSource;

/// Position and orientation in the map frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPose {
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl MapPose {
    #[inline]
    pub fn new(position: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Identity pose at the map origin.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Point3::origin(), UnitQuaternion::identity())
    }

    /// View this pose as a map-from-body isometry for composition.
    #[inline]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.orientation)
    }

    #[inline]
    pub fn from_isometry(iso: &Isometry3<f64>) -> Self {
        Self::new(Point3::from(iso.translation.vector), iso.rotation)
    }
}

/// Internal object category for a converted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectCategory {
    #[default]
    Unknown,
    Pedestrian,
    /// Closest available category for pedal cyclists.
    Motorcycle,
}

/// Bitset recording which optional output fields were actually computed.
///
/// Distinguishes populated-but-zero values from fields that were never
/// derived from the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenceVector(u16);

impl PresenceVector {
    pub const ID: Self = Self(1 << 0);
    pub const DYNAMIC: Self = Self(1 << 1);
    pub const POSE: Self = Self(1 << 2);
    pub const SIZE: Self = Self(1 << 3);
    pub const VELOCITY: Self = Self(1 << 4);
    pub const CONFIDENCE: Self = Self(1 << 5);
    pub const PREDICTION: Self = Self(1 << 6);

    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    #[inline]
    pub const fn contains(&self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }
}

/// One forecast sample of the object's motion.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedState {
    pub stamp: DateTime<Utc>,
    pub pose: MapPose,
    /// Linear velocity in the body frame, m/s.
    pub velocity: Vector3<f64>,
    pub position_confidence: f64,
    pub velocity_confidence: f64,
}

/// Tracked external object produced from a single report.
///
/// Constructed fresh per report and never mutated afterwards; ownership is
/// exclusive to the caller.
#[derive(Debug, Clone)]
pub struct TrackedObject {
    /// Numeric id with each sender id byte folded into one output byte.
    pub id: u64,
    /// The sender id as received, kept for cross-referencing v2x traffic.
    pub raw_id: Vec<u8>,
    /// Capture time of the underlying report.
    pub stamp: DateTime<Utc>,
    /// Which resolution branch produced `stamp`.
    pub time_source: TimeSource,
    /// Name of the map frame `pose` is expressed in.
    pub frame_id: String,
    pub dynamic: bool,
    pub category: ObjectCategory,
    pub pose: MapPose,
    /// 6x6 pose covariance over (x, y, z, roll, pitch, yaw); only diagonal
    /// entries backed by reported accuracy are populated.
    pub covariance: Array2<f64>,
    /// Half-extents of the bounding box, meters.
    pub size: Vector3<f64>,
    /// Linear velocity in the body frame, m/s.
    pub velocity: Vector3<f64>,
    pub confidence: f64,
    pub predictions: Vec<PredictedState>,
    pub presence: PresenceVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_vector() {
        let mut presence = PresenceVector::empty();
        assert!(!presence.contains(PresenceVector::POSE));

        presence.insert(PresenceVector::POSE);
        presence.insert(PresenceVector::VELOCITY);
        assert!(presence.contains(PresenceVector::POSE));
        assert!(presence.contains(PresenceVector::VELOCITY));
        assert!(!presence.contains(PresenceVector::CONFIDENCE));
    }

    #[test]
    fn test_pose_isometry_roundtrip() {
        let pose = MapPose::new(
            Point3::new(1.0, -2.0, 0.5),
            UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), 0.3),
        );
        let back = MapPose::from_isometry(&pose.to_isometry());

        assert!((back.position - pose.position).norm() < 1e-12);
        assert!(back.orientation.angle_to(&pose.orientation) < 1e-12);
    }
}
