//! Geodetic-to-map-frame pose composition.

use nalgebra::{Point3, UnitQuaternion, Vector3};
use thiserror::Error;

use crate::convert::object::MapPose;
use crate::convert::report::GeodeticPosition;

/// Projection from geodetic coordinates into the local planar map frame.
///
/// Implementations are supplied by the hosting system and must be safe for
/// concurrent read-only use.
pub trait MapProjection {
    fn project(&self, position: &GeodeticPosition) -> Result<Point3<f64>, ProjectionError>;
}

/// Geodetic input outside the projector's valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    #[error("geodetic position ({latitude}, {longitude}) is outside the projector domain")]
    OutsideDomain { latitude: f64, longitude: f64 },
}

/// Compose the reported geodetic position and heading into a map-frame pose.
///
/// The heading rotates about the NED down axis (clockwise from true north);
/// the fixed `ned_in_map` rotation then carries that orientation into the
/// map frame.
pub fn pose_from_geodetic(
    projector: &impl MapProjection,
    ned_in_map: &UnitQuaternion<f64>,
    position: &GeodeticPosition,
    heading_degrees: f64,
) -> Result<MapPose, ProjectionError> {
    let point = projector.project(position)?;
    let heading =
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), heading_degrees.to_radians());

    Ok(MapPose::new(point, ned_in_map * heading))
}
