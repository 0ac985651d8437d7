//! Reference map projection.

use nalgebra::Point3;

use crate::convert::{GeodeticPosition, MapProjection, ProjectionError};

/// Mean earth radius, meters.
const EARTH_RADIUS: f64 = 6_371_008.8;

/// Equirectangular local tangent plane around a fixed geodetic origin.
///
/// x grows east, y north, z up relative to the origin elevation. Adequate
/// for the small extents of a local map; deployments with a georeferenced
/// map supply their own [`MapProjection`] instead.
#[derive(Debug, Clone)]
pub struct TangentPlaneProjector {
    origin: GeodeticPosition,
    meters_per_lat_degree: f64,
    meters_per_lon_degree: f64,
}

impl TangentPlaneProjector {
    pub fn new(origin: GeodeticPosition) -> Self {
        let meters_per_lat_degree = EARTH_RADIUS * std::f64::consts::PI / 180.0;
        let meters_per_lon_degree = meters_per_lat_degree * origin.latitude.to_radians().cos();

        Self {
            origin,
            meters_per_lat_degree,
            meters_per_lon_degree,
        }
    }

    pub fn origin(&self) -> &GeodeticPosition {
        &self.origin
    }
}

impl MapProjection for TangentPlaneProjector {
    fn project(&self, position: &GeodeticPosition) -> Result<Point3<f64>, ProjectionError> {
        if position.latitude.abs() > 90.0 || position.longitude.abs() > 180.0 {
            return Err(ProjectionError::OutsideDomain {
                latitude: position.latitude,
                longitude: position.longitude,
            });
        }

        Ok(Point3::new(
            (position.longitude - self.origin.longitude) * self.meters_per_lon_degree,
            (position.latitude - self.origin.latitude) * self.meters_per_lat_degree,
            position.elevation - self.origin.elevation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> GeodeticPosition {
        GeodeticPosition {
            latitude: 38.955,
            longitude: -77.149,
            elevation: 40.0,
        }
    }

    #[test]
    fn test_origin_projects_to_zero() {
        let projector = TangentPlaneProjector::new(origin());
        let point = projector.project(&origin()).unwrap();
        assert!(point.coords.norm() < 1e-9);
    }

    #[test]
    fn test_northward_offset() {
        let projector = TangentPlaneProjector::new(origin());
        let mut north = origin();
        north.latitude += 0.001;

        let point = projector.project(&north).unwrap();
        // One millidegree of latitude is roughly 111 m.
        assert!((point.y - 111.19).abs() < 0.1);
        assert!(point.x.abs() < 1e-9);
    }

    #[test]
    fn test_rejects_out_of_domain() {
        let projector = TangentPlaneProjector::new(origin());
        let bad = GeodeticPosition {
            latitude: 90.5,
            longitude: 0.0,
            elevation: 0.0,
        };

        assert!(matches!(
            projector.project(&bad),
            Err(ProjectionError::OutsideDomain { .. })
        ));
    }
}
