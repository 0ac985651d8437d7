//! Builder for assembling `ActorReport` values.

use crate::convert::{
    ActorReport, ActorType, GeodeticPosition, InitialPosition, PathHistory, PathPrediction,
    PositionEllipse, PositionalAccuracy, UtcTime,
};

/// Builder for creating `ActorReport` values from loose fields.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    id: Vec<u8>,
    position: GeodeticPosition,
    heading_degrees: f64,
    speed: f64,
    actor_type: ActorType,
    accuracy: Option<PositionalAccuracy>,
    path_history: Option<PathHistory>,
    sec_mark_ms: u16,
    path_prediction: Option<PathPrediction>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            id: Vec::new(),
            position: GeodeticPosition {
                latitude: 0.0,
                longitude: 0.0,
                elevation: 0.0,
            },
            heading_degrees: 0.0,
            speed: 0.0,
            actor_type: ActorType::Unavailable,
            accuracy: None,
            path_history: None,
            sec_mark_ms: 0,
            path_prediction: None,
        }
    }
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender id bytes.
    pub fn id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the geodetic position (degrees, meters).
    pub fn position(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.position = GeodeticPosition {
            latitude,
            longitude,
            elevation,
        };
        self
    }

    /// Set the heading in degrees, clockwise from true north.
    pub fn heading_degrees(mut self, heading_degrees: f64) -> Self {
        self.heading_degrees = heading_degrees;
        self
    }

    /// Set the scalar ground speed, m/s.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the reported actor type.
    pub fn actor_type(mut self, actor_type: ActorType) -> Self {
        self.actor_type = actor_type;
        self
    }

    /// Set the milliseconds elapsed within the current UTC minute.
    pub fn sec_mark_ms(mut self, sec_mark_ms: u16) -> Self {
        self.sec_mark_ms = sec_mark_ms;
        self
    }

    /// Attach a one-sigma position error ellipse, in meters.
    pub fn position_accuracy(mut self, semi_major: f64, semi_minor: f64) -> Self {
        self.accuracy.get_or_insert_with(Default::default).position = Some(PositionEllipse {
            semi_major,
            semi_minor,
        });
        self
    }

    /// Attach a one-sigma heading accuracy.
    pub fn orientation_accuracy(mut self, orientation_std: f64) -> Self {
        self.accuracy
            .get_or_insert_with(Default::default)
            .orientation_std = Some(orientation_std);
        self
    }

    /// Attach a fully specified path-history UTC time. `millisecond` fills
    /// the second field, which carries milliseconds within the minute.
    pub fn history_utc(
        mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        millisecond: u32,
    ) -> Self {
        self.path_history = Some(PathHistory {
            initial_position: Some(InitialPosition {
                utc_time: Some(UtcTime {
                    year: Some(year),
                    month: Some(month),
                    day: Some(day),
                    hour: Some(hour),
                    minute: Some(minute),
                    second: Some(millisecond),
                }),
            }),
        });
        self
    }

    /// Attach a sender path prediction with the given radius of curvature.
    pub fn curvature(mut self, radius_of_curvature: f64) -> Self {
        self.path_prediction = Some(PathPrediction {
            radius_of_curvature,
        });
        self
    }

    /// Build the final `ActorReport`.
    pub fn build(self) -> ActorReport {
        ActorReport {
            id: self.id,
            position: self.position,
            heading_degrees: self.heading_degrees,
            speed: self.speed,
            actor_type: self.actor_type,
            accuracy: self.accuracy,
            path_history: self.path_history,
            sec_mark_ms: self.sec_mark_ms,
            path_prediction: self.path_prediction,
        }
    }
}
