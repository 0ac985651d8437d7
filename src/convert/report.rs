//! Input message model for personal safety reports.

/// Geodetic position as carried by the report (WGS84 degrees, elevation in
/// meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Device user type carried by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorType {
    #[default]
    Unavailable,
    Pedestrian,
    Pedalcyclist,
    PublicSafetyWorker,
    Animal,
}

impl ActorType {
    /// Decode the on-wire type code. Unknown codes map to `Unavailable`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Pedestrian,
            2 => Self::Pedalcyclist,
            3 => Self::PublicSafetyWorker,
            4 => Self::Animal,
            _ => Self::Unavailable,
        }
    }
}

/// One-sigma error ellipse for the reported position, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionEllipse {
    pub semi_major: f64,
    pub semi_minor: f64,
}

/// Reported positional accuracy. Each field is present only when the sender
/// actually measured it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionalAccuracy {
    pub position: Option<PositionEllipse>,
    /// One-sigma heading error.
    pub orientation_std: Option<f64>,
}

/// UTC timestamp of the path history's initial position.
///
/// All six fields must be present for the timestamp to be usable. `second`
/// carries milliseconds within the minute (0-59999), matching the report's
/// sec_mark resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UtcTime {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl UtcTime {
    pub fn is_fully_specified(&self) -> bool {
        self.year.is_some()
            && self.month.is_some()
            && self.day.is_some()
            && self.hour.is_some()
            && self.minute.is_some()
            && self.second.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialPosition {
    pub utc_time: Option<UtcTime>,
}

/// Trailing path history. Only the initial position's UTC time is consumed
/// by the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathHistory {
    pub initial_position: Option<InitialPosition>,
}

/// Sender-supplied path prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPrediction {
    /// Radius of the predicted arc, meters. Positive curves to the right in
    /// the actor's own frame.
    pub radius_of_curvature: f64,
}

/// A single personal safety report from an external actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorReport {
    /// Sender id, variable-length byte sequence.
    pub id: Vec<u8>,
    pub position: GeodeticPosition,
    /// Heading in degrees, clockwise from true north.
    pub heading_degrees: f64,
    /// Scalar ground speed, m/s.
    pub speed: f64,
    pub actor_type: ActorType,
    pub accuracy: Option<PositionalAccuracy>,
    pub path_history: Option<PathHistory>,
    /// Milliseconds elapsed within the current UTC minute (0-59999).
    pub sec_mark_ms: u16,
    pub path_prediction: Option<PathPrediction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_type_codes() {
        assert_eq!(ActorType::from_code(1), ActorType::Pedestrian);
        assert_eq!(ActorType::from_code(2), ActorType::Pedalcyclist);
        assert_eq!(ActorType::from_code(3), ActorType::PublicSafetyWorker);
        assert_eq!(ActorType::from_code(4), ActorType::Animal);
        assert_eq!(ActorType::from_code(0), ActorType::Unavailable);
        assert_eq!(ActorType::from_code(200), ActorType::Unavailable);
    }

    #[test]
    fn test_utc_time_fully_specified() {
        let mut utc = UtcTime {
            year: Some(2024),
            month: Some(3),
            day: Some(14),
            hour: Some(9),
            minute: Some(26),
            second: Some(53_589),
        };
        assert!(utc.is_fully_specified());

        utc.minute = None;
        assert!(!utc.is_fully_specified());
    }
}
