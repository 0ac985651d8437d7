//! Assembly of a tracked object from a single report.

use nalgebra::{UnitQuaternion, Vector3};
use thiserror::Error;

use crate::convert::accuracy::map_accuracy;
use crate::convert::classify::classify;
use crate::convert::frame::{MapProjection, ProjectionError, pose_from_geodetic};
use crate::convert::motion::{PredictionConfig, predict_states};
use crate::convert::object::{PresenceVector, TrackedObject};
use crate::convert::report::ActorReport;
use crate::convert::timestamp::{TimestampError, UtcClock, resolve_timestamp};

/// Conversion parameters.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Name of the map frame output poses are expressed in.
    pub frame_id: String,
    pub prediction: PredictionConfig,
}

impl ConverterConfig {
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            prediction: PredictionConfig::default(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new("map")
    }
}

/// Unrecoverable failure converting a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Fold the raw sender id bytes into a numeric id, one input byte per
/// output byte. The resulting values are large enough to be unlikely to
/// collide with ids assigned to locally detected objects.
fn fold_id(raw: &[u8]) -> u64 {
    raw.iter()
        .take(8)
        .enumerate()
        .fold(0u64, |id, (i, byte)| id | (u64::from(*byte) << (8 * i)))
}

/// Convert a single safety report into a tracked object.
///
/// Timestamp or frame-composition failures abort the whole conversion; a
/// partial object is never produced from safety-relevant data. The presence
/// vector on the result records exactly the fields that were computed.
pub fn convert_report(
    report: &ActorReport,
    projector: &impl MapProjection,
    ned_in_map_rotation: &UnitQuaternion<f64>,
    clock: &impl UtcClock,
    config: &ConverterConfig,
) -> Result<TrackedObject, ConvertError> {
    let mut presence = PresenceVector::empty();

    let resolved = resolve_timestamp(report, clock)?;
    let pose = pose_from_geodetic(
        projector,
        ned_in_map_rotation,
        &report.position,
        report.heading_degrees,
    )?;
    presence.insert(PresenceVector::POSE);

    let id = fold_id(&report.id);
    presence.insert(PresenceVector::ID);

    // A safety report is only ever emitted by a living actor.
    presence.insert(PresenceVector::DYNAMIC);

    let (category, size) = classify(report.actor_type);
    presence.insert(PresenceVector::SIZE);

    let velocity = Vector3::new(report.speed, 0.0, 0.0);
    presence.insert(PresenceVector::VELOCITY);

    let estimate = map_accuracy(report.accuracy.as_ref());
    if estimate.measured {
        presence.insert(PresenceVector::CONFIDENCE);
    }

    let predictions = predict_states(
        &pose,
        report.speed,
        report.path_prediction.as_ref(),
        resolved.stamp,
        estimate.confidence,
        &config.prediction,
    );
    presence.insert(PresenceVector::PREDICTION);

    Ok(TrackedObject {
        id,
        raw_id: report.id.clone(),
        stamp: resolved.stamp,
        time_source: resolved.source,
        frame_id: config.frame_id.clone(),
        dynamic: true,
        category,
        pose,
        covariance: estimate.matrix,
        size,
        velocity,
        confidence: estimate.confidence,
        predictions,
        presence,
    })
}
