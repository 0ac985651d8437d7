mod accuracy;
mod classify;
mod converter;
mod frame;
mod motion;
mod object;
mod report;
mod timestamp;

pub use accuracy::{CovarianceEstimate, DEFAULT_CONFIDENCE, MAX_POSITION_STD, map_accuracy};
pub use classify::classify;
pub use converter::{ConvertError, ConverterConfig, convert_report};
pub use frame::{MapProjection, ProjectionError, pose_from_geodetic};
pub use motion::{
    DegenerateCurvature, PredictionConfig, predict_states, sample_arc_path, sample_linear_path,
};
pub use object::{MapPose, ObjectCategory, PredictedState, PresenceVector, TrackedObject};
pub use report::{
    ActorReport, ActorType, GeodeticPosition, InitialPosition, PathHistory, PathPrediction,
    PositionEllipse, PositionalAccuracy, UtcTime,
};
pub use timestamp::{ResolvedTime, TimeSource, TimestampError, UtcClock, resolve_timestamp};
