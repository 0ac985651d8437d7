//! Conversion of personal safety reports into tracked external objects.
//!
//! A single report (geodetic position, heading, speed, plus optional
//! accuracy and path fields) is converted into a map-frame [`TrackedObject`]
//! with a forecast trajectory, ready for downstream perception and planning
//! consumers. Each conversion is a pure function of the report and its
//! collaborators; no state is shared across reports, so conversions may run
//! concurrently.

pub mod convert;
pub mod integration;

pub use convert::{
    ActorReport, ActorType, ConvertError, ConverterConfig, GeodeticPosition, MapPose,
    MapProjection, ObjectCategory, PredictedState, PredictionConfig, PresenceVector,
    ProjectionError, ResolvedTime, TimeSource, TimestampError, TrackedObject, UtcClock,
    convert_report,
};
pub use integration::{
    ConversionPipeline, FixedClock, ReportBuilder, SystemClock, TangentPlaneProjector,
};
