//! Integration seams for hosting systems.
//!
//! Concrete clock and projector implementations, a pipeline bundling the
//! conversion core with its external collaborators, and a builder for
//! assembling input reports.

mod builder;
mod clock;
mod pipeline;
mod projector;

pub use builder::ReportBuilder;
pub use clock::{FixedClock, SystemClock};
pub use pipeline::ConversionPipeline;
pub use projector::TangentPlaneProjector;
