//! Pipeline bundling the conversion core with its collaborators.

use nalgebra::UnitQuaternion;

use crate::convert::{
    ActorReport, ConvertError, ConverterConfig, MapProjection, TrackedObject, UtcClock,
    convert_report,
};

/// A conversion pipeline holding the projector, clock, and frame rotation.
///
/// This struct provides a convenient way to convert reports end to end
/// without threading every collaborator through each call.
pub struct ConversionPipeline<P: MapProjection, C: UtcClock> {
    projector: P,
    clock: C,
    ned_in_map_rotation: UnitQuaternion<f64>,
    config: ConverterConfig,
}

impl<P: MapProjection, C: UtcClock> ConversionPipeline<P, C> {
    /// Create a new pipeline with the given collaborators and configuration.
    pub fn new(
        projector: P,
        clock: C,
        ned_in_map_rotation: UnitQuaternion<f64>,
        config: ConverterConfig,
    ) -> Self {
        Self {
            projector,
            clock,
            ned_in_map_rotation,
            config,
        }
    }

    /// Create a new pipeline with the default configuration and an identity
    /// NED-to-map rotation.
    pub fn with_default_config(projector: P, clock: C) -> Self {
        Self::new(
            projector,
            clock,
            UnitQuaternion::identity(),
            ConverterConfig::default(),
        )
    }

    /// Convert a single report into a tracked object.
    ///
    /// # Returns
    /// The assembled `TrackedObject`, or the typed failure that made the
    /// report unusable.
    pub fn convert(&self, report: &ActorReport) -> Result<TrackedObject, ConvertError> {
        convert_report(
            report,
            &self.projector,
            &self.ned_in_map_rotation,
            &self.clock,
            &self.config,
        )
    }

    /// Get a reference to the underlying projector.
    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Get a reference to the underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a reference to the conversion configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Get a mutable reference to the conversion configuration.
    pub fn config_mut(&mut self) -> &mut ConverterConfig {
        &mut self.config
    }
}
