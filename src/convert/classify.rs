//! Actor-type classification and default bounding sizes.

use nalgebra::Vector3;

use crate::convert::object::ObjectCategory;
use crate::convert::report::ActorType;

/// Map the reported actor type to an internal category and default bounding
/// box half-extents.
///
/// Safety workers and animals are treated as pedestrians since no closer
/// category exists; likewise pedal cyclists become motorcycles.
pub fn classify(actor_type: ActorType) -> (ObjectCategory, Vector3<f64>) {
    match actor_type {
        ActorType::Pedestrian | ActorType::PublicSafetyWorker | ActorType::Animal => {
            (ObjectCategory::Pedestrian, Vector3::new(0.5, 0.5, 1.0))
        }
        ActorType::Pedalcyclist => (ObjectCategory::Motorcycle, Vector3::new(1.0, 0.5, 1.0)),
        ActorType::Unavailable => (ObjectCategory::Unknown, Vector3::new(0.5, 0.5, 1.0)),
    }
}
