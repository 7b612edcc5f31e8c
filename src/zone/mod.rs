//! Zone-layer transformation.
//!
//! A zone layer carries a numeric property (rating, price, ...). Its values
//! are split into three bands and every point of the other requested layers
//! is routed into a low, medium, high or non-zone-overlap output layer
//! depending on the zone feature it falls next to.

mod assign;
mod distance;
mod model;
mod partition;
mod threshold;

pub use assign::{apply_zone_layers, ZONE_SCAN};
pub use model::{feature_point, OutputLayer, ZoneAssignment, ZoneLayer};
pub use partition::partition;

#[cfg(test)]
pub use model::test::point;
