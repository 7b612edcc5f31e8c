pub mod catalog;
pub mod dataset;
pub mod filesystem;
pub mod layer;
pub mod zone_layer;
