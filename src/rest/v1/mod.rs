pub mod catalogs;
pub mod layers;
pub mod zone_layers;
