use crate::service;
use crate::zone::{self, OutputLayer, ZoneAssignment, ZONE_SCAN};
use crate::Result;
use actix_web::web;
use deadpool_sqlite::Pool;
use tracing::info;

/// Loads the requested layers and applies every zone assignment to the
/// pooled features of all non-zone layers.
pub async fn apply_zone_layers(
    layer_ids: &[String],
    zone_assignments: &[ZoneAssignment],
    pool: &Pool,
) -> Result<Vec<OutputLayer>> {
    let partition = zone::partition(layer_ids, zone_assignments)?;

    let mut non_zone_features = vec![];
    for layer_id in &partition.non_zone_layer_ids {
        let collection = service::layer::load_layer_features(layer_id, pool).await?;
        non_zone_features.extend(collection.features);
    }

    let mut zones = Vec::with_capacity(zone_assignments.len());
    for assignment in zone_assignments {
        let zone = service::layer::load_zone_layer(&assignment.layer_id, pool).await?;
        zones.push((zone, assignment.property().to_string()));
    }

    info!(
        zone_layers = partition.zone_layer_ids.len(),
        non_zone_layers = partition.non_zone_layer_ids.len(),
        non_zone_features = non_zone_features.len(),
        "Loaded layers for zone transformation"
    );

    // CPU bound, keep it off the async workers
    web::block(move || zone::apply_zone_layers(&zones, &non_zone_features, ZONE_SCAN)).await?
}
