use crate::db;
use crate::db::catalog::schema::Catalog;
use crate::service;
use crate::Result;
use deadpool_sqlite::Pool;
use geojson::FeatureCollection;
use tracing::debug;

/// Total number of features across the bundled layers.
pub async fn records_number(catalog: &Catalog, pool: &Pool) -> Result<i64> {
    let mut res = 0;
    for layer_id in &catalog.layer_ids {
        let layer = db::layer::queries::select_by_id(layer_id, pool).await?;
        res += db::dataset::queries::select_records_count(&layer.dataset_id, pool).await?;
    }
    Ok(res)
}

/// Features of every bundled layer, concatenated in catalog order.
pub async fn load_catalog_features(catalog_id: &str, pool: &Pool) -> Result<FeatureCollection> {
    let catalog = db::catalog::queries::select_by_id(catalog_id, pool).await?;
    let mut features = vec![];
    for layer_id in &catalog.layer_ids {
        let collection = service::layer::load_layer_features(layer_id, pool).await?;
        features.extend(collection.features);
    }
    debug!(catalog_id, features = features.len(), "Loaded catalog features");
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
