use crate::db;
use crate::db::dataset::schema::Dataset;
use crate::zone::feature_point;
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;
use tracing::info;

/// Parses a GeoJSON feature collection where every feature is a point.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection> {
    let geo_json: GeoJson = json
        .parse()
        .map_err(|e| Error::InvalidInput(format!("Invalid GeoJSON: {e}")))?;
    let GeoJson::FeatureCollection(collection) = geo_json else {
        return Err(Error::InvalidInput(
            "Expected a GeoJSON FeatureCollection".into(),
        ));
    };
    if let Some(index) = collection
        .features
        .iter()
        .position(|it| feature_point(it).is_none())
    {
        return Err(Error::InvalidInput(format!(
            "Feature #{index} doesn't have a point geometry"
        )));
    }
    Ok(collection)
}

pub async fn import(
    dataset_id: impl Into<String>,
    path: impl AsRef<Path>,
    pool: &Pool,
) -> Result<Dataset> {
    let dataset_id = dataset_id.into();
    let json = std::fs::read_to_string(path.as_ref())?;
    let collection = parse_feature_collection(&json)?;
    let features = collection.features.len();
    let dataset = db::dataset::queries::upsert(dataset_id, collection, pool).await?;
    info!(dataset_id = %dataset.id, features, "Imported dataset");
    Ok(dataset)
}
