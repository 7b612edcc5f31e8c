use super::{blocking_queries, schema::Dataset};
use crate::Result;
use deadpool_sqlite::Pool;
use geojson::FeatureCollection;

pub async fn upsert(
    id: impl Into<String>,
    feature_collection: FeatureCollection,
    pool: &Pool,
) -> Result<Dataset> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::upsert(id, &feature_collection, conn))
        .await?
}

pub async fn select_by_id(id: impl Into<String>, pool: &Pool) -> Result<Dataset> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}

pub async fn select_records_count(id: impl Into<String>, pool: &Pool) -> Result<i64> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_records_count(id, conn))
        .await?
}
