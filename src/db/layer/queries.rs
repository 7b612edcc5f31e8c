use super::{
    blocking_queries,
    schema::{Layer, NewLayer},
};
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(layer: NewLayer, pool: &Pool) -> Result<Layer> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(&layer, conn))
        .await?
}

pub async fn select_all(pool: &Pool) -> Result<Vec<Layer>> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_all(conn))
        .await?
}

pub async fn select_by_id(id: impl Into<String>, pool: &Pool) -> Result<Layer> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}
