use super::{
    blocking_queries,
    schema::{Catalog, NewCatalog},
};
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(catalog: NewCatalog, pool: &Pool) -> Result<Catalog> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(&catalog, conn))
        .await?
}

pub async fn select_all(pool: &Pool) -> Result<Vec<Catalog>> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_all(conn))
        .await?
}

pub async fn select_by_id(id: impl Into<String>, pool: &Pool) -> Result<Catalog> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}
