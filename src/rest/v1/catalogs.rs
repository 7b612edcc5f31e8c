use crate::db;
use crate::db::catalog::schema::{Catalog, NewCatalog};
use crate::rest::{Envelope, RestResult as Res};
use crate::service;
use crate::Result;
use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use deadpool_sqlite::Pool;
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Serialize, Deserialize)]
pub struct CatalogView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub catalog_link: String,
    pub layer_ids: Vec<String>,
    pub records_number: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl CatalogView {
    pub async fn load(catalog: Catalog, pool: &Pool) -> Result<Self> {
        let records_number = service::catalog::records_number(&catalog, pool).await?;
        Ok(CatalogView {
            id: catalog.id,
            name: catalog.name,
            description: catalog.description,
            thumbnail_url: catalog.thumbnail_url,
            catalog_link: catalog.catalog_link,
            layer_ids: catalog.layer_ids,
            records_number,
            created_at: catalog.created_at,
            updated_at: catalog.updated_at,
        })
    }
}

#[derive(Deserialize)]
pub struct PostArgs {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnail_url: String,
    #[serde(default)]
    catalog_link: String,
    layer_ids: Vec<String>,
}

#[get("")]
pub async fn get(pool: Data<Pool>) -> Res<Vec<CatalogView>> {
    let catalogs = db::catalog::queries::select_all(&pool).await?;
    let mut res = Vec::with_capacity(catalogs.len());
    for catalog in catalogs {
        res.push(CatalogView::load(catalog, &pool).await?);
    }
    Ok(Envelope::json(res))
}

#[get("{id}")]
pub async fn get_by_id(id: Path<String>, pool: Data<Pool>) -> Res<CatalogView> {
    let catalog = db::catalog::queries::select_by_id(id.into_inner(), &pool).await?;
    Ok(Envelope::json(CatalogView::load(catalog, &pool).await?))
}

#[get("{id}/map-data")]
pub async fn get_map_data(id: Path<String>, pool: Data<Pool>) -> Res<FeatureCollection> {
    let collection = service::catalog::load_catalog_features(&id, &pool).await?;
    Ok(Envelope::json(collection))
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<CatalogView> {
    let args = args.into_inner();
    let catalog = NewCatalog {
        id: args.id,
        name: args.name,
        description: args.description,
        thumbnail_url: args.thumbnail_url,
        catalog_link: args.catalog_link,
        layer_ids: args.layer_ids,
    };
    let catalog = db::catalog::queries::insert(catalog, &pool).await?;
    Ok(Envelope::json(CatalogView::load(catalog, &pool).await?))
}
