use crate::db;
use crate::db::layer::schema::{Layer, NewLayer};
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
pub struct LayerView {
    pub id: String,
    pub dataset_id: String,
    pub name: String,
    pub legend: String,
    pub description: String,
    pub color: String,
    pub records_number: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl LayerView {
    pub async fn load(layer: Layer, pool: &Pool) -> Result<Self> {
        let records_number = service::layer::records_number(&layer, pool).await?;
        Ok(LayerView {
            id: layer.id,
            dataset_id: layer.dataset_id,
            name: layer.name,
            legend: layer.legend,
            description: layer.description,
            color: layer.color,
            records_number,
            created_at: layer.created_at,
            updated_at: layer.updated_at,
        })
    }
}

#[derive(Deserialize)]
pub struct PostArgs {
    id: String,
    dataset_id: String,
    name: String,
    #[serde(default)]
    legend: String,
    #[serde(default)]
    description: String,
    color: Option<String>,
}

#[get("")]
pub async fn get(pool: Data<Pool>) -> Res<Vec<LayerView>> {
    let layers = db::layer::queries::select_all(&pool).await?;
    let mut res = Vec::with_capacity(layers.len());
    for layer in layers {
        res.push(LayerView::load(layer, &pool).await?);
    }
    Ok(Envelope::json(res))
}

#[get("{id}")]
pub async fn get_by_id(id: Path<String>, pool: Data<Pool>) -> Res<LayerView> {
    let layer = db::layer::queries::select_by_id(id.into_inner(), &pool).await?;
    Ok(Envelope::json(LayerView::load(layer, &pool).await?))
}

#[get("{id}/map-data")]
pub async fn get_map_data(id: Path<String>, pool: Data<Pool>) -> Res<FeatureCollection> {
    let collection = service::layer::load_layer_features(&id, &pool).await?;
    Ok(Envelope::json(collection))
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<LayerView> {
    let args = args.into_inner();
    let layer = NewLayer {
        id: args.id,
        dataset_id: args.dataset_id,
        name: args.name,
        legend: args.legend,
        description: args.description,
        color: args.color.unwrap_or_else(|| "#28A745".into()),
    };
    let layer = db::layer::queries::insert(layer, &pool).await?;
    Ok(Envelope::json(LayerView::load(layer, &pool).await?))
}
