use crate::db;
use crate::db::layer::schema::Layer;
use crate::zone::ZoneLayer;
use crate::Result;
use deadpool_sqlite::Pool;
use geojson::FeatureCollection;

/// Resolves a layer to the feature collection of its backing dataset.
pub async fn load_layer_features(layer_id: &str, pool: &Pool) -> Result<FeatureCollection> {
    let layer = db::layer::queries::select_by_id(layer_id, pool).await?;
    let dataset = db::dataset::queries::select_by_id(&layer.dataset_id, pool).await?;
    Ok(dataset.feature_collection)
}

pub async fn records_number(layer: &Layer, pool: &Pool) -> Result<i64> {
    db::dataset::queries::select_records_count(&layer.dataset_id, pool).await
}

pub async fn load_zone_layer(layer_id: &str, pool: &Pool) -> Result<ZoneLayer> {
    let layer = db::layer::queries::select_by_id(layer_id, pool).await?;
    let dataset = db::dataset::queries::select_by_id(&layer.dataset_id, pool).await?;
    Ok(ZoneLayer {
        id: layer.id,
        dataset_id: layer.dataset_id,
        name: layer.name,
        legend: layer.legend,
        description: layer.description,
        features: dataset.feature_collection.features,
    })
}

#[cfg(test)]
pub mod test {
    use crate::db;
    use crate::db::layer::schema::NewLayer;
    use crate::db::test::pool;
    use crate::{Error, Result};
    use actix_web::test;
    use deadpool_sqlite::Pool;
    use geojson::{Feature, FeatureCollection};

    pub async fn insert_layer(id: &str, features: Vec<Feature>, pool: &Pool) -> Result<()> {
        let dataset_id = format!("{id}_dataset");
        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        db::dataset::queries::upsert(&dataset_id, collection, pool).await?;
        db::layer::queries::insert(NewLayer::mock(id, &dataset_id), pool).await?;
        Ok(())
    }

    #[test]
    async fn load_layer_features() -> Result<()> {
        let pool = pool();
        insert_layer("cafes", vec![Feature::default(), Feature::default()], &pool).await?;
        let collection = super::load_layer_features("cafes", &pool).await?;
        assert_eq!(2, collection.features.len());
        Ok(())
    }

    #[test]
    async fn load_unknown_layer() {
        let pool = pool();
        assert!(matches!(
            super::load_layer_features("nope", &pool).await,
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    async fn records_number() -> Result<()> {
        let pool = pool();
        insert_layer("cafes", vec![Feature::default(), Feature::default()], &pool).await?;
        let layer = db::layer::queries::select_by_id("cafes", &pool).await?;
        assert_eq!(2, super::records_number(&layer, &pool).await?);
        Ok(())
    }

    #[test]
    async fn load_zone_layer() -> Result<()> {
        let pool = pool();
        insert_layer("malls", vec![Feature::default()], &pool).await?;
        let zone = super::load_zone_layer("malls", &pool).await?;
        assert_eq!("malls", zone.id);
        assert_eq!("malls_dataset", zone.dataset_id);
        assert_eq!("Layer malls", zone.name);
        assert_eq!(1, zone.features.len());
        Ok(())
    }
}
