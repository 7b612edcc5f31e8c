use geojson::FeatureCollection;
use rusqlite::types::Type;
use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "dataset";

pub enum Columns {
    Id,
    FeatureCollection,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::FeatureCollection => "feature_collection",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

/// Stored point set backing one or more producer layers.
pub struct Dataset {
    pub id: String,
    pub feature_collection: FeatureCollection,
}

impl Dataset {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [Columns::Id, Columns::FeatureCollection]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Self> {
        |row| {
            let feature_collection: String = row.get(Columns::FeatureCollection.as_str())?;
            let feature_collection = serde_json::from_str(&feature_collection).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
            })?;
            Ok(Self {
                id: row.get(Columns::Id.as_str())?,
                feature_collection,
            })
        }
    }
}
