use rusqlite::types::Type;
use rusqlite::Row;
use std::sync::OnceLock;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "catalog";

pub enum Columns {
    Id,
    Name,
    Description,
    ThumbnailUrl,
    CatalogLink,
    LayerIds,
    CreatedAt,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Name => "name",
            Columns::Description => "description",
            Columns::ThumbnailUrl => "thumbnail_url",
            Columns::CatalogLink => "catalog_link",
            Columns::LayerIds => "layer_ids",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

/// Producer catalog: an ordered bundle of layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub catalog_link: String,
    pub layer_ids: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub struct NewCatalog {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub catalog_link: String,
    pub layer_ids: Vec<String>,
}

impl Catalog {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::Id,
                Columns::Name,
                Columns::Description,
                Columns::ThumbnailUrl,
                Columns::CatalogLink,
                Columns::LayerIds,
                Columns::CreatedAt,
                Columns::UpdatedAt,
            ]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Self> {
        |row| {
            let layer_ids: String = row.get(Columns::LayerIds.as_str())?;
            let layer_ids = serde_json::from_str(&layer_ids).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?;
            Ok(Self {
                id: row.get(Columns::Id.as_str())?,
                name: row.get(Columns::Name.as_str())?,
                description: row.get(Columns::Description.as_str())?,
                thumbnail_url: row.get(Columns::ThumbnailUrl.as_str())?,
                catalog_link: row.get(Columns::CatalogLink.as_str())?,
                layer_ids,
                created_at: row.get(Columns::CreatedAt.as_str())?,
                updated_at: row.get(Columns::UpdatedAt.as_str())?,
            })
        }
    }
}

#[cfg(test)]
impl NewCatalog {
    pub fn mock(id: &str, layer_ids: &[&str]) -> NewCatalog {
        NewCatalog {
            id: id.into(),
            name: format!("Catalog {id}"),
            description: format!("Description {id}"),
            thumbnail_url: String::new(),
            catalog_link: String::new(),
            layer_ids: layer_ids.iter().map(|it| it.to_string()).collect(),
        }
    }
}
