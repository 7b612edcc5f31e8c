use rusqlite::Row;
use std::sync::OnceLock;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "layer";

pub enum Columns {
    Id,
    DatasetId,
    Name,
    Legend,
    Description,
    Color,
    CreatedAt,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::DatasetId => "dataset_id",
            Columns::Name => "name",
            Columns::Legend => "legend",
            Columns::Description => "description",
            Columns::Color => "color",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

/// Producer layer: a named, styled view over a stored dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: String,
    pub dataset_id: String,
    pub name: String,
    pub legend: String,
    pub description: String,
    pub color: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub struct NewLayer {
    pub id: String,
    pub dataset_id: String,
    pub name: String,
    pub legend: String,
    pub description: String,
    pub color: String,
}

impl Layer {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::Id,
                Columns::DatasetId,
                Columns::Name,
                Columns::Legend,
                Columns::Description,
                Columns::Color,
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
            Ok(Self {
                id: row.get(Columns::Id.as_str())?,
                dataset_id: row.get(Columns::DatasetId.as_str())?,
                name: row.get(Columns::Name.as_str())?,
                legend: row.get(Columns::Legend.as_str())?,
                description: row.get(Columns::Description.as_str())?,
                color: row.get(Columns::Color.as_str())?,
                created_at: row.get(Columns::CreatedAt.as_str())?,
                updated_at: row.get(Columns::UpdatedAt.as_str())?,
            })
        }
    }
}

#[cfg(test)]
impl NewLayer {
    pub fn mock(id: &str, dataset_id: &str) -> NewLayer {
        NewLayer {
            id: id.into(),
            dataset_id: dataset_id.into(),
            name: format!("Layer {id}"),
            legend: format!("Legend {id}"),
            description: format!("Description {id}"),
            color: "#28A745".into(),
        }
    }
}
