use super::schema::{self, Columns, Layer, NewLayer};
use crate::db::dataset;
use crate::{Error, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

pub fn insert(layer: &NewLayer, conn: &Connection) -> Result<Layer> {
    // Surfaces as NotFound instead of a foreign key violation
    dataset::blocking_queries::select_by_id(&layer.dataset_id, conn)?;
    let sql = format!(
        r#"
            INSERT INTO {table} ({id}, {dataset_id}, {name}, {legend}, {description}, {color})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        dataset_id = Columns::DatasetId.as_str(),
        name = Columns::Name.as_str(),
        legend = Columns::Legend.as_str(),
        description = Columns::Description.as_str(),
        color = Columns::Color.as_str(),
        projection = Layer::projection(),
    );
    conn.query_row(
        &sql,
        params![
            layer.id,
            layer.dataset_id,
            layer.name,
            layer.legend,
            layer.description,
            layer.color,
        ],
        Layer::mapper(),
    )
    .map_err(|e| match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => {
            Error::InvalidInput(format!("Layer {} already exists", layer.id))
        }
        _ => e.into(),
    })
}

pub fn select_all(conn: &Connection) -> Result<Vec<Layer>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {created_at}, {id}
        "#,
        projection = Layer::projection(),
        table = schema::TABLE_NAME,
        created_at = Columns::CreatedAt.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_map((), Layer::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: impl Into<String>, conn: &Connection) -> Result<Layer> {
    let id = id.into();
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id_col} = ?1
        "#,
        projection = Layer::projection(),
        table = schema::TABLE_NAME,
        id_col = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Layer::mapper())
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Layer {id} doesn't exist")))
}
