use super::schema::{self, Catalog, Columns, NewCatalog};
use crate::db::layer;
use crate::{Error, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::collections::HashSet;

pub fn insert(catalog: &NewCatalog, conn: &Connection) -> Result<Catalog> {
    let mut seen = HashSet::new();
    for layer_id in &catalog.layer_ids {
        if !seen.insert(layer_id) {
            return Err(Error::InvalidInput(format!(
                "Layer {layer_id} is listed twice in catalog {}",
                catalog.id
            )));
        }
        layer::blocking_queries::select_by_id(layer_id, conn)?;
    }
    let sql = format!(
        r#"
            INSERT INTO {table} ({id}, {name}, {description}, {thumbnail_url}, {catalog_link}, {layer_ids})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        name = Columns::Name.as_str(),
        description = Columns::Description.as_str(),
        thumbnail_url = Columns::ThumbnailUrl.as_str(),
        catalog_link = Columns::CatalogLink.as_str(),
        layer_ids = Columns::LayerIds.as_str(),
        projection = Catalog::projection(),
    );
    conn.query_row(
        &sql,
        params![
            catalog.id,
            catalog.name,
            catalog.description,
            catalog.thumbnail_url,
            catalog.catalog_link,
            serde_json::to_string(&catalog.layer_ids)?,
        ],
        Catalog::mapper(),
    )
    .map_err(|e| match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => {
            Error::InvalidInput(format!("Catalog {} already exists", catalog.id))
        }
        _ => e.into(),
    })
}

pub fn select_all(conn: &Connection) -> Result<Vec<Catalog>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {created_at}, {id}
        "#,
        projection = Catalog::projection(),
        table = schema::TABLE_NAME,
        created_at = Columns::CreatedAt.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_map((), Catalog::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: impl Into<String>, conn: &Connection) -> Result<Catalog> {
    let id = id.into();
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id_col} = ?1
        "#,
        projection = Catalog::projection(),
        table = schema::TABLE_NAME,
        id_col = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Catalog::mapper())
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Catalog {id} doesn't exist")))
}

#[cfg(test)]
mod test {
    use crate::db::catalog::schema::NewCatalog;
    use crate::db::layer::schema::NewLayer;
    use crate::db::test::conn;
    use crate::db::{dataset, layer};
    use crate::{Error, Result};
    use geojson::FeatureCollection;
    use rusqlite::Connection;

    fn insert_layers(ids: &[&str], conn: &Connection) -> Result<()> {
        let empty = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        dataset::blocking_queries::upsert("ds", &empty, conn)?;
        for id in ids {
            layer::blocking_queries::insert(&NewLayer::mock(id, "ds"), conn)?;
        }
        Ok(())
    }

    #[test]
    fn insert() -> Result<()> {
        let conn = conn();
        insert_layers(&["cafes", "malls"], &conn)?;
        let catalog = super::insert(&NewCatalog::mock("riyadh", &["malls", "cafes"]), &conn)?;
        assert_eq!(vec!["malls", "cafes"], catalog.layer_ids);
        assert_eq!(catalog, super::select_by_id("riyadh", &conn)?);
        Ok(())
    }

    #[test]
    fn insert_unknown_layer() -> Result<()> {
        let conn = conn();
        insert_layers(&["cafes"], &conn)?;
        assert!(matches!(
            super::insert(&NewCatalog::mock("riyadh", &["cafes", "malls"]), &conn),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn insert_repeated_layer() -> Result<()> {
        let conn = conn();
        insert_layers(&["cafes"], &conn)?;
        assert!(matches!(
            super::insert(&NewCatalog::mock("riyadh", &["cafes", "cafes"]), &conn),
            Err(Error::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    fn insert_duplicate() -> Result<()> {
        let conn = conn();
        super::insert(&NewCatalog::mock("riyadh", &[]), &conn)?;
        assert!(matches!(
            super::insert(&NewCatalog::mock("riyadh", &[]), &conn),
            Err(Error::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    fn select_all() -> Result<()> {
        let conn = conn();
        super::insert(&NewCatalog::mock("riyadh", &[]), &conn)?;
        super::insert(&NewCatalog::mock("jeddah", &[]), &conn)?;
        assert_eq!(2, super::select_all(&conn)?.len());
        Ok(())
    }

    #[test]
    fn select_missing() {
        let conn = conn();
        assert!(matches!(
            super::select_by_id("nope", &conn),
            Err(Error::NotFound(_))
        ));
    }
}
