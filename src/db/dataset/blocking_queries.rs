use super::schema::{self, Columns, Dataset};
use crate::{Error, Result};
use geojson::FeatureCollection;
use rusqlite::{params, Connection, OptionalExtension};

pub fn upsert(
    id: impl Into<String>,
    feature_collection: &FeatureCollection,
    conn: &Connection,
) -> Result<Dataset> {
    let id = id.into();
    let sql = format!(
        r#"
            INSERT INTO {table} ({id_col}, {feature_collection})
            VALUES (?1, ?2)
            ON CONFLICT ({id_col}) DO UPDATE SET
                {feature_collection} = excluded.{feature_collection},
                {updated_at} = strftime('%Y-%m-%dT%H:%M:%fZ')
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        id_col = Columns::Id.as_str(),
        feature_collection = Columns::FeatureCollection.as_str(),
        updated_at = Columns::UpdatedAt.as_str(),
        projection = Dataset::projection(),
    );
    conn.query_row(
        &sql,
        params![id, serde_json::to_string(feature_collection)?],
        Dataset::mapper(),
    )
    .map_err(Into::into)
}

pub fn select_by_id(id: impl Into<String>, conn: &Connection) -> Result<Dataset> {
    let id = id.into();
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id_col} = ?1
        "#,
        projection = Dataset::projection(),
        table = schema::TABLE_NAME,
        id_col = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Dataset::mapper())
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Dataset {id} doesn't exist")))
}

/// Number of features in a dataset, counted without decoding the collection.
pub fn select_records_count(id: impl Into<String>, conn: &Connection) -> Result<i64> {
    let id = id.into();
    let sql = format!(
        r#"
            SELECT json_array_length({feature_collection}, '$.features')
            FROM {table}
            WHERE {id_col} = ?1
        "#,
        feature_collection = Columns::FeatureCollection.as_str(),
        table = schema::TABLE_NAME,
        id_col = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], |row| row.get::<_, Option<i64>>(0))
        .optional()?
        .map(|count| count.unwrap_or(0))
        .ok_or_else(|| Error::NotFound(format!("Dataset {id} doesn't exist")))
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;
    use crate::{Error, Result};
    use geojson::{Feature, FeatureCollection, Geometry, Value};

    fn collection(points: &[[f64; 2]]) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: points
                .iter()
                .map(|it| Feature {
                    geometry: Some(Geometry::new(Value::Point(it.to_vec()))),
                    ..Default::default()
                })
                .collect(),
            foreign_members: None,
        }
    }

    #[test]
    fn upsert_and_select() -> Result<()> {
        let conn = conn();
        super::upsert("gas", &collection(&[[46.7, 24.7]]), &conn)?;
        let dataset = super::select_by_id("gas", &conn)?;
        assert_eq!("gas", dataset.id);
        assert_eq!(1, dataset.feature_collection.features.len());
        Ok(())
    }

    #[test]
    fn upsert_replaces_features() -> Result<()> {
        let conn = conn();
        super::upsert("gas", &collection(&[[46.7, 24.7]]), &conn)?;
        let dataset = super::upsert("gas", &collection(&[[46.7, 24.7], [46.8, 24.8]]), &conn)?;
        assert_eq!(2, dataset.feature_collection.features.len());
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

    #[test]
    fn select_records_count() -> Result<()> {
        let conn = conn();
        super::upsert("gas", &collection(&[[46.7, 24.7], [46.8, 24.8]]), &conn)?;
        super::upsert("empty", &collection(&[]), &conn)?;
        assert_eq!(2, super::select_records_count("gas", &conn)?);
        assert_eq!(0, super::select_records_count("empty", &conn)?);
        assert!(matches!(
            super::select_records_count("nope", &conn),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }
}
