use crate::{db, service, Error, Result};
use std::path::Path;
use tracing::info;

pub async fn run(args: &[String]) -> Result<()> {
    let [dataset_id, path] = args else {
        return Err(Error::InvalidInput(
            "Usage: import-dataset <dataset_id> <path>".into(),
        ));
    };
    let path = Path::new(path);
    if !path.is_file() {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Not a file: {path:?}"),
        ))?
    }
    info!(dataset_id = %dataset_id, path = ?path, "Importing dataset");
    let pool = db::pool()?;
    service::dataset::import(dataset_id, path, &pool).await?;
    Ok(())
}
