pub mod catalog;
pub mod conf;
pub mod dataset;
pub mod layer;
pub mod migration;

use crate::{service::filesystem::data_dir_file_path, Result};
use deadpool_sqlite::{Config, Hook, Pool, Runtime};
use rusqlite::Connection;

const DB_FILE_NAME: &str = "s-locator.db";

pub fn open_connection() -> Result<Connection> {
    let conn = Connection::open(data_dir_file_path(DB_FILE_NAME)?)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

pub fn pool() -> Result<Pool> {
    // Schema changes happen once, before any pooled connection exists
    let mut conn = open_connection()?;
    migration::run(&mut conn)?;
    drop(conn);

    let pool_size = std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(8);
    Config::new(data_dir_file_path(DB_FILE_NAME)?)
        .builder(Runtime::Tokio1)
        .map_err(|e| e.to_string())?
        .max_size(pool_size)
        .post_create(Hook::Fn(Box::new(|conn, _| {
            let conn = conn.lock().unwrap();
            conn.pragma_update(None, "journal_mode", "WAL").unwrap();
            conn.pragma_update(None, "synchronous", "NORMAL").unwrap();
            conn.pragma_update(None, "foreign_keys", "ON").unwrap();
            Ok(())
        })))
        .build()
        .map_err(|e| e.to_string().into())
}
