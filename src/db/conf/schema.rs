use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "conf";

pub enum Columns {
    ServerHost,
    ServerPort,
    JsonLimitBytes,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::ServerHost => "server_host",
            Columns::ServerPort => "server_port",
            Columns::JsonLimitBytes => "json_limit_bytes",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Conf {
    pub server_host: String,
    pub server_port: u16,
    pub json_limit_bytes: u32,
}

impl Conf {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::ServerHost,
                Columns::ServerPort,
                Columns::JsonLimitBytes,
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
                server_host: row.get(Columns::ServerHost.as_str())?,
                server_port: row.get(Columns::ServerPort.as_str())?,
                json_limit_bytes: row.get(Columns::JsonLimitBytes.as_str())?,
            })
        }
    }
}
