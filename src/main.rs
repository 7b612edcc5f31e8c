pub use error::Error;
mod command;
mod db;
mod error;
mod rest;
mod server;
mod service;
mod zone;
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> ExitCode {
    init_logging();

    if let Err(e) = run().await {
        error!(error = %e, "Command failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::InvalidInput("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => server::run().await?,
        "import-dataset" => command::import_dataset::run(&args[2..]).await?,
        first_arg => Err(Error::InvalidInput(format!(
            "Unknown command: {first_arg}"
        )))?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .without_time()
            .init();
    }
}
