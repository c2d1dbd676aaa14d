//! Migration CLI tool.

use blog_infra::telemetry::{TelemetryConfig, init_telemetry};
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = init_telemetry(&TelemetryConfig::from_env()) {
        eprintln!("{e}");
    }

    cli::run_cli(migration::Migrator).await;
}
