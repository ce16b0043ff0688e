pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod pagination;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::seeding::SeedingService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_seed(database: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let db_path = database.unwrap_or(config.database.default_path);
    let service = SeedingService::new(db_path)?;
    service.run()
}
