pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod ranking;
pub mod rate_limiter;
pub mod report;
pub mod services;
pub mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::discover::DiscoverService;
use crate::services::ranking::RankingService;
use crate::services::teams::TeamService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(file: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = RankingService::new(config);
        service.run(file, output).await
    })
}

pub fn handle_teams(file: PathBuf) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = TeamService::new(config);
        service.run(file).await
    })
}

pub fn handle_discover(region: String, game: String, output: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = DiscoverService::new(config, game);
        service.run(&region, output).await
    })
}
