use anyhow::Result;

use worlds_ranking::cli::Command;
use worlds_ranking::{handle_discover, handle_rank, handle_teams, interpret};

fn main() {
    setup_logging();
    load_environment();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn load_environment() {
    // .env is optional; the API key can come from the environment directly.
    dotenvy::dotenv().ok();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Rank { file, output } => handle_rank(file, output),
        Command::Teams { file } => handle_teams(file),
        Command::Discover {
            region,
            game,
            output,
        } => handle_discover(region, game, output),
    }
}
