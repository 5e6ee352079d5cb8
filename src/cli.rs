use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "weighted head-to-head team rankings from PandaScore")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rank the teams in a registry file by weighted head-to-head results
    Rank {
        /// Team registry JSON file (interactive picker when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Write the report here instead of prompting to save
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search for teams by name and add them to a registry file
    Teams {
        /// Registry file to create or extend
        #[arg(short, long, default_value = "teams.json")]
        file: PathBuf,
    },
    /// Build a registry from every team in a league/region
    Discover {
        /// League slug, e.g. lck, lec, lcs
        #[arg(short, long)]
        region: String,
        /// Game slug
        #[arg(short, long, default_value = "lol")]
        game: String,
        /// Output registry file (defaults to <region>_<game>_teams.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Numbered pick from a list of `count` options; empty input cancels.
pub fn choose_index(count: usize) -> Result<Option<usize>> {
    loop {
        let input = prompt(&format!("Enter your choice (1-{count}): "))?;
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            Ok(_) => println!("Invalid choice. Please enter a number within the range."),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
