use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use crate::api::PandaScoreClient;
use crate::cli;
use crate::config::AppConfig;
use crate::domain::{MatchResponse, TeamRegistry};
use crate::ranking::types::TeamId;
use crate::ranking::{normalize_matches, rank_teams, tally_head_to_head};
use crate::report;
use crate::store::TeamStore;

/// Orchestrates the `rank` command: registry in, report out.
pub struct RankingService {
    config: AppConfig,
    store: TeamStore,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: TeamStore::new("."),
        }
    }

    pub async fn run(&self, file: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
        let Some(path) = self.resolve_registry_path(file)? else {
            println!("Selection cancelled.");
            return Ok(());
        };

        let registry = self.store.load_registry(&path)?;
        registry.validate()?;

        let universe = registry.id_name_map();
        let matches = self.fetch_all_matches(&registry, &universe).await?;
        if matches.is_empty() {
            println!("\nNo head-to-head matches found for the listed teams.");
            return Ok(());
        }

        let set = normalize_matches(&matches);
        let standings = rank_teams(&set, &universe, &self.config.scoring);
        let records = tally_head_to_head(&set.outcomes);

        let report_text = format!(
            "{}\n{}",
            report::format_standings(&standings),
            report::format_head_to_head(&records, &universe)
        );
        println!("{report_text}");

        self.save_report(output, &report_text)
    }

    fn resolve_registry_path(&self, file: Option<PathBuf>) -> Result<Option<PathBuf>> {
        match file {
            Some(path) => Ok(Some(path)),
            None => self.choose_registry_file(),
        }
    }

    /// Interactive picker over the `*.json` files in the working directory.
    fn choose_registry_file(&self) -> Result<Option<PathBuf>> {
        let files = self.store.list_registry_files()?;
        if files.is_empty() {
            anyhow::bail!("No JSON files found in the current directory.");
        }

        println!(
            "{}",
            "Please choose a JSON file to load the teams from:".bold()
        );
        for (i, file) in files.iter().enumerate() {
            println!("[{}] {}", (i + 1).to_string().cyan(), file.display());
        }

        Ok(cli::choose_index(files.len())?.map(|idx| files[idx].clone()))
    }

    /// Full pair history for every unordered team pair. A failed pair fetch
    /// logs and contributes nothing; the run goes on with what it has.
    async fn fetch_all_matches(
        &self,
        registry: &TeamRegistry,
        universe: &HashMap<TeamId, String>,
    ) -> Result<Vec<MatchResponse>> {
        let mut client = PandaScoreClient::new(&self.config.api)?;
        let ids = registry.ids();
        info!(
            "Fetching matches for {} unique team pairs",
            ids.len() * (ids.len() - 1) / 2
        );

        let mut all_matches = Vec::new();
        for (i, &team1_id) in ids.iter().enumerate() {
            for &team2_id in &ids[i + 1..] {
                match client.fetch_pair_matches(team1_id, team2_id).await {
                    Ok(matches) => {
                        if !matches.is_empty() {
                            info!(
                                "Found {} matches between {} and {}",
                                matches.len(),
                                name_of(universe, team1_id),
                                name_of(universe, team2_id)
                            );
                        }
                        all_matches.extend(matches);
                    }
                    Err(e) => error!(
                        "Error fetching matches between '{}' and '{}': {e:#}",
                        name_of(universe, team1_id),
                        name_of(universe, team2_id)
                    ),
                }
            }
        }

        Ok(all_matches)
    }

    fn save_report(&self, output: Option<PathBuf>, report_text: &str) -> Result<()> {
        let path = match output {
            Some(path) => path,
            None => match self.ask_for_save_path()? {
                Some(path) => path,
                None => {
                    println!("\nResults not saved.");
                    return Ok(());
                }
            },
        };

        self.store.save_report(&path, report_text)?;
        println!("\nResults successfully saved to '{}'.", path.display());
        Ok(())
    }

    fn ask_for_save_path(&self) -> Result<Option<PathBuf>> {
        let answer = cli::prompt("\nDo you want to save the results to a text file? (y/n): ")?;
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(None);
        }

        let filename = cli::prompt("Enter the filename to save as (e.g., 'rankings.txt'): ")?;
        if filename.is_empty() {
            println!("Using default filename: 'rankings.txt'");
            return Ok(Some(PathBuf::from("rankings.txt")));
        }
        Ok(Some(PathBuf::from(filename)))
    }
}

fn name_of(universe: &HashMap<TeamId, String>, team_id: TeamId) -> &str {
    universe.get(&team_id).map_or("Unknown", String::as_str)
}
