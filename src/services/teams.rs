use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use log::{error, warn};

use crate::api::PandaScoreClient;
use crate::cli;
use crate::config::AppConfig;
use crate::domain::{Team, TeamRegistry, TeamSearchResult};
use crate::store::TeamStore;

/// Interactive team search-and-add loop for building registry files.
pub struct TeamService {
    config: AppConfig,
    store: TeamStore,
}

impl TeamService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: TeamStore::new("."),
        }
    }

    pub async fn run(&self, file: PathBuf) -> Result<()> {
        let mut registry = self.load_or_start_registry(&file);
        let mut client = PandaScoreClient::new(&self.config.api)?;

        loop {
            let input = cli::prompt(
                "\nEnter a team name to add (e.g., T1, Gen.G) or type 'done' to finish: ",
            )?;
            if input.is_empty() || input.eq_ignore_ascii_case("done") {
                break;
            }

            if registry.contains_name(&input) {
                println!("'{input}' is already in '{}'.", file.display());
                continue;
            }

            if let Some(team) = self.search_and_pick(&mut client, &input).await? {
                println!(
                    "\nAdded {} (ID: {}) to the registry.",
                    team.name.green(),
                    team.id
                );
                registry.insert(team);
            }
        }

        self.store.save_registry(&file, &registry)?;
        println!("\nFinal team list saved to '{}'.", file.display());
        Ok(())
    }

    /// An unreadable file starts a fresh registry instead of aborting; the
    /// save at the end rewrites it wholesale anyway.
    fn load_or_start_registry(&self, file: &Path) -> TeamRegistry {
        if !file.exists() {
            return TeamRegistry::default();
        }

        match self.store.load_registry(file) {
            Ok(registry) => registry,
            Err(e) => {
                warn!("'{}' could not be loaded ({e:#}); starting fresh", file.display());
                TeamRegistry::default()
            }
        }
    }

    async fn search_and_pick(
        &self,
        client: &mut PandaScoreClient,
        name: &str,
    ) -> Result<Option<Team>> {
        let candidates = match client.search_teams(name).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Error searching for team '{name}': {e:#}");
                return Ok(None);
            }
        };

        if candidates.is_empty() {
            println!("No team found matching '{name}'. Please try a different name.");
            return Ok(None);
        }

        self.pick_candidate(name, &candidates)
    }

    fn pick_candidate(
        &self,
        name: &str,
        candidates: &[TeamSearchResult],
    ) -> Result<Option<Team>> {
        println!(
            "\nFound {} teams similar to '{}'. Please select the correct one:",
            candidates.len(),
            name
        );
        for (i, candidate) in candidates.iter().enumerate() {
            println!(
                "  {}. {} (ID: {})",
                (i + 1).to_string().cyan(),
                candidate.name,
                candidate.id
            );
        }

        Ok(cli::choose_index(candidates.len())?.map(|idx| Team {
            id: candidates[idx].id,
            name: candidates[idx].name.clone(),
        }))
    }
}
