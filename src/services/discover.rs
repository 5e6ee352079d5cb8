use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::PandaScoreClient;
use crate::config::AppConfig;
use crate::domain::{Team, TeamRegistry, TeamSearchResult};
use crate::ranking::types::TeamId;
use crate::store::TeamStore;

/// Builds a registry from every team that appears in a league's tournaments.
pub struct DiscoverService {
    config: AppConfig,
    store: TeamStore,
}

impl DiscoverService {
    pub fn new(mut config: AppConfig, game: String) -> Self {
        config.api.game = game;
        Self {
            config,
            store: TeamStore::new("."),
        }
    }

    pub async fn run(&self, region: &str, output: Option<PathBuf>) -> Result<()> {
        let mut client = PandaScoreClient::new(&self.config.api)?;

        let league = client
            .fetch_league(region)
            .await?
            .with_context(|| format!("No league found for region: {region}"))?;
        info!("Found league '{}' with ID: {}", league.name, league.id);

        let tournaments = client.fetch_league_tournaments(league.id).await?;
        if tournaments.is_empty() {
            anyhow::bail!("No tournaments found for league '{}'.", league.name);
        }
        info!(
            "Found {} tournaments for '{}'. Now fetching teams...",
            tournaments.len(),
            league.name
        );

        // Dedupes across tournaments; the same roster shows up in several.
        let mut teams: BTreeMap<TeamId, TeamSearchResult> = BTreeMap::new();
        for tournament in &tournaments {
            match client.fetch_tournament_teams(tournament.id).await {
                Ok(list) => {
                    info!("Found {} teams for tournament '{}'", list.len(), tournament.name);
                    for team in list {
                        teams.insert(team.id, team);
                    }
                }
                // The free plan lacks data for some tournaments (404s).
                Err(e) => warn!(
                    "Could not fetch teams for tournament '{}': {e:#}",
                    tournament.name
                ),
            }
        }

        if teams.is_empty() {
            anyhow::bail!("No teams found in any tournaments for '{region}'.");
        }

        let mut registry = TeamRegistry::default();
        for team in teams.into_values() {
            registry.insert(Team {
                id: team.id,
                name: team.name,
            });
        }

        let path = output.unwrap_or_else(|| {
            PathBuf::from(format!("{}_{}_teams.json", region, self.config.api.game))
        });
        self.store.save_registry(&path, &registry)?;
        println!(
            "Found {} unique teams in '{}'. Saved to '{}'.",
            registry.len(),
            league.name,
            path.display()
        );
        Ok(())
    }
}
