use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use crate::config::settings::ApiSettings;
use crate::domain::models::{LeagueResponse, MatchResponse, TeamSearchResult, TournamentRef};
use crate::http::RateLimitedClient;
use crate::ranking::types::{LeagueId, TeamId};

const API_KEY_ENV: &str = "PANDASCORE_API_KEY";

/// PandaScore API client
pub struct PandaScoreClient {
    client: RateLimitedClient,
    base_url: &'static str,
    game: String,
}

impl PandaScoreClient {
    /// Create a new client; fails fast when the API key is missing.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let token = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{API_KEY_ENV} environment variable is not set"))?;

        let client = RateLimitedClient::new(
            &token,
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: settings.base_url,
            game: settings.game.clone(),
        })
    }

    /// Head-to-head history between two teams, newest first.
    ///
    /// The opponent filter is an OR on the API side, so the response is
    /// post-filtered down to matches listing both requested teams.
    pub async fn fetch_pair_matches(
        &mut self,
        team1_id: TeamId,
        team2_id: TeamId,
    ) -> Result<Vec<MatchResponse>> {
        let url = self.build_pair_matches_url(team1_id, team2_id);
        let matches: Vec<MatchResponse> = self.get_json(&url).await?;

        Ok(matches
            .into_iter()
            .filter(|m| m.lists_opponent(team1_id) && m.lists_opponent(team2_id))
            .collect())
    }

    /// Search teams by name, up to 10 candidates.
    pub async fn search_teams(&mut self, name: &str) -> Result<Vec<TeamSearchResult>> {
        let url = self.build_team_search_url(name);
        info!("Searching teams matching '{}'", name);
        self.get_json(&url).await
    }

    /// Look up a league by its slug (e.g. "lck").
    pub async fn fetch_league(&mut self, slug: &str) -> Result<Option<LeagueResponse>> {
        let url = self.build_league_url(slug);
        let mut leagues: Vec<LeagueResponse> = self.get_json(&url).await?;
        Ok(if leagues.is_empty() {
            None
        } else {
            Some(leagues.swap_remove(0))
        })
    }

    pub async fn fetch_league_tournaments(
        &mut self,
        league_id: LeagueId,
    ) -> Result<Vec<TournamentRef>> {
        let url = self.build_league_tournaments_url(league_id);
        self.get_json(&url).await
    }

    pub async fn fetch_tournament_teams(
        &mut self,
        tournament_id: i64,
    ) -> Result<Vec<TeamSearchResult>> {
        let url = self.build_tournament_teams_url(tournament_id);
        self.get_json(&url).await
    }

    // --- Helper Methods ---

    async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        let response = self.client.get(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status {} for {}", response.status(), url);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {url}"))
    }

    fn build_pair_matches_url(&self, team1_id: TeamId, team2_id: TeamId) -> String {
        format!(
            "{}/{}/matches?filter[opponent_id]={},{}&sort=-end_at&per_page=50&include=opponents,winner,games,league",
            self.base_url, self.game, team1_id, team2_id
        )
    }

    fn build_team_search_url(&self, name: &str) -> String {
        format!(
            "{}/{}/teams?search[name]={}&per_page=10",
            self.base_url,
            self.game,
            urlencoding::encode(name)
        )
    }

    fn build_league_url(&self, slug: &str) -> String {
        format!(
            "{}/{}/leagues?filter[slug]={}",
            self.base_url,
            self.game,
            urlencoding::encode(slug)
        )
    }

    fn build_league_tournaments_url(&self, league_id: LeagueId) -> String {
        format!(
            "{}/{}/leagues/{}/tournaments",
            self.base_url, self.game, league_id
        )
    }

    fn build_tournament_teams_url(&self, tournament_id: i64) -> String {
        // Tournaments are not scoped under a game segment.
        format!("{}/tournaments/{}/teams", self.base_url, tournament_id)
    }
}
