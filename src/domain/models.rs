use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ranking::types::{LeagueId, TeamId};

/// A tracked team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// The universe of teams to rank, keyed by display name.
///
/// Serialized shape matches the registry files on disk:
/// `{ "T1": { "id": 126061, "name": "T1" }, ... }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRegistry {
    teams: BTreeMap<String, Team>,
}

impl TeamRegistry {
    pub fn insert(&mut self, team: Team) {
        self.teams.insert(team.name.clone(), team);
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.teams
            .values()
            .any(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn ids(&self) -> Vec<TeamId> {
        self.teams.values().map(|t| t.id).collect()
    }

    pub fn id_name_map(&self) -> HashMap<TeamId, String> {
        self.teams
            .values()
            .map(|t| (t.id, t.name.clone()))
            .collect()
    }

    /// Boundary precondition: a ranking needs at least two teams.
    pub fn validate(&self) -> Result<()> {
        if self.len() < 2 {
            anyhow::bail!(
                "Not enough teams to compare ({} found). Add at least two teams.",
                self.len()
            );
        }
        Ok(())
    }
}

// --- API Response Structures ---

/// Raw match from the PandaScore `/matches` endpoint.
///
/// Every nested field is optional; the API omits or nulls fields freely and
/// malformed records are the normalizer's problem, not a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub opponents: Vec<OpponentSlot>,
    #[serde(default)]
    pub winner: Option<WinnerInfo>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
    #[serde(default)]
    pub games: Vec<GameRef>,
    #[serde(default)]
    pub name: Option<String>,
}

impl MatchResponse {
    /// Ids of the opponents that actually carry one.
    pub fn opponent_ids(&self) -> Vec<TeamId> {
        self.opponents
            .iter()
            .filter_map(|slot| slot.opponent.as_ref())
            .filter_map(|opp| opp.id)
            .collect()
    }

    pub fn winner_id(&self) -> Option<TeamId> {
        self.winner.as_ref().and_then(|w| w.id)
    }

    pub fn league_id(&self) -> Option<LeagueId> {
        self.league.as_ref().and_then(|l| l.id)
    }

    /// Number of games played in the series (0 if the API sent none).
    pub fn series_length(&self) -> u32 {
        self.games.len() as u32
    }

    pub fn lists_opponent(&self, team_id: TeamId) -> bool {
        self.opponent_ids().contains(&team_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpponentSlot {
    #[serde(default)]
    pub opponent: Option<OpponentRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpponentRef {
    #[serde(default)]
    pub id: Option<TeamId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WinnerInfo {
    #[serde(default)]
    pub id: Option<TeamId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRef {
    #[serde(default)]
    pub id: Option<LeagueId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Team entry from `/teams?search[name]=` and `/tournaments/{id}/teams`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamSearchResult {
    pub id: TeamId,
    pub name: String,
}

/// League entry from `/leagues?filter[slug]=`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueResponse {
    pub id: LeagueId,
    pub name: String,
}

/// Tournament entry from `/leagues/{id}/tournaments`.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentRef {
    pub id: i64,
    pub name: String,
}
