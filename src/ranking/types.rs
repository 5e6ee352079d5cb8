use std::collections::HashMap;

pub type TeamId = i64;
pub type LeagueId = i64;
pub type WinRateTable = HashMap<TeamId, f64>;

/// One decisive match, post-normalization.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub winner_id: TeamId,
    pub loser_id: TeamId,
    pub league_id: Option<LeagueId>,
    pub series_length: u32,
}

/// Games-played entry for one match, decisive or not.
///
/// Kept separate from `MatchOutcome` so that a match with no resolvable
/// winner still counts toward both participants' `total_games`.
#[derive(Debug, Clone)]
pub struct Participation {
    pub sides: [TeamId; 2],
    pub games: u32,
}

/// Output of the normalizer, input to the ranking engine.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    pub outcomes: Vec<MatchOutcome>,
    pub participations: Vec<Participation>,
}

/// Per-team accumulator and final ranking row.
#[derive(Debug, Clone)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points: f64,
    pub total_games: u32,
    pub normalized_points: f64,
}

impl TeamStanding {
    pub fn zeroed(team_id: TeamId, name: String) -> Self {
        Self {
            team_id,
            name,
            wins: 0,
            losses: 0,
            points: 0.0,
            total_games: 0,
            normalized_points: 0.0,
        }
    }

    pub fn decisive_matches(&self) -> u32 {
        self.wins + self.losses
    }
}
