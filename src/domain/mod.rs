pub mod models;

pub use models::{
    LeagueResponse, MatchResponse, Team, TeamRegistry, TeamSearchResult, TournamentRef,
};
