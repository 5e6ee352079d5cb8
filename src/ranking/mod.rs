pub mod engine;
pub mod head_to_head;
pub mod outcomes;
pub mod types;

pub use engine::rank_teams;
pub use head_to_head::{PairKey, PairRecord, pair_key, tally_head_to_head};
pub use outcomes::normalize_matches;
pub use types::{MatchOutcome, MatchSet, Participation, TeamId, TeamStanding};
