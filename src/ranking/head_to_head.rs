use std::collections::{BTreeMap, HashMap};

use super::types::{MatchOutcome, TeamId};

/// Canonical unordered pair key, smaller id first.
pub type PairKey = (TeamId, TeamId);

/// Win tallies between one specific pair of teams.
///
/// Both sides of a pair are always representable: recording a win also seeds
/// the loser's count at 0.
#[derive(Debug, Clone, Default)]
pub struct PairRecord {
    wins: HashMap<TeamId, u32>,
}

impl PairRecord {
    fn record_win(&mut self, winner_id: TeamId, loser_id: TeamId) {
        *self.wins.entry(winner_id).or_insert(0) += 1;
        self.wins.entry(loser_id).or_insert(0);
    }

    pub fn wins_for(&self, team_id: TeamId) -> u32 {
        self.wins.get(&team_id).copied().unwrap_or(0)
    }

    /// Total decisive matches between the two teams.
    pub fn decisive_total(&self) -> u32 {
        self.wins.values().sum()
    }
}

pub fn pair_key(a: TeamId, b: TeamId) -> PairKey {
    if a <= b { (a, b) } else { (b, a) }
}

/// Raw win tallies per unordered team pair. No weighting, no normalization.
/// A key exists only if at least one decisive match exists between the pair;
/// BTreeMap keeps presentation order stable.
pub fn tally_head_to_head(outcomes: &[MatchOutcome]) -> BTreeMap<PairKey, PairRecord> {
    let mut records: BTreeMap<PairKey, PairRecord> = BTreeMap::new();

    for outcome in outcomes {
        let key = pair_key(outcome.winner_id, outcome.loser_id);
        records
            .entry(key)
            .or_default()
            .record_win(outcome.winner_id, outcome.loser_id);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winner: TeamId, loser: TeamId) -> MatchOutcome {
        MatchOutcome {
            winner_id: winner,
            loser_id: loser,
            league_id: None,
            series_length: 1,
        }
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(pair_key(5, 2), (2, 5));
        assert_eq!(pair_key(2, 5), (2, 5));
        assert_eq!(pair_key(3, 3), (3, 3));
    }

    #[test]
    fn tallies_per_pair_regardless_of_who_won() {
        // A beats B twice, B beats A once.
        let records = tally_head_to_head(&[outcome(1, 2), outcome(2, 1), outcome(1, 2)]);

        assert_eq!(records.len(), 1);
        let record = &records[&(1, 2)];
        assert_eq!(record.wins_for(1), 2);
        assert_eq!(record.wins_for(2), 1);
    }

    #[test]
    fn loser_side_is_representable_with_zero_wins() {
        let records = tally_head_to_head(&[outcome(1, 2)]);
        let record = &records[&(1, 2)];
        assert_eq!(record.wins_for(2), 0);
        assert_eq!(record.decisive_total(), 1);
    }

    #[test]
    fn win_counts_sum_to_decisive_matches_per_pair() {
        let outcomes = vec![
            outcome(1, 2),
            outcome(2, 1),
            outcome(1, 3),
            outcome(3, 1),
            outcome(3, 1),
        ];
        let records = tally_head_to_head(&outcomes);

        assert_eq!(records.len(), 2);
        for (key, record) in &records {
            let expected = outcomes
                .iter()
                .filter(|o| pair_key(o.winner_id, o.loser_id) == *key)
                .count() as u32;
            assert_eq!(record.decisive_total(), expected);
        }
    }

    #[test]
    fn no_outcomes_means_no_pairs() {
        assert!(tally_head_to_head(&[]).is_empty());
    }
}
