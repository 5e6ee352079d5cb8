use log::debug;

use super::types::{MatchOutcome, MatchSet, Participation};
use crate::domain::MatchResponse;

/// Canonicalizes raw match records into engine input.
///
/// A record yields a `MatchOutcome` only if it lists exactly two identified
/// opponents and a winner whose id is one of them; the loser is the other
/// opponent. Records failing that are dropped from scoring.
///
/// Games-played accounting is deliberately looser: every record with exactly
/// two identified opponents contributes a `Participation`, winner or no
/// winner, so an abandoned or unresolved series still counts toward both
/// teams' `total_games`.
///
/// Pure transformation; unknown team ids pass through untouched and are the
/// engine's concern.
pub fn normalize_matches(matches: &[MatchResponse]) -> MatchSet {
    let mut set = MatchSet::default();
    let mut dropped = 0usize;

    for record in matches {
        let opponents = record.opponent_ids();
        if opponents.len() != 2 {
            dropped += 1;
            continue;
        }

        set.participations.push(Participation {
            sides: [opponents[0], opponents[1]],
            games: record.series_length(),
        });

        match resolve_outcome(record, &opponents) {
            Some(outcome) => set.outcomes.push(outcome),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} malformed or undecided match records", dropped);
    }

    set
}

fn resolve_outcome(record: &MatchResponse, opponents: &[i64]) -> Option<MatchOutcome> {
    let winner_id = record.winner_id()?;
    let loser_id = opponents.iter().copied().find(|&id| id != winner_id)?;
    if !opponents.contains(&winner_id) {
        return None;
    }

    Some(MatchOutcome {
        winner_id,
        loser_id,
        league_id: record.league_id(),
        series_length: record.series_length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> MatchResponse {
        serde_json::from_str(json).unwrap()
    }

    fn decisive(winner: i64, loser: i64, games: usize) -> MatchResponse {
        let games_json: Vec<String> = (0..games).map(|i| format!("{{\"id\": {i}}}")).collect();
        raw(&format!(
            r#"{{
                "opponents": [
                    {{"opponent": {{"id": {winner}}}}},
                    {{"opponent": {{"id": {loser}}}}}
                ],
                "winner": {{"id": {winner}}},
                "games": [{}]
            }}"#,
            games_json.join(",")
        ))
    }

    #[test]
    fn decisive_match_yields_one_outcome_and_one_participation() {
        let set = normalize_matches(&[decisive(1, 2, 3)]);
        assert_eq!(set.outcomes.len(), 1);
        assert_eq!(set.participations.len(), 1);

        let outcome = &set.outcomes[0];
        assert_eq!(outcome.winner_id, 1);
        assert_eq!(outcome.loser_id, 2);
        assert_eq!(outcome.series_length, 3);
    }

    #[test]
    fn winnerless_match_still_counts_games() {
        let record = raw(
            r#"{
                "opponents": [
                    {"opponent": {"id": 1}},
                    {"opponent": {"id": 2}}
                ],
                "games": [{"id": 1}, {"id": 2}]
            }"#,
        );
        let set = normalize_matches(&[record]);
        assert!(set.outcomes.is_empty());
        assert_eq!(set.participations.len(), 1);
        assert_eq!(set.participations[0].games, 2);
        assert_eq!(set.participations[0].sides, [1, 2]);
    }

    #[test]
    fn winner_not_among_opponents_is_dropped_from_scoring() {
        let record = raw(
            r#"{
                "opponents": [
                    {"opponent": {"id": 1}},
                    {"opponent": {"id": 2}}
                ],
                "winner": {"id": 99},
                "games": [{"id": 1}]
            }"#,
        );
        let set = normalize_matches(&[record]);
        assert!(set.outcomes.is_empty());
        assert_eq!(set.participations.len(), 1);
    }

    #[test]
    fn wrong_opponent_count_yields_nothing() {
        let one_sided = raw(r#"{"opponents": [{"opponent": {"id": 1}}], "winner": {"id": 1}}"#);
        let empty = raw(r#"{}"#);
        let set = normalize_matches(&[one_sided, empty]);
        assert!(set.outcomes.is_empty());
        assert!(set.participations.is_empty());
    }

    #[test]
    fn opponent_slot_without_id_is_not_counted_as_opponent() {
        let record = raw(
            r#"{
                "opponents": [
                    {"opponent": {"id": 1}},
                    {"opponent": {"name": "TBD"}}
                ],
                "winner": {"id": 1}
            }"#,
        );
        let set = normalize_matches(&[record]);
        assert!(set.outcomes.is_empty());
        assert!(set.participations.is_empty());
    }

    #[test]
    fn missing_games_list_means_zero_series_length() {
        let record = raw(
            r#"{
                "opponents": [
                    {"opponent": {"id": 1}},
                    {"opponent": {"id": 2}}
                ],
                "winner": {"id": 2}
            }"#,
        );
        let set = normalize_matches(&[record]);
        assert_eq!(set.outcomes[0].series_length, 0);
        assert_eq!(set.participations[0].games, 0);
    }
}
