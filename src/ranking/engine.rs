use std::collections::HashMap;

use log::info;

use super::types::{MatchSet, TeamId, TeamStanding, WinRateTable};
use crate::config::settings::ScoringSettings;

/// Produces the weighted ranking from a normalized match set.
///
/// Two mandatory passes: pass 1 derives wins/losses and total games, from
/// which the win-rate table is computed; pass 2 scores each win using series
/// length, league weight and the upset bonus. The upset bonus for an early
/// match can depend on a win rate only knowable after seeing later matches,
/// so the passes never interleave.
///
/// Every id in `universe` gets a standing, zeroed if it never played.
/// Outcomes referencing ids outside the universe are credited to nobody.
pub fn rank_teams(
    set: &MatchSet,
    universe: &HashMap<TeamId, String>,
    settings: &ScoringSettings,
) -> Vec<TeamStanding> {
    info!(
        "Ranking {} teams over {} decisive matches",
        universe.len(),
        set.outcomes.len()
    );

    let mut standings = build_standings_table(universe);

    tally_results(set, &mut standings);
    let winrates = derive_winrates(&standings);
    award_points(set, &winrates, settings, &mut standings);
    normalize_points(&mut standings);

    sort_standings(standings)
}

fn build_standings_table(universe: &HashMap<TeamId, String>) -> HashMap<TeamId, TeamStanding> {
    universe
        .iter()
        .map(|(&id, name)| (id, TeamStanding::zeroed(id, name.clone())))
        .collect()
}

/// Pass 1: win/loss counts from decisive outcomes, total games from every
/// participation (decisive or not).
fn tally_results(set: &MatchSet, standings: &mut HashMap<TeamId, TeamStanding>) {
    for outcome in &set.outcomes {
        if let Some(winner) = standings.get_mut(&outcome.winner_id) {
            winner.wins += 1;
        }
        if let Some(loser) = standings.get_mut(&outcome.loser_id) {
            loser.losses += 1;
        }
    }

    for participation in &set.participations {
        for side in participation.sides {
            if let Some(standing) = standings.get_mut(&side) {
                standing.total_games += participation.games;
            }
        }
    }
}

/// Teams with no decisive matches get a 0 win rate.
fn derive_winrates(standings: &HashMap<TeamId, TeamStanding>) -> WinRateTable {
    standings
        .values()
        .map(|s| {
            let decisive = s.decisive_matches();
            let winrate = if decisive > 0 {
                f64::from(s.wins) / f64::from(decisive)
            } else {
                0.0
            };
            (s.team_id, winrate)
        })
        .collect()
}

/// Pass 2: weighted points per win.
fn award_points(
    set: &MatchSet,
    winrates: &WinRateTable,
    settings: &ScoringSettings,
    standings: &mut HashMap<TeamId, TeamStanding>,
) {
    for outcome in &set.outcomes {
        let Some(winner) = standings.get_mut(&outcome.winner_id) else {
            continue;
        };

        let series_weight = settings.series_multiplier(outcome.series_length);
        let league_weight = settings.league_weight(outcome.league_id);
        let upset = upset_multiplier(
            winrate_of(winrates, outcome.winner_id),
            winrate_of(winrates, outcome.loser_id),
        );

        winner.points += settings.base_win_points * series_weight * upset * league_weight;
    }
}

fn winrate_of(winrates: &WinRateTable, team_id: TeamId) -> f64 {
    winrates.get(&team_id).copied().unwrap_or(0.0)
}

/// Rewards the winner proportionally to how much weaker their historical win
/// rate was relative to the loser's; 1.0 when the winner was the favorite.
fn upset_multiplier(winner_winrate: f64, loser_winrate: f64) -> f64 {
    if winner_winrate < loser_winrate {
        1.0 + (loser_winrate - winner_winrate)
    } else {
        1.0
    }
}

/// Pass 3: points per game played. Zero-game teams stay at 0, never a
/// division error.
fn normalize_points(standings: &mut HashMap<TeamId, TeamStanding>) {
    for standing in standings.values_mut() {
        if standing.total_games > 0 {
            standing.normalized_points = standing.points / f64::from(standing.total_games);
        }
    }
}

/// Descending by normalized points; ties break ascending by team id so the
/// output order is reproducible.
fn sort_standings(standings: HashMap<TeamId, TeamStanding>) -> Vec<TeamStanding> {
    let mut ranked: Vec<TeamStanding> = standings.into_values().collect();
    ranked.sort_by(|a, b| {
        b.normalized_points
            .total_cmp(&a.normalized_points)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    ranked
}
