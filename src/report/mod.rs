use std::collections::{BTreeMap, HashMap};

use crate::ranking::head_to_head::{PairKey, PairRecord};
use crate::ranking::types::{TeamId, TeamStanding};

/// Standings table, one row per team in rank order.
///
/// Plain text on purpose: the same string goes to the console and to saved
/// report files.
pub fn format_standings(standings: &[TeamStanding]) -> String {
    let mut lines = vec![
        "--- Team Rankings (Normalized Points) ---".to_string(),
        format!(
            "{:<5} {:<20} {:<10} {:<10} {:<10} {:<15}",
            "Rank", "Team", "Wins", "Losses", "Games", "Normalized Points"
        ),
        "-".repeat(75),
    ];

    for (rank, team) in standings.iter().enumerate() {
        lines.push(format!(
            "{:<5} {:<20} {:<10} {:<10} {:<10} {:<15.2}",
            rank + 1,
            team.name,
            team.wins,
            team.losses,
            team.total_games,
            team.normalized_points
        ));
    }

    lines.join("\n")
}

/// Per-pair win/loss breakdown, e.g. `T1 vs. Gen.G: 2-1`.
/// Pairs without a single decisive match are filtered here, not upstream.
pub fn format_head_to_head(
    records: &BTreeMap<PairKey, PairRecord>,
    names: &HashMap<TeamId, String>,
) -> String {
    let mut output = vec!["\n--- Head-to-Head Breakdown ---".to_string()];

    for (&(team1_id, team2_id), record) in records {
        if record.decisive_total() == 0 {
            continue;
        }

        output.push(format!(
            "\n{} vs. {}: {}-{}",
            display_name(names, team1_id),
            display_name(names, team2_id),
            record.wins_for(team1_id),
            record.wins_for(team2_id)
        ));
    }

    output.join("\n")
}

fn display_name(names: &HashMap<TeamId, String>, team_id: TeamId) -> &str {
    names.get(&team_id).map_or("Unknown", String::as_str)
}
