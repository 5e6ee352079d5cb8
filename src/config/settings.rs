use std::collections::HashMap;

use crate::ranking::types::LeagueId;

/// Scoring model knobs, passed explicitly into the ranking engine.
pub struct ScoringSettings {
    /// Flat points awarded per win before weighting.
    pub base_win_points: f64,
    /// Multiplier per series length; unlisted lengths count as 1.0.
    pub series_multipliers: HashMap<u32, f64>,
    /// Prestige multiplier per league id; unlisted leagues count as 1.0.
    pub league_weights: HashMap<LeagueId, f64>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            base_win_points: 100.0,
            series_multipliers: HashMap::from([
                (1, 1.0), // Best-of-1
                (3, 1.2), // Best-of-3
                (5, 1.5), // Best-of-5
            ]),
            // Populate with league ids to favor prestigious leagues,
            // e.g. 4194 (LCK) or 4235 (LPL) at 1.5.
            league_weights: HashMap::new(),
        }
    }
}

impl ScoringSettings {
    pub fn series_multiplier(&self, series_length: u32) -> f64 {
        self.series_multipliers
            .get(&series_length)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn league_weight(&self, league_id: Option<LeagueId>) -> f64 {
        league_id
            .and_then(|id| self.league_weights.get(&id))
            .copied()
            .unwrap_or(1.0)
    }
}

pub struct ApiSettings {
    pub base_url: &'static str,
    pub game: String,
    pub rate_limit_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: &'static str,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.pandascore.co",
            game: "lol".to_string(),
            rate_limit_ms: 1000, // 1 req/sec keeps the free tier happy
            timeout_secs: 30,
            user_agent: "WorldsRanking/1.0",
        }
    }
}

pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub api: ApiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            api: ApiSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_multipliers_default_to_neutral_for_unlisted_lengths() {
        let settings = ScoringSettings::default();
        assert_eq!(settings.series_multiplier(3), 1.2);
        assert_eq!(settings.series_multiplier(5), 1.5);
        assert_eq!(settings.series_multiplier(0), 1.0);
        assert_eq!(settings.series_multiplier(7), 1.0);
    }

    #[test]
    fn league_weight_defaults_to_neutral() {
        let mut settings = ScoringSettings::default();
        settings.league_weights.insert(4194, 1.5);
        assert_eq!(settings.league_weight(Some(4194)), 1.5);
        assert_eq!(settings.league_weight(Some(1)), 1.0);
        assert_eq!(settings.league_weight(None), 1.0);
    }
}
