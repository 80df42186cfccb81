//! Lifetime game statistics.
//!
//! Stored as a flat JSON object with camelCase keys. Missing keys take their
//! zero default so older or partial snapshots still load.

use serde::{Deserialize, Serialize};

/// Accumulated statistics across every round ever played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    /// Completed rounds.
    pub games_played: u32,
    /// Sum of every round total (bonuses included).
    pub total_score: u64,
    /// `total_score / games_played`, rounded.
    pub average_score: u64,
    /// Best running session score seen so far.
    pub high_score: u64,
    /// Rounds with a base score of 100.
    pub perfect_guesses: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one finished round into the counters.
    ///
    /// `session_score` is the player's running score after the round and
    /// feeds the high score.
    pub fn record_round(&mut self, round_total: u32, is_perfect: bool, session_score: u64) {
        self.games_played += 1;
        self.total_score += round_total as u64;
        self.average_score =
            (self.total_score as f64 / self.games_played as f64).round() as u64;

        if is_perfect {
            self.perfect_guesses += 1;
        }

        self.high_score = self.high_score.max(session_score);
    }
}
