//! Per-round value types handed back to the host.

use std::fmt;

use crate::models::color::Rgb;
use crate::scoring::{ChannelAnalysis, Feedback, ScoreBreakdown};

/// Everything the feedback screen needs after a guess.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub target: Rgb,
    pub guess: Rgb,
    pub breakdown: ScoreBreakdown,
    pub feedback: &'static Feedback,
    pub analysis: ChannelAnalysis,
    /// Streak after this round.
    pub streak: u32,
    /// Session score after this round.
    pub session_score: u64,
}

impl RoundResult {
    pub fn is_perfect(&self) -> bool {
        self.breakdown.base_score == 100
    }
}

/// Live state of the hex text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessPreview {
    /// What the field should now display.
    pub formatted: String,
    /// Parsed colour once the input is a complete hex code.
    pub color: Option<Rgb>,
}

impl GuessPreview {
    pub fn is_valid(&self) -> bool {
        self.color.is_some()
    }
}

/// Outcome of asking for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGameRequest {
    /// Nothing to lose, the game was reset immediately.
    Started,
    /// Score or streak would be lost; call `confirm_new_game` or `cancel_new_game`.
    NeedsConfirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not a `#RRGGBB` code.
    InvalidHex(String),
    /// The current round was already scored.
    RoundInactive,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::InvalidHex(input) => write!(
                f,
                "'{}' is not a valid hex color code (e.g., #FF5733)",
                input
            ),
            GuessError::RoundInactive => f.write_str("this round is over, start the next one"),
        }
    }
}

impl std::error::Error for GuessError {}
