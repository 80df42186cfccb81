//! Accuracy tiers shown after each round.

/// Feedback classes from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccuracyTier {
    Perfect,
    Excellent,
    Great,
    Good,
    Okay,
    Poor,
    VeryPoor,
}

impl AccuracyTier {
    /// Stable class name, usable as a style key.
    pub fn class(self) -> &'static str {
        match self {
            AccuracyTier::Perfect => "perfect",
            AccuracyTier::Excellent => "excellent",
            AccuracyTier::Great => "great",
            AccuracyTier::Good => "good",
            AccuracyTier::Okay => "okay",
            AccuracyTier::Poor => "poor",
            AccuracyTier::VeryPoor => "very-poor",
        }
    }
}

/// One row of the feedback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// Lowest score that lands in this tier.
    pub min_score: u32,
    pub tier: AccuracyTier,
    pub message: &'static str,
    pub emoji: &'static str,
}

/// Ordered by descending `min_score`; the last row catches everything.
pub static FEEDBACK_TIERS: [Feedback; 7] = [
    Feedback {
        min_score: 100,
        tier: AccuracyTier::Perfect,
        message: "🎯 Perfect! Incredible color vision!",
        emoji: "🎯",
    },
    Feedback {
        min_score: 95,
        tier: AccuracyTier::Excellent,
        message: "🔥 Excellent! Almost perfect!",
        emoji: "🔥",
    },
    Feedback {
        min_score: 85,
        tier: AccuracyTier::Great,
        message: "⭐ Great job! Very close!",
        emoji: "⭐",
    },
    Feedback {
        min_score: 70,
        tier: AccuracyTier::Good,
        message: "👍 Good guess! Getting warmer!",
        emoji: "👍",
    },
    Feedback {
        min_score: 50,
        tier: AccuracyTier::Okay,
        message: "🤔 Not bad, but you can do better!",
        emoji: "🤔",
    },
    Feedback {
        min_score: 25,
        tier: AccuracyTier::Poor,
        message: "😅 Keep trying! Practice makes perfect!",
        emoji: "😅",
    },
    Feedback {
        min_score: 0,
        tier: AccuracyTier::VeryPoor,
        message: "🎨 Way off! Study those colors more!",
        emoji: "🎨",
    },
];

/// First tier whose threshold the score reaches.
pub fn feedback_tier(score: u32) -> &'static Feedback {
    FEEDBACK_TIERS
        .iter()
        .find(|row| score >= row.min_score)
        .unwrap_or(&FEEDBACK_TIERS[FEEDBACK_TIERS.len() - 1])
}
