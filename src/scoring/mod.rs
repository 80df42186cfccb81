//! Scoring engine.
//!
//! Turns the distance between the target and the guess into a 0-100 score,
//! adds perfect and streak bonuses, and classifies the result.

mod channels;
mod feedback;

pub use channels::{Channel, ChannelAccuracy, ChannelAnalysis, analyze_channels};
pub use feedback::{AccuracyTier, FEEDBACK_TIERS, Feedback, feedback_tier};

use crate::models::color::{MAX_DISTANCE, Rgb, color_distance};

/// Score that keeps a streak going unless configured otherwise.
pub const DEFAULT_STREAK_THRESHOLD: u32 = 70;
/// Bonus for an exact match.
pub const PERFECT_BONUS: u32 = 50;
/// Streak bonus per consecutive round.
pub const STREAK_BONUS_STEP: u32 = 5;
/// Cap on the streak bonus.
pub const MAX_STREAK_BONUS: u32 = 50;

/// Points awarded for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub base_score: u32,
    pub perfect_bonus: u32,
    pub streak_bonus: u32,
    /// `perfect_bonus + streak_bonus`.
    pub bonus_points: u32,
    /// `base_score + bonus_points`.
    pub total_score: u32,
}

/// Accuracy score in `[0, 100]`.
///
/// 100 only for identical colours, 0 once the distance reaches the full
/// diagonal of the RGB cube.
pub fn calculate_score(target: Rgb, guess: Rgb) -> u32 {
    let distance = color_distance(target, guess);
    let accuracy = (100.0 - (distance / MAX_DISTANCE) * 100.0).max(0.0);
    accuracy.round() as u32
}

/// Applies the perfect and streak bonuses on top of a base score.
///
/// The streak bonus only kicks in from a streak of two onwards.
pub fn calculate_bonus(base_score: u32, streak: u32, is_perfect: bool) -> ScoreBreakdown {
    let perfect_bonus = if is_perfect || base_score == 100 {
        PERFECT_BONUS
    } else {
        0
    };

    let streak_bonus = if streak > 1 {
        streak.saturating_mul(STREAK_BONUS_STEP).min(MAX_STREAK_BONUS)
    } else {
        0
    };

    let bonus_points = perfect_bonus + streak_bonus;

    ScoreBreakdown {
        base_score,
        perfect_bonus,
        streak_bonus,
        bonus_points,
        total_score: base_score + bonus_points,
    }
}

/// Next streak value: grows while the score stays at or above `threshold`,
/// otherwise resets to zero.
pub fn update_streak(score: u32, current_streak: u32, threshold: u32) -> u32 {
    if score >= threshold {
        current_streak + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colours_score_100() {
        for c in [Rgb::BLACK, Rgb::WHITE, Rgb::new(12, 200, 99)] {
            assert_eq!(calculate_score(c, c), 100);
        }
    }

    #[test]
    fn test_opposite_corners_score_0() {
        assert_eq!(calculate_score(Rgb::BLACK, Rgb::WHITE), 0);
        assert_eq!(feedback_tier(0).tier, AccuracyTier::VeryPoor);
    }

    #[test]
    fn test_score_is_non_increasing_with_distance() {
        let target = Rgb::new(10, 20, 30);
        let mut last = 100;
        for step in 0..=225u8 {
            let guess = Rgb::new(10 + step, 20 + step, 30 + step);
            let score = calculate_score(target, guess);
            assert!(score <= last, "step {step}: {score} > {last}");
            last = score;
        }
    }

    #[test]
    fn test_near_miss_rounds_up() {
        // 99.77 rounds up
        assert_eq!(calculate_score(Rgb::new(0, 0, 0), Rgb::new(1, 0, 0)), 100);
        assert_eq!(calculate_score(Rgb::new(0, 0, 0), Rgb::new(10, 0, 0)), 98);
    }

    #[test]
    fn test_perfect_bonus() {
        let b = calculate_bonus(100, 0, true);
        assert_eq!(b.perfect_bonus, 50);
        assert_eq!(b.streak_bonus, 0);
        assert_eq!(b.total_score, 150);

        assert_eq!(calculate_bonus(100, 0, false).perfect_bonus, 50);
        assert_eq!(calculate_bonus(99, 0, false).perfect_bonus, 0);
    }

    #[test]
    fn test_streak_bonus() {
        assert_eq!(calculate_bonus(50, 1, false).streak_bonus, 0);
        assert_eq!(calculate_bonus(50, 3, false).streak_bonus, 15);
        let capped = calculate_bonus(50, 20, false);
        assert_eq!(capped.streak_bonus, 50);
        assert_eq!(capped.bonus_points, 50);
        assert_eq!(capped.total_score, 100);
    }

    #[test]
    fn test_update_streak() {
        assert_eq!(update_streak(70, 5, DEFAULT_STREAK_THRESHOLD), 6);
        assert_eq!(update_streak(69, 5, DEFAULT_STREAK_THRESHOLD), 0);
        assert_eq!(update_streak(50, 0, 40), 1);
    }

    #[test]
    fn test_red_on_red_is_perfect() {
        let red = Rgb::new(255, 0, 0);
        let score = calculate_score(red, red);
        assert_eq!(score, 100);
        assert_eq!(feedback_tier(score).tier.class(), "perfect");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb() -> impl Strategy<Value = Rgb> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn test_closer_guess_never_scores_lower(target in rgb(), a in rgb(), b in rgb()) {
                let (near, far) = if color_distance(target, a) <= color_distance(target, b) {
                    (a, b)
                } else {
                    (b, a)
                };
                let near_score = calculate_score(target, near);
                let far_score = calculate_score(target, far);
                prop_assert!(near_score >= far_score, "{} < {}", near_score, far_score);
                prop_assert!(near_score <= 100);
            }

            #[test]
            fn test_zero_distance_only_for_identical_colours(target in rgb(), guess in rgb()) {
                prop_assert_eq!(calculate_score(target, target), 100);
                prop_assert_eq!(color_distance(target, guess) == 0.0, target == guess);
            }
        }
    }
}
