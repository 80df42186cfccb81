//! Round result screen.

use std::fmt::Write;

use super::swatch;
use crate::state::RoundResult;

pub fn render_feedback(result: &RoundResult) -> String {
    let b = &result.breakdown;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\n  Actual:  {} {}",
        swatch(result.target, 6),
        result.target.to_hex()
    );
    let _ = writeln!(
        out,
        "  Guessed: {} {}",
        swatch(result.guess, 6),
        result.guess.to_hex()
    );

    let _ = writeln!(out, "\n  {} points", b.total_score);
    let _ = writeln!(out, "    Base Score: {}", b.base_score);
    if b.perfect_bonus > 0 {
        let _ = writeln!(out, "    Perfect Bonus: +{}", b.perfect_bonus);
    }
    if b.streak_bonus > 0 {
        let _ = writeln!(out, "    Streak Bonus: +{}", b.streak_bonus);
    }

    let _ = writeln!(out, "\n  {}", result.feedback.message);
    for hint in &result.analysis.hints {
        let _ = writeln!(out, "  💡 {}", hint);
    }
    out
}
