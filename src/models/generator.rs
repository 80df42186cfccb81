//! Target colour generation.

use rand::Rng;

use crate::models::color::Rgb;
use crate::models::settings::Difficulty;

/// Uniformly random colour.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Draws a target colour for the given difficulty.
pub fn color_for_difficulty<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Rgb {
    match difficulty {
        Difficulty::Easy => {
            // 0x00, 0x11, ... 0xFF: every channel is a doubled hex digit.
            let mut channel = || rng.random_range(0..16u8) * 17;
            Rgb::new(channel(), channel(), channel())
        }
        Difficulty::Medium | Difficulty::Expert => random_color(rng),
        Difficulty::Hard => {
            let mut channel = || rng.random_range(64..192u8);
            Rgb::new(channel(), channel(), channel())
        }
    }
}
