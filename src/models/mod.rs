pub mod color;
pub mod generator;
pub mod settings;
pub mod stats;

pub use color::{Hsv, Rgb};
pub use settings::{Difficulty, GameMode, Settings};
pub use stats::GameStats;
