//! Player settings persisted as `settings.toml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::scoring::DEFAULT_STREAK_THRESHOLD;

/// Which representation the player has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Show a colour, guess its hex code.
    #[default]
    HexGuess,
    /// Show a hex code, pick the colour.
    ColorGuess,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::HexGuess => GameMode::ColorGuess,
            GameMode::ColorGuess => GameMode::HexGuess,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HexGuess => "Guess Hex Code",
            GameMode::ColorGuess => "Guess Color",
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" | "hex_guess" | "hex-guess" => Ok(GameMode::HexGuess),
            "color" | "colour" | "color_guess" | "color-guess" => Ok(GameMode::ColorGuess),
            other => Err(format!("unknown game mode '{}'", other)),
        }
    }
}

/// Controls how target colours are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Channels are multiples of 17 (`#RGB` shorthand colours).
    Easy,
    /// Uniformly random channels.
    #[default]
    Medium,
    /// Mid-range channels only, no very bright or very dark colours.
    Hard,
    /// Currently draws exactly like `Medium`.
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Contents of `settings.toml`. Every field falls back to its default when
/// missing, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    /// Minimum base score that keeps a streak alive.
    pub streak_threshold: u32,
    /// JSON key-value file holding the statistics snapshot.
    pub stats_file: String,
    /// Logs the target colour at the start of every round.
    pub reveal_target: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            mode: GameMode::HexGuess,
            streak_threshold: DEFAULT_STREAK_THRESHOLD,
            stats_file: "data/storage.json".to_string(),
            reveal_target: false,
        }
    }
}

impl Settings {
    /// Loads settings from `path`.
    ///
    /// A missing file is created with the defaults; an unreadable or invalid
    /// one is logged and replaced by defaults in memory only.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save(path) {
                log::warn!("SETTINGS: Could not write defaults to {:?}: {}", path, e);
            }
            return settings;
        }

        match load_toml(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("SETTINGS: Using defaults ({})", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
        }
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())?;
        log::info!("SETTINGS: Saved {}", path.display());
        Ok(())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match toml::from_str(&content) {
        Ok(data) => Ok(data),
        Err(e) => {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
            Err(e.to_string())
        }
    }
}
