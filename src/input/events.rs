use crate::models::settings::{Difficulty, GameMode};
use crate::picker::{PickerTarget, PointerPhase};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    /// Hex code typed in hex-guess mode; submitted right away.
    Guess(String),
    /// Press and release on one of the picker areas.
    Click { target: PickerTarget, x: f64, y: f64 },
    /// Raw pointer event for drags.
    Pointer { phase: PointerPhase, x: f64, y: f64 },
    /// Submit the current picker colour.
    Submit,
    NextRound,
    ToggleMode,
    SetMode(GameMode),
    SetDifficulty(Difficulty),
    NewGame,
    /// Answer to the new-game confirmation.
    Confirm(bool),
    ShowStats,
    ResetStats,
    Help,
    Quit,
    /// Line that could not be parsed, with the reason.
    Invalid(String),
}

/// Y coordinate used for hue-track clicks typed as `hue <x>`.
pub const HUE_TRACK_Y: f64 = 115.0;

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<GameAction> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let action = match (command.as_str(), args.as_slice()) {
        ("guess" | "g", [hex]) => GameAction::Guess(hex.to_string()),
        ("plane" | "p", [x, y]) => match coords(x, y) {
            Ok((x, y)) => GameAction::Click {
                target: PickerTarget::Plane,
                x,
                y,
            },
            Err(e) => GameAction::Invalid(e),
        },
        ("hue" | "h", [x]) => match number(x) {
            Ok(x) => GameAction::Click {
                target: PickerTarget::HueTrack,
                x,
                y: HUE_TRACK_Y,
            },
            Err(e) => GameAction::Invalid(e),
        },
        ("press", [x, y]) => pointer(PointerPhase::Down, x, y),
        ("drag", [x, y]) => pointer(PointerPhase::Move, x, y),
        ("release", []) => GameAction::Pointer {
            phase: PointerPhase::Up,
            x: 0.0,
            y: 0.0,
        },
        ("submit" | "s", []) => GameAction::Submit,
        ("next" | "n", []) => GameAction::NextRound,
        ("mode", []) => GameAction::ToggleMode,
        ("mode", [name]) => match name.parse() {
            Ok(mode) => GameAction::SetMode(mode),
            Err(e) => GameAction::Invalid(e),
        },
        ("difficulty" | "d", [name]) => match name.parse() {
            Ok(difficulty) => GameAction::SetDifficulty(difficulty),
            Err(e) => GameAction::Invalid(e),
        },
        ("new", []) => GameAction::NewGame,
        ("yes" | "y", []) => GameAction::Confirm(true),
        ("no", []) => GameAction::Confirm(false),
        ("stats", []) => GameAction::ShowStats,
        ("reset-stats", []) => GameAction::ResetStats,
        ("help" | "?", []) => GameAction::Help,
        ("quit" | "exit" | "q", []) => GameAction::Quit,
        // A bare hex code is a guess.
        (word, []) if word.starts_with('#') || word.chars().all(|c| c.is_ascii_hexdigit()) => {
            GameAction::Guess(line.trim().to_string())
        }
        _ => GameAction::Invalid(format!("unknown command '{}'", line.trim())),
    };
    Some(action)
}

fn pointer(phase: PointerPhase, x: &str, y: &str) -> GameAction {
    match coords(x, y) {
        Ok((x, y)) => GameAction::Pointer { phase, x, y },
        Err(e) => GameAction::Invalid(e),
    }
}

fn coords(x: &str, y: &str) -> Result<(f64, f64), String> {
    Ok((number(x)?, number(y)?))
}

fn number(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("'{}' is not a number", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hex_is_a_guess() {
        assert_eq!(parse_command("#ff5733"), Some(GameAction::Guess("#ff5733".into())));
        assert_eq!(parse_command("  abc123 "), Some(GameAction::Guess("abc123".into())));
        assert_eq!(parse_command("guess 00FF00"), Some(GameAction::Guess("00FF00".into())));
    }

    #[test]
    fn test_picker_commands() {
        assert_eq!(
            parse_command("plane 30 20"),
            Some(GameAction::Click { target: PickerTarget::Plane, x: 30.0, y: 20.0 })
        );
        assert_eq!(
            parse_command("hue 240"),
            Some(GameAction::Click { target: PickerTarget::HueTrack, x: 240.0, y: HUE_TRACK_Y })
        );
        assert_eq!(
            parse_command("drag -5 400"),
            Some(GameAction::Pointer { phase: PointerPhase::Move, x: -5.0, y: 400.0 })
        );
        assert!(matches!(parse_command("plane x 1"), Some(GameAction::Invalid(_))));
        assert!(matches!(parse_command("hue NaN"), Some(GameAction::Invalid(_))));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("NEXT"), Some(GameAction::NextRound));
        assert_eq!(parse_command("mode color"), Some(GameAction::SetMode(GameMode::ColorGuess)));
        assert_eq!(parse_command("d hard"), Some(GameAction::SetDifficulty(Difficulty::Hard)));
        assert_eq!(parse_command("no"), Some(GameAction::Confirm(false)));
        assert!(matches!(parse_command("dance"), Some(GameAction::Invalid(_))));
    }
}
