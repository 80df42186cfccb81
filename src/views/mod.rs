//! Plain-text rendering for the terminal front-end.
//!
//! Every function returns a `String` so the logic loop decides where it goes
//! (stdout in the binary, a buffer in tests).

mod feedback;

pub use feedback::render_feedback;

use std::fmt::Write;

use crate::models::color::Rgb;
use crate::models::settings::GameMode;
use crate::models::stats::GameStats;
use crate::picker::ColorPicker;

/// Coloured block using a 24-bit ANSI background.
pub fn swatch(rgb: Rgb, width: usize) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{}\x1b[0m",
        rgb.r,
        rgb.g,
        rgb.b,
        " ".repeat(width)
    )
}

pub fn render_round_start(round: u32, mode: GameMode, target: Rgb) -> String {
    match mode {
        GameMode::HexGuess => format!(
            "\nRound {} - {}\n  {}\n  Type the hex code (e.g. #FF5733):\n",
            round,
            mode.label(),
            swatch(target, 12)
        ),
        GameMode::ColorGuess => format!(
            "\nRound {} - {}\n  Target: {}\n  Use `plane <x> <y>` and `hue <x>`, then `submit`.\n",
            round,
            mode.label(),
            target.to_hex()
        ),
    }
}

/// Current picker colour and handle positions.
pub fn render_picker(picker: &ColorPicker) -> String {
    let hsv = picker.hsv();
    let handles = picker.handles();
    format!(
        "  {} H {:.0} S {:.0} V {:.0}  (selector {:.0}%,{:.0}%  hue {:.0}%)\n",
        swatch(picker.rgb(), 6),
        hsv.h,
        hsv.s,
        hsv.v,
        handles.selector_left,
        handles.selector_top,
        handles.hue_left
    )
}

pub fn render_scoreboard(score: u64, streak: u32, stats: &GameStats) -> String {
    format!(
        "  Score: {}  Streak: {}  High score: {}\n",
        score, streak, stats.high_score
    )
}

pub fn render_stats(stats: &GameStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Games played:    {}", stats.games_played);
    let _ = writeln!(out, "  Average score:   {}", stats.average_score);
    let _ = writeln!(out, "  High score:      {}", stats.high_score);
    let _ = writeln!(out, "  Perfect guesses: {}", stats.perfect_guesses);
    out
}

pub fn render_rules(mode: GameMode) -> String {
    let first = match mode {
        GameMode::HexGuess => [
            "Look at the displayed color",
            "Enter your best guess as a hex code (#RRGGBB)",
        ],
        GameMode::ColorGuess => [
            "Look at the displayed hex code",
            "Use the color picker to match the color",
        ],
    };
    let rules = first
        .into_iter()
        .chain(["Get points based on accuracy (0-100)", "Build streaks for bonus points!"]);

    let mut out = String::new();
    for rule in rules {
        let _ = writeln!(out, "  * {}", rule);
    }
    out
}

pub fn render_help() -> String {
    concat!(
        "Commands:\n",
        "  <hex> | guess <hex>   guess a hex code (hex mode)\n",
        "  plane <x> <y>         click the saturation/value plane (0-100 x 0-100)\n",
        "  hue <x>               click the hue track (0-360)\n",
        "  press/drag <x> <y>    raw pointer down / move, `release` to let go\n",
        "  submit                submit the picker colour (color mode)\n",
        "  next                  next round\n",
        "  mode [hex|color]      switch game mode (resets the session)\n",
        "  difficulty <level>    easy | medium | hard | expert\n",
        "  new                   new game, `yes`/`no` to confirm\n",
        "  stats | reset-stats   show or clear lifetime statistics\n",
        "  quit\n",
    )
    .to_string()
}
