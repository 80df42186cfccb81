//! Game controller.
//!
//! Owns the round lifecycle: the target colour, the running score and
//! streak, the game mode, and the persisted statistics. The host (terminal
//! front-end, tests) drives it and renders whatever it returns.

mod round;

pub use round::{GuessError, GuessPreview, NewGameRequest, RoundResult};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::color::{Rgb, format_hex_input, hex_to_rgb};
use crate::models::generator::color_for_difficulty;
use crate::models::settings::{Difficulty, GameMode, Settings};
use crate::models::stats::GameStats;
use crate::scoring::{
    analyze_channels, calculate_bonus, calculate_score, feedback_tier, update_streak,
};
use crate::storage::{KeyValueStore, load_stats, save_stats};

pub struct GameController<S: KeyValueStore> {
    store: S,
    stats: GameStats,
    rng: StdRng,

    mode: GameMode,
    difficulty: Difficulty,
    streak_threshold: u32,
    reveal_target: bool,

    target: Rgb,
    round: u32,
    current_score: u64,
    streak: u32,
    is_active: bool,
    can_submit: bool,
    confirming_new_game: bool,
}

impl<S: KeyValueStore> GameController<S> {
    /// Loads the statistics from `store` and starts the first round.
    pub fn new(store: S, settings: &Settings) -> Self {
        Self::with_rng(store, settings, StdRng::from_os_rng())
    }

    /// Same as [`GameController::new`] with a caller-provided generator.
    pub fn with_rng(store: S, settings: &Settings, rng: StdRng) -> Self {
        let stats = load_stats(&store);
        log::info!(
            "GAME: Loaded stats ({} games, high score {})",
            stats.games_played,
            stats.high_score
        );

        let mut controller = Self {
            store,
            stats,
            rng,
            mode: settings.mode,
            difficulty: settings.difficulty,
            streak_threshold: settings.streak_threshold,
            reveal_target: settings.reveal_target,
            target: Rgb::BLACK,
            round: 0,
            current_score: 0,
            streak: 0,
            is_active: false,
            can_submit: false,
            confirming_new_game: false,
        };
        controller.start_new_round();
        controller
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    pub fn target_hex(&self) -> String {
        self.target.to_hex()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn current_score(&self) -> u64 {
        self.current_score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn can_submit(&self) -> bool {
        self.is_active && self.can_submit
    }

    pub fn is_confirming_new_game(&self) -> bool {
        self.confirming_new_game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Draws a new target and reopens submissions.
    pub fn start_new_round(&mut self) {
        self.target = color_for_difficulty(self.difficulty, &mut self.rng);
        self.round += 1;
        self.is_active = true;
        self.can_submit = true;

        if self.reveal_target {
            log::info!("GAME: Target color: {} Mode: {:?}", self.target, self.mode);
        } else {
            log::debug!("GAME: Round {} started ({:?})", self.round, self.mode);
        }
    }

    /// Formats raw text from the hex field and reports whether it can be submitted.
    pub fn update_guess_preview(&mut self, input: &str) -> GuessPreview {
        let formatted = format_hex_input(input);
        let color = hex_to_rgb(&formatted);
        self.can_submit = color.is_some();
        GuessPreview { formatted, color }
    }

    /// Any colour the picker produces is a valid guess.
    pub fn picker_changed(&mut self) {
        self.can_submit = true;
    }

    /// Scores a guess against the current target.
    ///
    /// Rejected guesses leave the round open.
    pub fn submit_guess(&mut self, hex: &str) -> Result<RoundResult, GuessError> {
        if !self.is_active {
            return Err(GuessError::RoundInactive);
        }
        let trimmed = hex.trim();
        let guess =
            hex_to_rgb(trimmed).ok_or_else(|| GuessError::InvalidHex(trimmed.to_string()))?;

        self.is_active = false;
        Ok(self.process_guess(guess))
    }

    fn process_guess(&mut self, guess: Rgb) -> RoundResult {
        let base_score = calculate_score(self.target, guess);
        let is_perfect = base_score == 100;
        // Bonus uses the streak going into this round.
        let breakdown = calculate_bonus(base_score, self.streak, is_perfect);

        self.streak = update_streak(base_score, self.streak, self.streak_threshold);
        self.current_score += breakdown.total_score as u64;

        self.stats
            .record_round(breakdown.total_score, is_perfect, self.current_score);
        save_stats(&mut self.store, &self.stats);

        log::info!(
            "GAME: Round {} scored {} (base {}, streak {})",
            self.round,
            breakdown.total_score,
            base_score,
            self.streak
        );

        RoundResult {
            target: self.target,
            guess,
            breakdown,
            feedback: feedback_tier(base_score),
            analysis: analyze_channels(self.target, guess),
            streak: self.streak,
            session_score: self.current_score,
        }
    }

    /// Flips between hex and colour guessing; the session starts over.
    pub fn switch_mode(&mut self) -> GameMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        log::info!("GAME: Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.reset_game();
    }

    /// Asks for a new game, which only needs confirming when something would be lost.
    pub fn request_new_game(&mut self) -> NewGameRequest {
        if self.current_score > 0 || self.streak > 0 {
            self.confirming_new_game = true;
            NewGameRequest::NeedsConfirmation
        } else {
            self.reset_game();
            NewGameRequest::Started
        }
    }

    pub fn confirm_new_game(&mut self) {
        self.confirming_new_game = false;
        self.reset_game();
    }

    pub fn cancel_new_game(&mut self) {
        self.confirming_new_game = false;
    }

    /// Clears score and streak and starts a fresh round. Lifetime stats stay.
    pub fn reset_game(&mut self) {
        self.current_score = 0;
        self.streak = 0;
        self.confirming_new_game = false;
        self.start_new_round();
    }

    /// Zeroes the lifetime statistics and persists that.
    pub fn reset_stats(&mut self) {
        self.stats = GameStats::default();
        save_stats(&mut self.store, &self.stats);
        log::info!("GAME: Statistics reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AccuracyTier;
    use crate::storage::{MemoryStore, STATS_KEY};

    fn controller() -> GameController<MemoryStore> {
        GameController::with_rng(
            MemoryStore::new(),
            &Settings::default(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_first_round_is_active() {
        let game = controller();
        assert_eq!(game.round(), 1);
        assert!(game.is_active());
        assert!(game.can_submit());
        assert_eq!(game.current_score(), 0);
    }

    #[test]
    fn test_perfect_guess() {
        let mut game = controller();
        let hex = game.target_hex().to_lowercase();

        let result = game.submit_guess(&hex).unwrap();
        assert!(result.is_perfect());
        assert_eq!(result.breakdown.base_score, 100);
        assert_eq!(result.breakdown.perfect_bonus, 50);
        assert_eq!(result.breakdown.total_score, 150);
        assert_eq!(result.feedback.tier, AccuracyTier::Perfect);
        assert_eq!(result.streak, 1);
        assert_eq!(game.current_score(), 150);

        let stats = game.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.perfect_guesses, 1);
        assert_eq!(stats.high_score, 150);
        assert!(!game.is_active());
    }

    #[test]
    fn test_invalid_hex_keeps_round_open() {
        let mut game = controller();
        assert_eq!(
            game.submit_guess("#GG5733"),
            Err(GuessError::InvalidHex("#GG5733".to_string()))
        );
        assert!(game.is_active());
        assert_eq!(game.stats().games_played, 0);
    }

    #[test]
    fn test_cannot_submit_twice() {
        let mut game = controller();
        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();
        assert_eq!(game.submit_guess(&hex), Err(GuessError::RoundInactive));

        game.start_new_round();
        assert_eq!(game.round(), 2);
        assert!(game.submit_guess(&game.target_hex()).is_ok());
    }

    #[test]
    fn test_streak_bonus_applies_from_third_round() {
        let mut game = controller();
        let mut totals = Vec::new();
        for _ in 0..3 {
            let hex = game.target_hex();
            totals.push(game.submit_guess(&hex).unwrap().breakdown.total_score);
            game.start_new_round();
        }
        // streak going in: 0, 1, 2
        assert_eq!(totals, vec![150, 150, 160]);
        assert_eq!(game.streak(), 3);
    }

    #[test]
    fn test_bad_guess_resets_streak() {
        let mut game = controller();
        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();
        game.start_new_round();

        // farthest corner of the cube: every channel is off by at least 128
        let far = |c: u8| if c >= 128 { 0 } else { 255 };
        let target = game.target();
        let guess = Rgb::new(far(target.r), far(target.g), far(target.b));
        let result = game.submit_guess(&guess.to_hex()).unwrap();
        assert!(result.breakdown.base_score < 70);
        assert_eq!(result.streak, 0);
    }

    #[test]
    fn test_stats_are_persisted_after_each_round() {
        let mut game = controller();
        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();

        let raw = game.store().get(STATS_KEY).unwrap().unwrap();
        let saved: GameStats = serde_json::from_str(&raw).unwrap();
        assert_eq!(&saved, game.stats());
    }

    #[test]
    fn test_stats_loaded_at_startup() {
        let mut store = MemoryStore::new();
        store
            .set(STATS_KEY, r#"{"gamesPlayed":9,"highScore":400}"#)
            .unwrap();
        let game = GameController::with_rng(store, &Settings::default(), StdRng::seed_from_u64(3));
        assert_eq!(game.stats().games_played, 9);
        assert_eq!(game.stats().high_score, 400);
        assert_eq!(game.stats().total_score, 0);
    }

    #[test]
    fn test_new_game_confirmation() {
        let mut game = controller();
        assert_eq!(game.request_new_game(), NewGameRequest::Started);
        assert_eq!(game.round(), 2);

        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();
        assert_eq!(game.request_new_game(), NewGameRequest::NeedsConfirmation);
        assert!(game.is_confirming_new_game());

        game.cancel_new_game();
        assert_eq!(game.current_score(), 150);

        game.request_new_game();
        game.confirm_new_game();
        assert_eq!(game.current_score(), 0);
        assert_eq!(game.streak(), 0);
        assert!(game.is_active());
        assert_eq!(game.stats().games_played, 1);
    }

    #[test]
    fn test_switch_mode_resets_session() {
        let mut game = controller();
        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();

        assert_eq!(game.switch_mode(), GameMode::ColorGuess);
        assert_eq!(game.current_score(), 0);
        assert_eq!(game.streak(), 0);
        assert!(game.is_active());
    }

    #[test]
    fn test_guess_preview_gates_submit() {
        let mut game = controller();
        let preview = game.update_guess_preview("ff57");
        assert_eq!(preview.formatted, "#FF57");
        assert!(!preview.is_valid());
        assert!(!game.can_submit());

        let preview = game.update_guess_preview("#ff5733zz");
        assert_eq!(preview.formatted, "#FF5733");
        assert_eq!(preview.color, Some(Rgb::new(255, 87, 51)));
        assert!(game.can_submit());
    }

    #[test]
    fn test_reset_stats() {
        let mut game = controller();
        let hex = game.target_hex();
        game.submit_guess(&hex).unwrap();
        game.reset_stats();
        assert_eq!(game.stats(), &GameStats::default());
        assert_eq!(load_stats(game.store()), GameStats::default());
    }
}
