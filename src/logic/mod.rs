//! Logic loop: owns the controller and the picker and reacts to actions.
//!
//! Everything the loop touches lives on one thread; the input thread only
//! talks to it through the [`SystemBus`].

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use crossbeam_channel::select;

use crate::input::events::{GameAction, HUE_TRACK_Y};
use crate::models::color::Rgb;
use crate::models::settings::GameMode;
use crate::picker::{
    ColorPicker, MountedPicker, Point, PointerEvent, PointerHub, PointerPhase, Region,
};
use crate::state::{GameController, NewGameRequest};
use crate::storage::KeyValueStore;
use crate::system::bus::{SystemBus, SystemEvent};
use crate::views;

/// Saturation/value plane in terminal coordinates: `plane 0 0` is white,
/// `plane 100 100` black.
pub const PLANE_REGION: Region = Region {
    left: 0.0,
    top: 0.0,
    width: 100.0,
    height: 100.0,
};

/// Hue track: `hue 0` .. `hue 360`.
pub const HUE_REGION: Region = Region {
    left: 0.0,
    top: HUE_TRACK_Y - 5.0,
    width: 360.0,
    height: 10.0,
};

pub struct GameLoop<S: KeyValueStore, W: Write> {
    controller: GameController<S>,
    hub: PointerHub,
    picker: MountedPicker,
    /// Set by the picker callback, consumed after each pointer dispatch.
    picker_changed: Rc<Cell<bool>>,
    last_pick: Rc<RefCell<Option<(String, Rgb)>>>,
    out: W,
}

impl<S: KeyValueStore, W: Write> GameLoop<S, W> {
    pub fn new(controller: GameController<S>, out: W) -> Self {
        let hub = PointerHub::new();
        let picker_changed = Rc::new(Cell::new(false));
        let last_pick = Rc::new(RefCell::new(None));

        let mut picker = ColorPicker::new(PLANE_REGION, HUE_REGION);
        {
            let changed = picker_changed.clone();
            let last = last_pick.clone();
            picker.set_on_color_change(move |hex, rgb| {
                changed.set(true);
                *last.borrow_mut() = Some((hex.to_string(), rgb));
            });
        }
        let picker = MountedPicker::mount(picker, &hub);

        Self {
            controller,
            hub,
            picker,
            picker_changed,
            last_pick,
            out,
        }
    }

    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    pub fn picker(&self) -> &MountedPicker {
        &self.picker
    }

    /// Last `(hex, rgb)` the picker reported.
    pub fn last_pick(&self) -> Option<(String, Rgb)> {
        self.last_pick.borrow().clone()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prints the rules and the first round.
    pub fn start(&mut self) {
        let mode = self.controller.mode();
        self.print(&format!("Colour guesser: {}\n", mode.label()));
        self.print(&views::render_rules(mode));
        self.print("Type `help` for commands.\n");
        self.announce_round();
    }

    /// Blocks on the bus until a quit action or event arrives.
    pub fn run(&mut self, bus: &SystemBus) {
        log::info!("LOGIC: Loop started");
        self.start();

        loop {
            select! {
                recv(bus.action_rx) -> action => {
                    match action {
                        Ok(action) => {
                            if !self.handle_action(action) {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                recv(bus.sys_rx) -> event => {
                    match event {
                        Ok(SystemEvent::Quit) | Err(_) => {
                            // Drain what the input thread sent before closing.
                            while let Ok(action) = bus.action_rx.try_recv() {
                                if !self.handle_action(action) {
                                    break;
                                }
                            }
                            break;
                        }
                    }
                }
            }
        }

        log::info!("LOGIC: Quit received...");
    }

    /// Applies one action. Returns `false` when the game should stop.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        if self.controller.is_confirming_new_game() {
            return self.handle_confirmation(action);
        }

        match action {
            GameAction::Guess(text) => self.guess_hex(&text),
            GameAction::Click { target, x, y } => {
                let p = Point::new(x, y);
                self.dispatch_pointer(PointerEvent::mouse(PointerPhase::Down, p).on(target));
                self.dispatch_pointer(PointerEvent::mouse(PointerPhase::Up, p));
            }
            GameAction::Pointer { phase, x, y } => {
                self.dispatch_pointer(PointerEvent::mouse(phase, Point::new(x, y)));
            }
            GameAction::Submit => self.submit_picker(),
            GameAction::NextRound => {
                if self.controller.is_active() {
                    self.print("  Finish this round first (or start a `new` game).\n");
                } else {
                    self.controller.start_new_round();
                    self.announce_round();
                }
            }
            GameAction::ToggleMode => {
                self.controller.switch_mode();
                self.mode_changed();
            }
            GameAction::SetMode(mode) => {
                self.controller.set_mode(mode);
                self.mode_changed();
            }
            GameAction::SetDifficulty(difficulty) => {
                self.controller.set_difficulty(difficulty);
                self.print(&format!("  Difficulty set to {} (from the next round).\n", difficulty));
            }
            GameAction::NewGame => match self.controller.request_new_game() {
                NewGameRequest::Started => self.announce_round(),
                NewGameRequest::NeedsConfirmation => {
                    self.print("  Start a new game? Score and streak will be lost. (yes/no)\n");
                }
            },
            GameAction::Confirm(_) => self.print("  Nothing to confirm.\n"),
            GameAction::ShowStats => {
                let text = views::render_stats(self.controller.stats());
                self.print(&text);
            }
            GameAction::ResetStats => {
                self.controller.reset_stats();
                self.print("  Statistics reset.\n");
                self.print_scoreboard();
            }
            GameAction::Help => self.print(&views::render_help()),
            GameAction::Quit => return false,
            GameAction::Invalid(reason) => self.print(&format!("  {}\n", reason)),
        }
        true
    }

    fn handle_confirmation(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Confirm(true) => {
                self.controller.confirm_new_game();
                self.announce_round();
            }
            GameAction::Confirm(false) => {
                self.controller.cancel_new_game();
                self.print("  Carrying on.\n");
            }
            GameAction::Quit => return false,
            _ => self.print("  Please answer `yes` or `no`.\n"),
        }
        true
    }

    fn guess_hex(&mut self, text: &str) {
        if self.controller.mode() != GameMode::HexGuess {
            self.print("  Color mode: use the picker and `submit`.\n");
            return;
        }
        let preview = self.controller.update_guess_preview(text);
        if !preview.is_valid() {
            self.print("  Please enter a valid hex color code (e.g., #FF5733)\n");
            return;
        }
        self.submit(&preview.formatted);
    }

    fn submit_picker(&mut self) {
        if self.controller.mode() != GameMode::ColorGuess {
            self.print("  Hex mode: type a hex code to guess.\n");
            return;
        }
        if !self.controller.can_submit() && self.controller.is_active() {
            self.print("  Pick a color first.\n");
            return;
        }
        let hex = self.picker.current_color();
        self.submit(&hex);
    }

    fn submit(&mut self, hex: &str) {
        match self.controller.submit_guess(hex) {
            Ok(result) => {
                self.print(&views::render_feedback(&result));
                self.print_scoreboard();
                self.print("  Type `next` for the next color.\n");
            }
            Err(e) => self.print(&format!("  {}\n", e)),
        }
    }

    fn dispatch_pointer(&mut self, event: PointerEvent) {
        if self.controller.mode() != GameMode::ColorGuess {
            self.print("  The picker is only used in color mode (`mode color`).\n");
            return;
        }
        self.hub.dispatch(&event);

        if self.picker_changed.replace(false) {
            self.controller.picker_changed();
            let text = self.picker.with(views::render_picker);
            self.print(&text);
        }
    }

    fn mode_changed(&mut self) {
        let mode = self.controller.mode();
        self.picker.reset();
        self.picker_changed.set(false);
        self.print(&format!("  Mode: {}\n", mode.label()));
        self.print(&views::render_rules(mode));
        self.announce_round();
    }

    fn announce_round(&mut self) {
        let text = views::render_round_start(
            self.controller.round(),
            self.controller.mode(),
            self.controller.target(),
        );
        self.print(&text);
        if self.controller.mode() == GameMode::ColorGuess {
            self.picker.reset();
            self.picker_changed.set(false);
            let text = self.picker.with(views::render_picker);
            self.print(&text);
        }
    }

    fn print_scoreboard(&mut self) {
        let text = views::render_scoreboard(
            self.controller.current_score(),
            self.controller.streak(),
            self.controller.stats(),
        );
        self.print(&text);
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::error!("LOGIC: Failed to write output: {}", e);
        }
    }
}
