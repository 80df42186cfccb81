//! Channels between the input thread and the logic loop.

use crate::input::events::GameAction;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// System-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    /// Input closed or the player asked to leave.
    Quit,
}

/// Aggregates the cross-thread communication channels.
#[derive(Clone)]
pub struct SystemBus {
    /// Input -> Logic: parsed player commands.
    pub action_tx: Sender<GameAction>,
    pub action_rx: Receiver<GameAction>,

    /// Anyone -> Logic: system events.
    pub sys_tx: Sender<SystemEvent>,
    pub sys_rx: Receiver<SystemEvent>,
}

impl SystemBus {
    pub fn new() -> Self {
        let (action_tx, action_rx) = unbounded();
        let (sys_tx, sys_rx) = unbounded();

        Self {
            action_tx,
            action_rx,
            sys_tx,
            sys_rx,
        }
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}
