//! Input thread: turns lines of text into game actions.

pub mod events;

use crate::input::events::{GameAction, parse_command};
use crate::system::bus::{SystemBus, SystemEvent};
use std::io::BufRead;
use std::thread;

/// Spawns the thread reading commands from `reader` until EOF or `quit`.
pub fn start_thread<R>(bus: SystemBus, reader: R) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started");

            // Blocking loop: read a line, forward it, repeat.
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("INPUT: Failed to read input: {}", e);
                        break;
                    }
                };

                let Some(action) = parse_command(&line) else {
                    continue;
                };
                let quit = action == GameAction::Quit;

                if let Err(e) = bus.action_tx.send(action) {
                    log::error!("INPUT: Failed to send action (Logic loop gone?): {}", e);
                    return;
                }
                if quit {
                    break;
                }
            }

            let _ = bus.sys_tx.send(SystemEvent::Quit);
            log::info!("INPUT: Thread stopped");
        })
        .expect("Failed to spawn Input thread")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_become_actions_then_quit() {
        let bus = SystemBus::new();
        let input = Cursor::new("#FF0000\n\nnext\nbogus\n");

        start_thread(bus.clone(), input).join().unwrap();

        let actions: Vec<GameAction> = bus.action_rx.try_iter().collect();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], GameAction::Guess("#FF0000".into()));
        assert_eq!(actions[1], GameAction::NextRound);
        assert!(matches!(actions[2], GameAction::Invalid(_)));
        assert_eq!(bus.sys_rx.try_recv().ok(), Some(SystemEvent::Quit));
    }
}
