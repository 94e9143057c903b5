/// Abstract command stream and its terminal key mapping.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Steer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Shoot,
    Confirm,
    RestartYes,
    RestartNo,
    Quit,
}

/// The set of commands issued during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub shoot: bool,
    pub confirm: bool,
    pub restart_yes: bool,
    pub restart_no: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn insert(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left = true,
            Command::MoveRight => self.move_right = true,
            Command::Shoot => self.shoot = true,
            Command::Confirm => self.confirm = true,
            Command::RestartYes => self.restart_yes = true,
            Command::RestartNo => self.restart_no = true,
            Command::Quit => self.quit = true,
        }
    }

    /// Right is checked after Left and wins when both are held.
    pub fn steer(&self) -> Steer {
        if self.move_right {
            Steer::Right
        } else if self.move_left {
            Steer::Left
        } else {
            Steer::Idle
        }
    }
}

impl FromIterator<Command> for TickInput {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut input = TickInput::default();
        for command in iter {
            input.insert(command);
        }
        input
    }
}

// ── Terminal key mapping ──────────────────────────────────────────────────────

/// A movement key is considered "held" if its last press/repeat arrived
/// within this many ticks.  Terminals without release events only repeat at
/// the OS rate (≥ 15 Hz), so 8 ticks at 60 Hz (≈133 ms) is always refreshed
/// before it expires.
pub const HOLD_WINDOW: u64 = 8;

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char(' ') => Some(Command::Shoot),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::RestartYes),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::RestartNo),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Turns raw key events into one [`TickInput`] per tick.
///
/// Movement is level-triggered (held keys keep steering); every other
/// command is edge-triggered on the initial press, so holding Shoot fires a
/// single projectile.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashMap<Command, u64>,
    pressed: TickInput,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: KeyEvent, tick: u64) {
        let Some(command) = command_for(event.code, event.modifiers) else {
            return;
        };
        let is_movement = matches!(command, Command::MoveLeft | Command::MoveRight);
        match event.kind {
            KeyEventKind::Press => {
                if is_movement {
                    self.held.insert(command, tick);
                } else {
                    self.pressed.insert(command);
                }
            }
            KeyEventKind::Repeat => {
                if is_movement {
                    self.held.insert(command, tick);
                }
            }
            KeyEventKind::Release => {
                self.held.remove(&command);
            }
        }
    }

    /// Commands for `tick`.  Edge-triggered presses are consumed.
    pub fn take(&mut self, tick: u64) -> TickInput {
        let mut input = std::mem::take(&mut self.pressed);
        self.held
            .retain(|_, &mut last| tick.saturating_sub(last) <= HOLD_WINDOW);
        for &command in self.held.keys() {
            input.insert(command);
        }
        input
    }
}
