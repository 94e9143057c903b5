/// Read-only view of the world handed to rendering after every tick.

use serde::Serialize;

use crate::entities::Rect;
use crate::state::GameState;

pub const GUIDE_LINES: &[&str] = &[
    "HOW TO PLAY:",
    "1. Use LEFT and RIGHT arrow keys to move the tank.",
    "2. Press 'Z' to shoot at enemies.",
    "3. If an enemy reaches the bottom, you lose a life.",
    "4. You have 3 lives. If you lose all lives, it's game over.",
    "5. Score 100 points to level up, and enemies get faster.",
    "6. Your score resets after each level.",
    "",
    "Press 'Enter' to Start the Game!",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub bounds: Rect,
    pub health: i32,
    pub lives: u32,
}

/// One-shot message with how long it stays up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Banner {
    LevelUp { level: u32, remaining_ticks: u32 },
    LivesLeft { lives: u32, remaining_ticks: u32 },
    /// Shown until the player answers the play-again prompt.
    GameOver,
}

impl Banner {
    pub fn text(&self) -> String {
        match self {
            Banner::LevelUp { level, .. } => format!("Level {level}"),
            Banner::LivesLeft { lives, .. } => format!("{lives} Lives Left"),
            Banner::GameOver => "GAME OVER".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub state: GameState,
    pub player: PlayerView,
    pub projectiles: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub score: u32,
    pub level: u32,
    pub banner: Option<Banner>,
    /// Guide text, present only while the guide is showing.
    pub guide: Option<&'static [&'static str]>,
    pub playfield_width: i32,
    pub playfield_height: i32,
}
