/// Run-level state machine.
///
/// ```text
/// ShowingGuide --confirm--> Playing
/// Playing --level up--> LevelUpPause --banner timer--> Playing
/// Playing | LevelUpPause --life lost, lives left--> LifeLostPause --pause timer--> Playing
/// Playing | LevelUpPause --life lost, no lives--> GameOver
/// GameOver --restart--> Playing        GameOver --decline--> exit
/// ```
///
/// Timed states carry their own countdown and are advanced once per tick, so
/// nothing ever blocks and quit stays responsive.

use serde::Serialize;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameState {
    ShowingGuide,
    Playing,
    LifeLostPause { remaining_ticks: u32 },
    LevelUpPause { remaining_ticks: u32 },
    GameOver,
}

impl GameState {
    /// Whether entities move and spawn in this state.
    pub fn is_simulating(&self) -> bool {
        matches!(self, GameState::Playing | GameState::LevelUpPause { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    state: GameState,
    exit_requested: bool,
    life_lost_pause_ticks: u32,
    level_up_banner_ticks: u32,
}

impl StateMachine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::ShowingGuide,
            exit_requested: false,
            life_lost_pause_ticks: config.life_lost_pause_ticks(),
            level_up_banner_ticks: config.level_up_banner_ticks,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_exiting(&self) -> bool {
        self.exit_requested
    }

    /// Ask the loop to stop.  Safe to call any number of times; returns
    /// `true` only for the call that actually raised the request.
    pub fn request_exit(&mut self) -> bool {
        if self.exit_requested {
            return false;
        }
        log::info!("exit requested in {:?}", self.state);
        self.exit_requested = true;
        true
    }

    /// Leave the guide screen.  Ignored in every other state.
    pub fn confirm(&mut self) {
        if self.state == GameState::ShowingGuide {
            self.state = GameState::Playing;
        }
    }

    /// Count down whichever timed state is active.
    pub fn advance_timers(&mut self) {
        let expired = match &mut self.state {
            GameState::LifeLostPause { remaining_ticks }
            | GameState::LevelUpPause { remaining_ticks } => {
                *remaining_ticks = remaining_ticks.saturating_sub(1);
                *remaining_ticks == 0
            }
            _ => false,
        };
        if expired {
            self.state = GameState::Playing;
        }
    }

    /// Show the level-up banner.  A level-up during the banner restarts it.
    pub fn on_level_up(&mut self) {
        if !self.state.is_simulating() {
            return;
        }
        self.state = if self.level_up_banner_ticks == 0 {
            GameState::Playing
        } else {
            GameState::LevelUpPause {
                remaining_ticks: self.level_up_banner_ticks,
            }
        };
    }

    /// A life has just been consumed; `lives_left` is the count afterwards.
    pub fn on_life_lost(&mut self, lives_left: u32) {
        debug_assert!(self.state.is_simulating(), "life lost in {:?}", self.state);
        self.state = if lives_left == 0 {
            log::info!("game over");
            GameState::GameOver
        } else if self.life_lost_pause_ticks == 0 {
            GameState::Playing
        } else {
            GameState::LifeLostPause {
                remaining_ticks: self.life_lost_pause_ticks,
            }
        };
    }

    /// Start a fresh run: any state, including a pending pause or the guide,
    /// goes straight to Playing.
    pub fn restart(&mut self) {
        log::debug!("restart from {:?}", self.state);
        self.state = GameState::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> StateMachine {
        StateMachine::new(&GameConfig::default())
    }

    #[test]
    fn confirm_only_leaves_the_guide() {
        let mut m = machine();
        m.confirm();
        assert_eq!(m.state(), GameState::Playing);
        m.on_life_lost(0);
        m.confirm();
        assert_eq!(m.state(), GameState::GameOver);
    }

    #[test]
    fn life_lost_pause_lasts_two_seconds_of_ticks() {
        let mut m = machine();
        m.confirm();
        m.on_life_lost(2);
        for _ in 0..119 {
            m.advance_timers();
            assert!(matches!(m.state(), GameState::LifeLostPause { .. }));
        }
        m.advance_timers();
        assert_eq!(m.state(), GameState::Playing);
    }

    #[test]
    fn restart_always_lands_in_playing() {
        let mut m = machine();
        m.restart();
        assert_eq!(m.state(), GameState::Playing);
        m.on_life_lost(2);
        m.restart();
        assert_eq!(m.state(), GameState::Playing);
        m.on_life_lost(0);
        m.restart();
        assert_eq!(m.state(), GameState::Playing);
    }

    #[test]
    fn exit_request_is_idempotent() {
        let mut m = machine();
        assert!(m.request_exit());
        assert!(!m.request_exit());
        assert!(m.is_exiting());
    }
}
