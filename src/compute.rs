/// Fixed-tick simulation driver.
///
/// `Simulation` exclusively owns the player, both entity containers, the
/// scoreboard, the spawn director and the state machine.  Everything is
/// mutated inside [`Simulation::tick`]; all randomness comes through the
/// injected RNG so callers control determinism (tests use a seeded RNG).

use rand::Rng;

use crate::collision;
use crate::config::GameConfig;
use crate::entities::{Entity, Player};
use crate::events::GameEvent;
use crate::input::TickInput;
use crate::scoreboard::Scoreboard;
use crate::snapshot::{Banner, PlayerView, Snapshot, GUIDE_LINES};
use crate::spawn::SpawnDirector;
use crate::state::{GameState, StateMachine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: GameConfig,
    pub player: Player,
    pub projectiles: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub scoreboard: Scoreboard,
    pub director: SpawnDirector,
    pub machine: StateMachine,
    pub tick: u64,
}

impl Simulation {
    /// A fresh run sitting on the guide screen.
    pub fn new(config: GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config");
        Self {
            player: Player::new(&config),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            scoreboard: Scoreboard::new(config.level_up_threshold),
            director: SpawnDirector::new(&config),
            machine: StateMachine::new(&config),
            tick: 0,
            config,
        }
    }

    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    /// Reinitialise the run in place and resume play from whatever state the
    /// machine was in (the guide is not shown again).
    pub fn reset_run(&mut self) {
        self.player = Player::new(&self.config);
        self.projectiles.clear();
        self.enemies.clear();
        self.scoreboard = Scoreboard::new(self.config.level_up_threshold);
        self.director = SpawnDirector::new(&self.config);
        self.machine.restart();
        log::info!("run restarted");
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self, input: &TickInput, rng: &mut impl Rng) -> TickOutcome {
        if self.machine.is_exiting() {
            return TickOutcome::Exit;
        }
        if input.quit {
            self.machine.request_exit();
            return TickOutcome::Exit;
        }
        self.tick += 1;

        match self.machine.state() {
            GameState::ShowingGuide => {
                if input.confirm {
                    self.machine.confirm();
                    log::info!("run started");
                }
            }
            GameState::LifeLostPause { .. } => self.machine.advance_timers(),
            GameState::GameOver => {
                if input.restart_yes {
                    self.reset_run();
                } else if input.restart_no {
                    self.machine.request_exit();
                    return TickOutcome::Exit;
                }
            }
            GameState::Playing | GameState::LevelUpPause { .. } => {
                self.machine.advance_timers();
                self.step_playfield(input, rng);
            }
        }
        self.check_invariants();
        TickOutcome::Continue
    }

    /// One pass of motion, collision, spawning, scoring and life accounting.
    fn step_playfield(&mut self, input: &TickInput, rng: &mut impl Rng) {
        let config = &self.config;

        // ── 1. Player ────────────────────────────────────────────────────────
        self.player.steer(input.steer(), config);
        if input.shoot {
            self.projectiles.push(self.player.shoot(config));
        }

        // ── 2. Motion ────────────────────────────────────────────────────────
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        collision::sweep(&mut self.projectiles);
        for enemy in &mut self.enemies {
            enemy.advance();
        }

        // ── 3. Collisions ────────────────────────────────────────────────────
        let mut events =
            collision::resolve_projectiles(&mut self.projectiles, &mut self.enemies, config.hit_score);
        events.extend(collision::resolve_player(&self.player, &mut self.enemies));
        events.extend(collision::resolve_breaches(&mut self.enemies, config.playfield_height));
        collision::sweep(&mut self.projectiles);
        collision::sweep(&mut self.enemies);

        // ── 4. Spawning ──────────────────────────────────────────────────────
        if let Some(enemy) = self.director.tick(config, rng) {
            self.enemies.push(enemy);
        }

        // ── 5. Score / level ─────────────────────────────────────────────────
        let gained: u32 = events
            .iter()
            .map(|event| match event {
                GameEvent::Hit { score } => *score,
                _ => 0,
            })
            .sum();
        if gained > 0 {
            if let Some(level_up) = self.scoreboard.add_score(gained) {
                self.director.on_level_up(config);
                self.machine.on_level_up();
                events.push(level_up);
            }
        }

        // ── 6. Lives ─────────────────────────────────────────────────────────
        self.apply_hazards(&events);
    }

    /// Charge damage and breaches against the player.  At most one life is
    /// lost per tick; losing it wipes the enemy wave but leaves projectiles
    /// in flight.
    fn apply_hazards(&mut self, events: &[GameEvent]) {
        let mut life_lost = false;
        for event in events {
            match event {
                GameEvent::PlayerDamaged => {
                    if self.player.take_damage(self.config.contact_damage, &self.config) {
                        life_lost = true;
                    }
                }
                GameEvent::BreachedBottom => {
                    self.player.lose_life();
                    life_lost = true;
                }
                GameEvent::Hit { .. } | GameEvent::LevelUp { .. } => {}
            }
            if life_lost {
                break;
            }
        }
        if !life_lost {
            return;
        }
        self.enemies.clear();
        log::info!("life lost, {} remaining", self.player.lives);
        self.machine.on_life_lost(self.player.lives);
    }

    fn check_invariants(&self) {
        debug_assert!(
            (0..=self.config.max_health).contains(&self.player.health),
            "health out of range: {}",
            self.player.health
        );
        debug_assert!(self.enemies.iter().all(|e| e.alive));
        debug_assert!(self.projectiles.iter().all(|p| p.alive));
        debug_assert!(self.scoreboard.score() < self.config.level_up_threshold);
    }

    /// Immutable view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.machine.state();
        let banner = match state {
            GameState::LevelUpPause { remaining_ticks } => Some(Banner::LevelUp {
                level: self.scoreboard.level(),
                remaining_ticks,
            }),
            GameState::LifeLostPause { remaining_ticks } => Some(Banner::LivesLeft {
                lives: self.player.lives,
                remaining_ticks,
            }),
            GameState::GameOver => Some(Banner::GameOver),
            GameState::ShowingGuide | GameState::Playing => None,
        };
        Snapshot {
            tick: self.tick,
            state,
            player: PlayerView {
                bounds: self.player.body.bounds(),
                health: self.player.health,
                lives: self.player.lives,
            },
            projectiles: self.projectiles.iter().map(Entity::bounds).collect(),
            enemies: self.enemies.iter().map(Entity::bounds).collect(),
            score: self.scoreboard.score(),
            level: self.scoreboard.level(),
            banner,
            guide: (state == GameState::ShowingGuide).then_some(GUIDE_LINES),
            playfield_width: self.config.playfield_width,
            playfield_height: self.config.playfield_height,
        }
    }
}
