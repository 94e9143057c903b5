/// Timer-driven enemy creation.
///
/// The interval between spawns never changes; only the speed handed to new
/// enemies grows with each level.  Enemies copy the speed at spawn time, so a
/// level-up never accelerates enemies already on the field.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Entity;

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnDirector {
    counter: u32,
    interval: u32,
    level: u32,
    enemy_speed: i32,
}

impl SpawnDirector {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            counter: 0,
            interval: config.spawn_interval,
            level: 1,
            enemy_speed: enemy_speed_for_level(1, config),
        }
    }

    /// Advance the timer by one tick, returning a new enemy once the counter
    /// exceeds the interval.
    pub fn tick(&mut self, config: &GameConfig, rng: &mut impl Rng) -> Option<Entity> {
        self.counter += 1;
        if self.counter <= self.interval {
            return None;
        }
        self.counter = 0;
        let x = rng.gen_range(0..=config.playfield_width - config.enemy_width);
        log::debug!("spawned enemy at x={x} speed={}", self.enemy_speed);
        Some(Entity::enemy(x, self.enemy_speed, config))
    }

    pub fn on_level_up(&mut self, config: &GameConfig) {
        self.level += 1;
        self.enemy_speed = enemy_speed_for_level(self.level, config);
    }

    pub fn enemy_speed(&self) -> i32 {
        self.enemy_speed
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

/// Speed handed to enemies spawned while at `level` (1-based).  Saturates
/// rather than wrapping on absurdly long runs.
pub fn enemy_speed_for_level(level: u32, config: &GameConfig) -> i32 {
    let steps = i32::try_from(level.max(1) - 1).unwrap_or(i32::MAX);
    config
        .base_enemy_speed
        .saturating_add(config.enemy_speed_increment.saturating_mul(steps))
}
