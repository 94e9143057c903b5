/// Tunable game constants.
///
/// `GameConfig::default()` reproduces the classic tank shooter: an 800×480
/// playfield, 60 ticks per second, one enemy every 100 ticks, and a level-up
/// every 100 points.  Any subset of fields can be overridden from a TOML
/// file; missing keys keep their default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ────────────────────────────────────────────────────────────
    pub playfield_width: i32,
    pub playfield_height: i32,
    /// Target simulation rate (ticks per second).
    pub tick_rate: u32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_width: i32,
    pub player_height: i32,
    /// Horizontal speed in units per tick.
    pub player_speed: i32,
    pub max_health: i32,
    pub starting_lives: u32,
    /// Health lost per overlapping enemy.
    pub contact_damage: i32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_width: i32,
    pub projectile_height: i32,
    /// Upward speed in units per tick.
    pub projectile_speed: i32,

    // ── Enemies / spawning ───────────────────────────────────────────────────
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub enemy_health: i32,
    /// Ticks the spawn counter must exceed before the next enemy appears.
    pub spawn_interval: u32,
    pub base_enemy_speed: i32,
    pub enemy_speed_increment: i32,

    // ── Scoring / pacing ─────────────────────────────────────────────────────
    pub hit_score: u32,
    pub level_up_threshold: u32,
    pub level_up_banner_ticks: u32,
    pub life_lost_pause_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 800,
            playfield_height: 480,
            tick_rate: 60,

            player_width: 50,
            player_height: 30,
            player_speed: 5,
            max_health: 100,
            starting_lives: 3,
            contact_damage: 10,

            projectile_width: 10,
            projectile_height: 5,
            projectile_speed: 7,

            enemy_width: 40,
            enemy_height: 30,
            enemy_health: 50,
            spawn_interval: 100,
            base_enemy_speed: 2,
            enemy_speed_increment: 2,

            hit_score: 10,
            level_up_threshold: 100,
            level_up_banner_ticks: 60,
            life_lost_pause_secs: 2,
        }
    }
}

impl GameConfig {
    /// Read a TOML file and validate the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.into(),
            })
        }

        if self.playfield_width <= 0 {
            return invalid("playfield_width", "must be positive");
        }
        if self.playfield_height <= 0 {
            return invalid("playfield_height", "must be positive");
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate", "must be at least 1");
        }
        for (field, width, height) in [
            ("player_width", self.player_width, self.player_height),
            ("enemy_width", self.enemy_width, self.enemy_height),
            ("projectile_width", self.projectile_width, self.projectile_height),
        ] {
            if width <= 0 || height <= 0 {
                return invalid(field, "entity sizes must be positive");
            }
            if width > self.playfield_width {
                return invalid(field, format!("wider than the playfield ({})", self.playfield_width));
            }
        }
        if self.player_height > self.playfield_height {
            return invalid("player_height", "taller than the playfield");
        }
        if self.max_health <= 0 {
            return invalid("max_health", "must be positive");
        }
        if self.contact_damage < 0 {
            return invalid("contact_damage", "must not be negative");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if self.level_up_threshold == 0 {
            return invalid("level_up_threshold", "must be at least 1");
        }
        for (field, speed) in [
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("base_enemy_speed", self.base_enemy_speed),
        ] {
            if speed <= 0 {
                return invalid(field, "must be positive");
            }
        }
        if self.enemy_speed_increment < 0 {
            return invalid("enemy_speed_increment", "must not be negative");
        }
        if self.life_lost_pause_secs.checked_mul(self.tick_rate).is_none() {
            return invalid(
                "life_lost_pause_secs",
                format!("pause overflows at {} ticks per second", self.tick_rate),
            );
        }
        Ok(())
    }

    /// Length of the life-lost pause expressed in ticks.
    pub fn life_lost_pause_ticks(&self) -> u32 {
        self.life_lost_pause_secs.saturating_mul(self.tick_rate)
    }

    /// Starting position of the player's top-left corner: horizontally
    /// centred, 50 units above the bottom of the playfield (by its centre).
    pub fn player_start(&self) -> (i32, i32) {
        let cx = self.playfield_width / 2;
        let cy = self.playfield_height - 50;
        (
            cx - self.player_width / 2,
            (cy - self.player_height / 2).max(0),
        )
    }
}
