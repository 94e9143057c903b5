/// Things that happened during one tick, in the order they were detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile destroyed an enemy.
    Hit { score: u32 },
    /// An enemy rammed the player.
    PlayerDamaged,
    /// An enemy slipped past the bottom of the playfield.
    BreachedBottom,
    /// The score crossed the level-up threshold.
    LevelUp { level: u32 },
}
