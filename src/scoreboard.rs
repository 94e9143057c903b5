use crate::events::GameEvent;

/// Score and level counters.  Score restarts from zero on every level-up;
/// the level only ever climbs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    level: u32,
    threshold: u32,
}

impl Scoreboard {
    pub fn new(threshold: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            threshold,
        }
    }

    /// Add points.  Crossing the threshold bumps the level by exactly one,
    /// discards the whole score (no carry-over), and reports a `LevelUp`.
    pub fn add_score(&mut self, points: u32) -> Option<GameEvent> {
        self.score += points;
        if self.score < self.threshold {
            return None;
        }
        self.level += 1;
        self.score = 0;
        log::info!("level up -> {}", self.level);
        Some(GameEvent::LevelUp { level: self.level })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overshoot_is_discarded() {
        let mut board = Scoreboard::new(100);
        board.add_score(90);
        assert_eq!(board.add_score(20), Some(GameEvent::LevelUp { level: 2 }));
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn zero_points_never_levels() {
        let mut board = Scoreboard::new(100);
        assert_eq!(board.add_score(0), None);
        assert_eq!(board.level(), 1);
    }
}
