use tank_shooter::events::GameEvent;
use tank_shooter::scoreboard::Scoreboard;

#[test]
fn ten_hits_level_up_once() {
    let mut board = Scoreboard::new(100);
    let events: Vec<GameEvent> = (0..10).filter_map(|_| board.add_score(10)).collect();
    assert_eq!(events, vec![GameEvent::LevelUp { level: 2 }]);
    assert_eq!(board.level(), 2);
    assert_eq!(board.score(), 0);
}

#[test]
fn score_accumulates_below_threshold() {
    let mut board = Scoreboard::new(100);
    for _ in 0..9 {
        assert_eq!(board.add_score(10), None);
    }
    assert_eq!(board.score(), 90);
    assert_eq!(board.level(), 1);
}

#[test]
fn levels_keep_climbing() {
    let mut board = Scoreboard::new(100);
    for level in 2..=6 {
        assert_eq!(board.add_score(100), Some(GameEvent::LevelUp { level }));
    }
    assert_eq!(board.level(), 6);
}
