use proptest::prelude::*;

use tank_shooter::config::GameConfig;
use tank_shooter::entities::{Player, Steer};
use tank_shooter::scoreboard::Scoreboard;

fn steer_strategy() -> impl Strategy<Value = Steer> {
    prop_oneof![Just(Steer::Idle), Just(Steer::Left), Just(Steer::Right)]
}

proptest! {
    #[test]
    fn player_never_leaves_the_playfield(
        start in 0i32..=750,
        steers in prop::collection::vec(steer_strategy(), 0..400),
    ) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.body.x = start;
        for steer in steers {
            player.steer(steer, &config);
            prop_assert!(player.body.x >= 0);
            prop_assert!(player.body.x <= config.playfield_width - player.body.width);
        }
    }

    #[test]
    fn score_stays_below_threshold_and_level_never_drops(
        gains in prop::collection::vec(0u32..=60, 0..200),
    ) {
        let mut board = Scoreboard::new(100);
        let mut level = board.level();
        for gain in gains {
            let event = board.add_score(gain);
            prop_assert!(board.score() < 100);
            prop_assert!(board.level() == level || board.level() == level + 1);
            prop_assert_eq!(event.is_some(), board.level() == level + 1);
            level = board.level();
        }
    }

    #[test]
    fn health_stays_in_range_until_lives_run_out(
        hits in prop::collection::vec(0i32..=40, 0..100),
    ) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        for hit in hits {
            if player.is_out_of_lives() {
                break;
            }
            let lives = player.lives;
            let fatal = player.take_damage(hit, &config);
            prop_assert!((0..=config.max_health).contains(&player.health));
            prop_assert_eq!(player.lives, if fatal { lives - 1 } else { lives });
        }
    }
}
