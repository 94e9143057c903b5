use rand::rngs::StdRng;
use rand::SeedableRng;

use tank_shooter::config::GameConfig;
use tank_shooter::spawn::*;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn spawns_exactly_one_enemy_per_interval() {
    let config = GameConfig::default();
    let mut director = SpawnDirector::new(&config);
    let mut rng = seeded_rng();

    let spawned: Vec<u32> = (1..=404)
        .filter(|_| director.tick(&config, &mut rng).is_some())
        .collect();
    // The counter must exceed 100, then restarts from zero.
    assert_eq!(spawned, vec![101, 202, 303, 404]);
    assert_eq!(director.counter(), 0);
}

#[test]
fn spawn_x_stays_inside_the_playfield() {
    let config = GameConfig {
        spawn_interval: 0,
        ..GameConfig::default()
    };
    let mut director = SpawnDirector::new(&config);
    let mut rng = seeded_rng();
    for _ in 0..2_000 {
        let enemy = director.tick(&config, &mut rng).expect("interval 0 spawns every tick");
        assert!((0..=760).contains(&enemy.x), "x = {}", enemy.x);
        assert_eq!(enemy.y, 0);
    }
}

#[test]
fn interval_is_unaffected_by_level_ups() {
    let config = GameConfig::default();
    let mut director = SpawnDirector::new(&config);
    let mut rng = seeded_rng();
    for _ in 0..5 {
        director.on_level_up(&config);
    }
    assert_eq!(director.enemy_speed(), 12);
    for _ in 0..100 {
        assert!(director.tick(&config, &mut rng).is_none());
    }
    let enemy = director.tick(&config, &mut rng).unwrap();
    assert_eq!(enemy.dy, 12);
}

#[test]
fn speed_for_level_formula() {
    let config = GameConfig::default();
    assert_eq!(enemy_speed_for_level(1, &config), 2);
    assert_eq!(enemy_speed_for_level(2, &config), 4);
    assert_eq!(enemy_speed_for_level(3, &config), 6);
}

#[test]
fn director_speed_matches_formula_after_level_ups() {
    let config = GameConfig::default();
    let mut director = SpawnDirector::new(&config);
    for level in 1..=8 {
        assert_eq!(director.enemy_speed(), enemy_speed_for_level(level, &config));
        director.on_level_up(&config);
    }
}

#[test]
fn director_follows_configured_base_and_increment() {
    let config = GameConfig {
        base_enemy_speed: 3,
        enemy_speed_increment: 0,
        ..GameConfig::default()
    };
    let mut director = SpawnDirector::new(&config);
    for _ in 0..4 {
        director.on_level_up(&config);
    }
    assert_eq!(director.enemy_speed(), 3);
    assert_eq!(director.enemy_speed(), enemy_speed_for_level(5, &config));
}
