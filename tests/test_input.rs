use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tank_shooter::entities::Steer;
use tank_shooter::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn command_set_collects_and_steers() {
    let input: TickInput = [Command::MoveLeft, Command::Shoot].into_iter().collect();
    assert!(input.shoot);
    assert_eq!(input.steer(), Steer::Left);

    let both: TickInput = [Command::MoveRight, Command::MoveLeft].into_iter().collect();
    assert_eq!(both.steer(), Steer::Right);
    assert_eq!(TickInput::default().steer(), Steer::Idle);
}

#[test]
fn held_arrow_keeps_steering_within_window() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Left), 1);
    assert!(keys.take(1).move_left);
    assert!(keys.take(1 + HOLD_WINDOW).move_left);
    assert!(!keys.take(2 + HOLD_WINDOW).move_left);
}

#[test]
fn release_stops_steering_immediately() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char('d')), 1);
    keys.record(release(KeyCode::Char('d')), 2);
    assert!(!keys.take(2).move_right);
}

#[test]
fn shoot_fires_once_per_press() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char('z')), 1);
    keys.record(
        KeyEvent::new_with_kind(KeyCode::Char('z'), KeyModifiers::NONE, KeyEventKind::Repeat),
        2,
    );
    assert!(keys.take(2).shoot);
    assert!(!keys.take(3).shoot);
}

#[test]
fn menu_keys_map_to_commands() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Enter), 1);
    keys.record(press(KeyCode::Char('y')), 1);
    keys.record(press(KeyCode::Char('N')), 1);
    let input = keys.take(1);
    assert!(input.confirm && input.restart_yes && input.restart_no);
    assert!(!input.quit);
}

#[test]
fn quit_keys() {
    for event in [
        press(KeyCode::Esc),
        press(KeyCode::Char('q')),
        KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
    ] {
        let label = format!("{event:?}");
        let mut keys = KeyTracker::new();
        keys.record(event, 1);
        assert!(keys.take(1).quit, "{label}");
    }
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char('x')), 1);
    assert_eq!(keys.take(1), TickInput::default());
}
