/// Axis-aligned bounding-box collision passes.
///
/// Each pass only considers entities that are still alive when it reaches
/// them, so an enemy destroyed by a projectile cannot also damage the player
/// or breach in the same tick.  Dead entities stay in their containers until
/// [`sweep`] runs.

use crate::entities::{Entity, Player};
use crate::events::GameEvent;

/// Projectiles against enemies.  Each projectile scores at most one hit: the
/// first live enemy it overlaps, in enemy insertion order.
pub fn resolve_projectiles(
    projectiles: &mut [Entity],
    enemies: &mut [Entity],
    hit_score: u32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for projectile in projectiles.iter_mut().filter(|p| p.alive) {
        let bounds = projectile.bounds();
        if let Some(enemy) = enemies
            .iter_mut()
            .find(|e| e.alive && e.bounds().overlaps(&bounds))
        {
            enemy.kill();
            projectile.kill();
            log::debug!("hit enemy at ({}, {})", enemy.x, enemy.y);
            events.push(GameEvent::Hit { score: hit_score });
        }
    }
    events
}

/// Player against enemies.  Every overlapping enemy is destroyed and
/// reported separately.
pub fn resolve_player(player: &Player, enemies: &mut [Entity]) -> Vec<GameEvent> {
    let bounds = player.body.bounds();
    enemies
        .iter_mut()
        .filter(|e| e.alive && e.bounds().overlaps(&bounds))
        .map(|enemy| {
            enemy.kill();
            log::debug!("player rammed at ({}, {})", enemy.x, enemy.y);
            GameEvent::PlayerDamaged
        })
        .collect()
}

/// Enemies whose top edge has passed `bottom`.
pub fn resolve_breaches(enemies: &mut [Entity], bottom: i32) -> Vec<GameEvent> {
    enemies
        .iter_mut()
        .filter(|e| e.alive && e.y > bottom)
        .map(|enemy| {
            enemy.kill();
            log::debug!("enemy breached at x={}", enemy.x);
            GameEvent::BreachedBottom
        })
        .collect()
}

/// Drop every dead entity, preserving the order of the survivors.
pub fn sweep(entities: &mut Vec<Entity>) {
    entities.retain(|e| e.alive);
}
