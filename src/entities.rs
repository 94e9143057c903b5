/// All simulated objects — a closed set of kinds sharing one moving body.
///
/// Coordinates are integer playfield units with the origin at the top-left
/// corner; `y` grows downward.  Every body is an axis-aligned rectangle whose
/// size is fixed by its kind.

use serde::Serialize;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Enemy,
}

impl EntityKind {
    /// Bounding-box size (width, height) for this kind.
    pub fn size(self, config: &GameConfig) -> (i32, i32) {
        match self {
            EntityKind::Player => (config.player_width, config.player_height),
            EntityKind::Projectile => (config.projectile_width, config.projectile_height),
            EntityKind::Enemy => (config.enemy_width, config.enemy_height),
        }
    }
}

/// Horizontal steering resolved from one tick of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Steer {
    #[default]
    Idle,
    Left,
    Right,
}

// ── Bounding boxes ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict overlap: rectangles that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

// ── Moving bodies ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    pub width: i32,
    pub height: i32,
    /// Remaining hit points. Only enemies carry a meaningful value; a single
    /// projectile hit destroys an enemy regardless.
    pub health: i32,
    pub alive: bool,
}

impl Entity {
    fn new(kind: EntityKind, x: i32, y: i32, dx: i32, dy: i32, config: &GameConfig) -> Self {
        let (width, height) = kind.size(config);
        Self {
            kind,
            x,
            y,
            dx,
            dy,
            width,
            height,
            health: 0,
            alive: true,
        }
    }

    /// A projectile centred on `(cx, cy)` travelling straight up.
    pub fn projectile(cx: i32, cy: i32, config: &GameConfig) -> Self {
        let (w, h) = EntityKind::Projectile.size(config);
        Self::new(
            EntityKind::Projectile,
            cx - w / 2,
            cy - h / 2,
            0,
            -config.projectile_speed,
            config,
        )
    }

    /// An enemy whose top-left corner sits at `(x, 0)`, falling at `speed`.
    pub fn enemy(x: i32, speed: i32, config: &GameConfig) -> Self {
        Self {
            health: config.enemy_health,
            ..Self::new(EntityKind::Enemy, x, 0, 0, speed, config)
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Move by one tick of velocity.  Projectiles die once their top edge
    /// leaves the playfield.
    pub fn advance(&mut self) {
        assert!(self.alive, "advanced a dead {:?}", self.kind);
        self.x += self.dx;
        self.y += self.dy;
        if self.kind == EntityKind::Projectile && self.y < 0 {
            self.alive = false;
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Entity,
    /// 0..=max_health.
    pub health: i32,
    pub lives: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start();
        Self {
            body: Entity::new(EntityKind::Player, x, y, 0, 0, config),
            health: config.max_health,
            lives: config.starting_lives,
        }
    }

    /// Apply one tick of steering, clamped to `[0, playfield_width - width]`.
    pub fn steer(&mut self, steer: Steer, config: &GameConfig) {
        self.body.dx = match steer {
            Steer::Left => -config.player_speed,
            Steer::Right => config.player_speed,
            Steer::Idle => 0,
        };
        self.body.x = (self.body.x + self.body.dx)
            .clamp(0, config.playfield_width - self.body.width);
    }

    /// Fire from the turret: horizontal centre, top edge.
    pub fn shoot(&self, config: &GameConfig) -> Entity {
        let bounds = self.body.bounds();
        Entity::projectile(bounds.center_x(), bounds.y, config)
    }

    /// Subtract contact damage.  Returns `true` when the hit was fatal, in
    /// which case one life is consumed and health is refilled.
    pub fn take_damage(&mut self, amount: i32, config: &GameConfig) -> bool {
        self.health = (self.health - amount).max(0);
        if self.health > 0 {
            return false;
        }
        self.lose_life();
        self.health = config.max_health;
        true
    }

    pub fn lose_life(&mut self) {
        assert!(self.lives > 0, "lost a life with none remaining");
        self.lives -= 1;
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}
