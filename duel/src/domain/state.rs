// Domain-level simulation entities and input/snapshot types.

use crate::domain::tuning::player::PlayerTuning;

/// Identifies one of the two duelists. Projectiles carry it as their owner tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// 1-based number used in labels and logs.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Fixed match bounds used for player clamping and projectile culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

impl Playfield {
    /// Starting top-left corner for a slot: player one on the left, player two
    /// mirrored on the right, both vertically centered.
    pub fn spawn_point(&self, slot: PlayerSlot, tuning: &PlayerTuning) -> (f32, f32) {
        let y = self.height / 2.0 - tuning.height / 2.0;
        match slot {
            PlayerSlot::One => (100.0, y),
            PlayerSlot::Two => (self.width - 100.0 - tuning.width, y),
        }
    }

    /// Inclusive containment test used for projectile culling.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// One player's logical actions for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

/// Input for both players, sampled once per tick by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub one: PlayerInput,
    pub two: PlayerInput,
}

impl InputSnapshot {
    pub fn for_slot(&self, slot: PlayerSlot) -> &PlayerInput {
        match slot {
            PlayerSlot::One => &self.one,
            PlayerSlot::Two => &self.two,
        }
    }

    pub fn for_slot_mut(&mut self, slot: PlayerSlot) -> &mut PlayerInput {
        match slot {
            PlayerSlot::One => &mut self.one,
            PlayerSlot::Two => &mut self.two,
        }
    }
}

/// A shot in flight. Owned exclusively by the firing player's projectile list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub owner: PlayerSlot,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub slot: PlayerSlot,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,

    // Combat state.
    pub health: i32,
    pub max_health: i32,
    pub projectiles: Vec<Projectile>,
    pub shoot_cooldown: u32, // ticks until the next shot is allowed
}

impl Player {
    pub fn new(slot: PlayerSlot, x: f32, y: f32, tuning: &PlayerTuning) -> Self {
        Self {
            slot,
            x,
            y,
            width: tuning.width,
            height: tuning.height,
            speed: tuning.speed,
            health: tuning.max_health,
            max_health: tuning.max_health,
            projectiles: Vec::new(),
            shoot_cooldown: 0,
        }
    }

    /// Creates a player at the slot's starting position on `playfield`.
    pub fn spawn(slot: PlayerSlot, playfield: &Playfield, tuning: &PlayerTuning) -> Self {
        let (x, y) = playfield.spawn_point(slot, tuning);
        Self::new(slot, x, y, tuning)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Removes `amount` health, never going below zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub slot: PlayerSlot,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub max_health: i32,
    pub defeated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub owner: PlayerSlot,
    pub x: f32,
    pub y: f32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            slot: p.slot,
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            health: p.health,
            max_health: p.max_health,
            defeated: p.is_defeated(),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            owner: p.owner,
            x: p.x,
            y: p.y,
        }
    }
}
