/// Gameplay tuning for projectiles.

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Velocity magnitude in pixels per tick.
    pub speed: f32,

    /// Collision radius in pixels, applied on all sides of the projectile point.
    pub radius: f32,

    /// Health removed from the target on a hit.
    pub damage: i32,

    /// Ticks a player must wait between shots.
    pub cooldown_ticks: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            radius: 5.0,
            damage: 10,
            cooldown_ticks: 20,
        }
    }
}
