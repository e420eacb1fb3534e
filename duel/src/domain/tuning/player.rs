/// Gameplay tuning for the two duelists.
///
/// Keep this separate from runtime configuration (tick rate, playfield size, etc.).

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Hitbox width in pixels.
    pub width: f32,

    /// Hitbox height in pixels.
    pub height: f32,

    /// Movement per active direction, in pixels per tick.
    pub speed: f32,

    /// Starting and maximum health.
    pub max_health: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            speed: 5.0,
            max_health: 100,
        }
    }
}
