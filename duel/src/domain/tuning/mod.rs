// Gameplay tuning, kept apart from runtime configuration.

pub mod player;
pub mod projectile;
