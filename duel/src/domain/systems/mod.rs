// Per-tick simulation systems. Each operates on plain domain state.

pub mod collision;
pub mod movement;
pub mod projectiles;
