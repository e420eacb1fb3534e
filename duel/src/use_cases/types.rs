// Use-case level inputs/outputs for the match loop.

use crate::domain::{PlayerSlot, PlayerSnapshot, ProjectileSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(PlayerSlot),
    // Both players dropped to zero on the same tick.
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Running,
    Ended(MatchOutcome),
}

/// Hits landed during a single tick, indexed by shooter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub hits_by_one: u32,
    pub hits_by_two: u32,
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub state: MatchState,
    pub players: [PlayerSnapshot; 2],
    pub projectiles: Vec<ProjectileSnapshot>,
}

impl WorldUpdate {
    pub fn player(&self, slot: PlayerSlot) -> &PlayerSnapshot {
        &self.players[slot.index()]
    }
}
