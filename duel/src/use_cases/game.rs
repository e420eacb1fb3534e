use super::ports::Presentation;
use super::types::{MatchOutcome, MatchState, TickReport, WorldUpdate};
use crate::domain::systems::{collision, movement, projectiles};
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::domain::{
    InputSnapshot, Playfield, Player, PlayerInput, PlayerSlot, PlayerSnapshot, ProjectileSnapshot,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, info};

/// Authoritative state for one two-player match.
#[derive(Debug, Clone)]
pub struct Duel {
    playfield: Playfield,
    projectile_tuning: ProjectileTuning,
    players: [Player; 2],
    tick: u64,
}

impl Duel {
    /// Starts a match with both players at their spawn points and full health.
    pub fn new(
        playfield: Playfield,
        player_tuning: PlayerTuning,
        projectile_tuning: ProjectileTuning,
    ) -> Self {
        let one = Player::spawn(PlayerSlot::One, &playfield, &player_tuning);
        let two = Player::spawn(PlayerSlot::Two, &playfield, &player_tuning);
        Self::from_players(playfield, projectile_tuning, one, two)
    }

    /// Starts a match from explicitly placed players.
    pub fn from_players(
        playfield: Playfield,
        projectile_tuning: ProjectileTuning,
        one: Player,
        two: Player,
    ) -> Self {
        debug_assert_eq!(one.slot, PlayerSlot::One);
        debug_assert_eq!(two.slot, PlayerSlot::Two);
        Self {
            playfield,
            projectile_tuning,
            players: [one, two],
            tick: 0,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    /// Number of ticks simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Runs one tick: player one moves, fires and ticks, then player two does the
    /// same, then hits are resolved one-vs-two followed by two-vs-one.
    pub fn step(&mut self, input: &InputSnapshot) -> TickReport {
        for slot in PlayerSlot::ALL {
            self.advance_player(slot, input.for_slot(slot));
        }

        let cfg = self.projectile_tuning;
        let [one, two] = &mut self.players;
        let report = TickReport {
            hits_by_one: collision::resolve_hits(one, two, &cfg),
            hits_by_two: collision::resolve_hits(two, one, &cfg),
        };

        self.tick += 1;
        report
    }

    fn advance_player(&mut self, slot: PlayerSlot, input: &PlayerInput) {
        // Aim is automatic: always at the opponent's current center.
        let (target_x, target_y) = self.players[slot.opponent().index()].center();
        let p = &mut self.players[slot.index()];

        movement::move_player(p, input, &self.playfield);
        if input.shoot {
            projectiles::fire(p, target_x, target_y, &self.projectile_tuning);
        }
        projectiles::tick_player(p, &self.playfield);
    }

    /// Terminal check for the match; `None` while both players are alive.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let [one, two] = &self.players;
        match (one.is_defeated(), two.is_defeated()) {
            (true, true) => Some(MatchOutcome::Draw),
            (true, false) => Some(MatchOutcome::Winner(PlayerSlot::Two)),
            (false, true) => Some(MatchOutcome::Winner(PlayerSlot::One)),
            (false, false) => None,
        }
    }

    pub fn state(&self) -> MatchState {
        match self.outcome() {
            Some(outcome) => MatchState::Ended(outcome),
            None => MatchState::Running,
        }
    }

    /// Render-ready view of the current tick.
    pub fn world_update(&self) -> WorldUpdate {
        let [one, two] = &self.players;
        WorldUpdate {
            tick: self.tick,
            state: self.state(),
            players: [PlayerSnapshot::from(one), PlayerSnapshot::from(two)],
            projectiles: one
                .projectiles
                .iter()
                .chain(two.projectiles.iter())
                .map(ProjectileSnapshot::from)
                .collect(),
        }
    }
}

/// Pacing and stop conditions for the frame driver.
#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    /// Fixed interval between ticks.
    pub tick_interval: Duration,
    /// Stop after this many ticks (0 runs until the host closes).
    pub max_ticks: u64,
}

#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub ticks: u64,
    pub outcome: Option<MatchOutcome>,
    pub final_update: WorldUpdate,
}

/// Frame driver: polls input, steps the duel and renders once per tick.
///
/// Once a player is defeated, controls are ignored and the duel keeps stepping
/// with idle input so in-flight projectiles still resolve and the final state
/// stays on screen.
pub async fn match_task<P: Presentation>(
    mut duel: Duel,
    presentation: &mut P,
    settings: MatchSettings,
    shutdown: Arc<Notify>,
) -> MatchSummary {
    let mut interval = tokio::time::interval(settings.tick_interval);
    let mut outcome = duel.outcome();

    info!(
        tick_interval_ms = settings.tick_interval.as_millis() as u64,
        max_ticks = settings.max_ticks,
        "match started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick = duel.tick(), "shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        let Some(input) = presentation.poll_input() else {
            info!(tick = duel.tick(), "presentation closed");
            break;
        };
        let input = if outcome.is_some() {
            InputSnapshot::default()
        } else {
            input
        };

        let report = duel.step(&input);
        if report != TickReport::default() {
            debug!(
                tick = duel.tick(),
                hits_by_one = report.hits_by_one,
                hits_by_two = report.hits_by_two,
                "hits resolved"
            );
        }

        if outcome.is_none() {
            outcome = duel.outcome();
            if let Some(result) = outcome {
                info!(tick = duel.tick(), outcome = ?result, "match ended");
            }
        }

        presentation.render(&duel.world_update());

        if settings.max_ticks != 0 && duel.tick() >= settings.max_ticks {
            info!(tick = duel.tick(), "tick limit reached");
            break;
        }
    }

    MatchSummary {
        ticks: duel.tick(),
        outcome,
        final_update: duel.world_update(),
    }
}
