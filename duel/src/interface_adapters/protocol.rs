// Serialized formats at the edge of the simulation: headless input scripts in,
// per-tick snapshot lines out.

use crate::domain::{PlayerSnapshot, ProjectileSnapshot};
use crate::interface_adapters::hud::HealthBand;
use crate::interface_adapters::keymap::Key;
use crate::use_cases::{MatchOutcome, MatchState, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Scripted keyboard input for a headless match.
#[derive(Debug, Clone, Deserialize)]
pub struct InputScriptDto {
    pub frames: Vec<ScriptFrameDto>,
}

/// A set of keys held down for a number of consecutive ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrameDto {
    #[serde(default = "default_frame_ticks")]
    pub ticks: u32,
    #[serde(default)]
    pub keys: Vec<KeyDto>,
}

fn default_frame_ticks() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDto {
    W,
    A,
    S,
    D,
    Space,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl From<KeyDto> for Key {
    fn from(key: KeyDto) -> Self {
        match key {
            KeyDto::W => Key::W,
            KeyDto::A => Key::A,
            KeyDto::S => Key::S,
            KeyDto::D => Key::D,
            KeyDto::Space => Key::Space,
            KeyDto::Up => Key::Up,
            KeyDto::Down => Key::Down,
            KeyDto::Left => Key::Left,
            KeyDto::Right => Key::Right,
            KeyDto::Enter => Key::Enter,
        }
    }
}

/// Snapshot of the match emitted after each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub state: MatchStateDto,
    pub players: Vec<PlayerStateDto>,
    pub projectiles: Vec<ProjectileStateDto>,
}

impl From<&WorldUpdate> for WorldUpdateDto {
    fn from(update: &WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            state: MatchStateDto::from(update.state),
            players: update.players.iter().map(PlayerStateDto::from).collect(),
            projectiles: update
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub player: u8,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
    pub health_band: &'static str,
    pub defeated: bool,
}

impl From<&PlayerSnapshot> for PlayerStateDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            player: player.slot.number(),
            x: player.x,
            y: player.y,
            health: player.health,
            max_health: player.max_health,
            health_band: HealthBand::from_health(player.health).as_str(),
            defeated: player.defeated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub owner: u8,
    pub x: f32,
    pub y: f32,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            owner: projectile.owner.number(),
            x: projectile.x,
            y: projectile.y,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStateDto {
    Running,
    Won { winner: u8 },
    Draw,
}

impl From<MatchState> for MatchStateDto {
    fn from(state: MatchState) -> Self {
        match state {
            MatchState::Running => MatchStateDto::Running,
            MatchState::Ended(MatchOutcome::Winner(slot)) => MatchStateDto::Won {
                winner: slot.number(),
            },
            MatchState::Ended(MatchOutcome::Draw) => MatchStateDto::Draw,
        }
    }
}
