// HUD layout and text derived from a world update. Pure data; drawing is the host's job.

use crate::domain::{PlayerSlot, PlayerSnapshot};
use crate::use_cases::{MatchOutcome, MatchState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const GRAY: Rgb = Rgb(128, 128, 128);

const BAR_HEIGHT: f32 = 5.0;
const BAR_OFFSET: f32 = 10.0;

pub fn slot_color(slot: PlayerSlot) -> Rgb {
    match slot {
        PlayerSlot::One => RED,
        PlayerSlot::Two => BLUE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Healthy,
    Wounded,
    Critical,
}

impl HealthBand {
    pub fn from_health(health: i32) -> Self {
        if health > 50 {
            HealthBand::Healthy
        } else if health > 25 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            HealthBand::Healthy => GREEN,
            HealthBand::Wounded => YELLOW,
            HealthBand::Critical => RED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Wounded => "wounded",
            HealthBand::Critical => "critical",
        }
    }
}

/// Health bar drawn just above a player's hitbox, as wide as the hitbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    /// Width of the colored portion, whole pixels.
    pub fill_width: f32,
    pub band: HealthBand,
}

pub fn health_bar(p: &PlayerSnapshot) -> HealthBar {
    let ratio = if p.max_health > 0 {
        p.health as f32 / p.max_health as f32
    } else {
        0.0
    };

    HealthBar {
        x: p.x,
        y: p.y - BAR_OFFSET,
        width: p.width,
        height: BAR_HEIGHT,
        background: GRAY,
        fill_width: (p.width * ratio).floor(),
        band: HealthBand::from_health(p.health),
    }
}

pub fn health_label(p: &PlayerSnapshot) -> String {
    format!("P{} Health: {}", p.slot.number(), p.health)
}

pub fn controls_hint(slot: PlayerSlot) -> &'static str {
    match slot {
        PlayerSlot::One => "P1: WASD + SPACE",
        PlayerSlot::Two => "P2: ARROWS + ENTER",
    }
}

/// Centered end-of-match message and its color, if the match is over.
pub fn banner(state: MatchState) -> Option<(String, Rgb)> {
    match state {
        MatchState::Running => None,
        MatchState::Ended(MatchOutcome::Winner(slot)) => {
            Some((format!("Player {} Wins!", slot.number()), slot_color(slot)))
        }
        MatchState::Ended(MatchOutcome::Draw) => Some(("Draw!".to_string(), BLACK)),
    }
}
