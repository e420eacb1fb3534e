// Shared fixtures for driving matches in integration tests.
#![allow(dead_code)]

use duel::domain::tuning::player::PlayerTuning;
use duel::domain::tuning::projectile::ProjectileTuning;
use duel::domain::{InputSnapshot, Playfield, PlayerInput};
use duel::use_cases::{Duel, Presentation, WorldUpdate};
use std::collections::VecDeque;

// Default 1000x600 match with both players at their spawn points.
pub fn default_duel() -> Duel {
    Duel::new(
        Playfield::default(),
        PlayerTuning::default(),
        ProjectileTuning::default(),
    )
}

pub fn one_shoots() -> InputSnapshot {
    InputSnapshot {
        one: PlayerInput {
            shoot: true,
            ..PlayerInput::default()
        },
        two: PlayerInput::default(),
    }
}

pub fn one_moves_right() -> InputSnapshot {
    InputSnapshot {
        one: PlayerInput {
            right: true,
            ..PlayerInput::default()
        },
        two: PlayerInput::default(),
    }
}

// Presentation double: replays queued inputs (or idles forever) and keeps every
// rendered update for assertions.
pub struct RecordingPresentation {
    inputs: VecDeque<InputSnapshot>,
    endless: bool,
    pub rendered: Vec<WorldUpdate>,
}

impl RecordingPresentation {
    pub fn scripted(inputs: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            endless: false,
            rendered: Vec::new(),
        }
    }

    pub fn endless_idle() -> Self {
        Self {
            inputs: VecDeque::new(),
            endless: true,
            rendered: Vec::new(),
        }
    }
}

impl Presentation for RecordingPresentation {
    fn poll_input(&mut self) -> Option<InputSnapshot> {
        match self.inputs.pop_front() {
            Some(input) => Some(input),
            None if self.endless => Some(InputSnapshot::default()),
            None => None,
        }
    }

    fn render(&mut self, update: &WorldUpdate) {
        self.rendered.push(update.clone());
    }
}
