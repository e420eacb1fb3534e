// Keyboard bindings: physical keys to per-player logical actions.

use crate::domain::{InputSnapshot, PlayerInput, PlayerSlot};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub shoot: Key,
}

impl Keymap {
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self {
                up: Key::W,
                down: Key::S,
                left: Key::A,
                right: Key::D,
                shoot: Key::Space,
            },
            PlayerSlot::Two => Self {
                up: Key::Up,
                down: Key::Down,
                left: Key::Left,
                right: Key::Right,
                shoot: Key::Enter,
            },
        }
    }

    pub fn input_from(&self, pressed: &HashSet<Key>) -> PlayerInput {
        PlayerInput {
            up: pressed.contains(&self.up),
            down: pressed.contains(&self.down),
            left: pressed.contains(&self.left),
            right: pressed.contains(&self.right),
            shoot: pressed.contains(&self.shoot),
        }
    }
}

/// Both players' keymaps sharing one keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub one: Keymap,
    pub two: Keymap,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            one: Keymap::for_slot(PlayerSlot::One),
            two: Keymap::for_slot(PlayerSlot::Two),
        }
    }
}

impl Controls {
    pub fn snapshot_from_keys(&self, pressed: &HashSet<Key>) -> InputSnapshot {
        InputSnapshot {
            one: self.one.input_from(pressed),
            two: self.two.input_from(pressed),
        }
    }
}
