use crate::domain::Playfield;
use std::{env, time::Duration};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_TICK_RATE_HZ: u64 = 60;

pub fn tick_rate_hz() -> u64 {
    env::var("DUEL_TICK_RATE_HZ")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(DEFAULT_TICK_RATE_HZ)
}

pub fn tick_interval() -> Duration {
    Duration::from_millis(1000 / tick_rate_hz()).max(Duration::from_millis(1))
}

pub fn playfield() -> Playfield {
    let defaults = Playfield::default();
    Playfield {
        width: positive_f32("DUEL_PLAYFIELD_WIDTH").unwrap_or(defaults.width),
        height: positive_f32("DUEL_PLAYFIELD_HEIGHT").unwrap_or(defaults.height),
    }
}

// 0 runs until the input script ends or the process is interrupted.
pub fn max_ticks() -> u64 {
    env::var("DUEL_MAX_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

pub fn input_script_path() -> Option<String> {
    env::var("DUEL_INPUT_SCRIPT").ok().filter(|v| !v.is_empty())
}

pub fn print_snapshots() -> bool {
    matches!(
        env::var("DUEL_PRINT_SNAPSHOTS").as_deref(),
        Ok("1") | Ok("true")
    )
}

fn positive_f32(key: &str) -> Option<f32> {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
