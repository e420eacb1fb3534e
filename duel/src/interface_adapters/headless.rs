// Headless presentation: replays a keyboard script and reports frames through tracing.

use crate::domain::{InputSnapshot, PlayerSlot};
use crate::interface_adapters::hud;
use crate::interface_adapters::keymap::{Controls, Key};
use crate::interface_adapters::protocol::{InputScriptDto, WorldUpdateDto};
use crate::use_cases::{MatchState, Presentation, WorldUpdate};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::Path;
use tracing::{debug, error, info};

// Log a HUD line roughly once a second at the default tick rate.
const HUD_LOG_EVERY_TICKS: u64 = 60;

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read input script: {e}"),
            ScriptError::Parse(e) => write!(f, "invalid input script: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFrame {
    pub ticks: u32,
    pub pressed: HashSet<Key>,
}

impl ScriptFrame {
    pub fn new(ticks: u32, keys: &[Key]) -> Self {
        Self {
            ticks,
            pressed: keys.iter().copied().collect(),
        }
    }
}

/// Ordered key frames; the match ends when the script runs out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        let dto: InputScriptDto = serde_json::from_str(text)?;
        Ok(Self::from(dto))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Built-in match used when no script is configured: player one strafes and
    /// fires, player two tries to dodge before returning fire.
    pub fn demo() -> Self {
        Self {
            frames: vec![
                ScriptFrame::new(30, &[]),
                ScriptFrame::new(90, &[Key::Space, Key::W, Key::Up]),
                ScriptFrame::new(90, &[Key::Space, Key::S, Key::Down, Key::Left]),
                ScriptFrame::new(120, &[Key::Space, Key::Enter, Key::D]),
                ScriptFrame::new(600, &[Key::Space, Key::Enter]),
                ScriptFrame::new(120, &[]),
            ],
        }
    }

    pub fn total_ticks(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.ticks)).sum()
    }
}

impl From<InputScriptDto> for InputScript {
    fn from(dto: InputScriptDto) -> Self {
        Self {
            frames: dto
                .frames
                .into_iter()
                .map(|frame| ScriptFrame {
                    ticks: frame.ticks,
                    pressed: frame.keys.into_iter().map(Key::from).collect(),
                })
                .collect(),
        }
    }
}

pub struct ScriptedPresentation {
    controls: Controls,
    frames: VecDeque<ScriptFrame>,
    current: Option<ScriptFrame>,
    remaining: u32,
    print_snapshots: bool,
    last_state: MatchState,
    frames_rendered: u64,
}

impl ScriptedPresentation {
    pub fn new(script: InputScript, controls: Controls) -> Self {
        Self {
            controls,
            frames: script.frames.into(),
            current: None,
            remaining: 0,
            print_snapshots: false,
            last_state: MatchState::Running,
            frames_rendered: 0,
        }
    }

    /// Also write every frame to stdout as a JSON line.
    pub fn with_snapshots(mut self, enabled: bool) -> Self {
        self.print_snapshots = enabled;
        self
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn next_pressed(&mut self) -> Option<&HashSet<Key>> {
        while self.remaining == 0 {
            // Zero-length frames are skipped.
            let frame = self.frames.pop_front()?;
            self.remaining = frame.ticks;
            self.current = Some(frame);
        }

        self.remaining -= 1;
        self.current.as_ref().map(|f| &f.pressed)
    }
}

impl Presentation for ScriptedPresentation {
    fn poll_input(&mut self) -> Option<InputSnapshot> {
        let controls = self.controls;
        let pressed = self.next_pressed()?;
        Some(controls.snapshot_from_keys(pressed))
    }

    fn render(&mut self, update: &WorldUpdate) {
        self.frames_rendered += 1;

        if update.state != self.last_state {
            if let Some((text, _color)) = hud::banner(update.state) {
                info!(tick = update.tick, banner = %text, "match result");
            }
            self.last_state = update.state;
        }

        if update.tick % HUD_LOG_EVERY_TICKS == 0 {
            let one = update.player(PlayerSlot::One);
            let two = update.player(PlayerSlot::Two);
            debug!(
                tick = update.tick,
                p1 = %hud::health_label(one),
                p1_band = hud::health_bar(one).band.as_str(),
                p2 = %hud::health_label(two),
                p2_band = hud::health_bar(two).band.as_str(),
                projectiles = update.projectiles.len(),
                "hud"
            );
        }

        if self.print_snapshots {
            match serde_json::to_string(&WorldUpdateDto::from(update)) {
                Ok(line) => println!("{line}"),
                Err(e) => error!(error = ?e, "failed to serialize world update"),
            }
        }
    }
}
