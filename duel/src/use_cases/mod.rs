// Use cases layer: match orchestration around the simulation core.

pub mod game;
pub mod ports;
pub mod types;

pub use game::{Duel, MatchSettings, MatchSummary, match_task};
pub use ports::Presentation;
pub use types::{MatchOutcome, MatchState, TickReport, WorldUpdate};
