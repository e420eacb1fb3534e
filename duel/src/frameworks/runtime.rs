// Framework bootstrap for the headless duel runtime.

use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::frameworks::config;
use crate::interface_adapters::headless::{InputScript, ScriptedPresentation};
use crate::interface_adapters::keymap::Controls;
use crate::use_cases::{Duel, MatchSettings, MatchSummary, Presentation, match_task};

use std::{io::Result, sync::Arc};
use tokio::sync::Notify;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one match against `presentation` until it closes, the tick limit is hit,
/// or `shutdown` is notified.
pub async fn run<P: Presentation>(
    duel: Duel,
    presentation: &mut P,
    settings: MatchSettings,
    shutdown: Arc<Notify>,
) -> MatchSummary {
    let summary = match_task(duel, presentation, settings, shutdown).await;

    tracing::info!(
        ticks = summary.ticks,
        outcome = ?summary.outcome,
        p1_health = summary.final_update.players[0].health,
        p2_health = summary.final_update.players[1].health,
        "match finished"
    );
    summary
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    // Presentation setup failures are fatal.
    let script = match config::input_script_path() {
        Some(path) => InputScript::load(&path).map_err(|e| {
            tracing::error!(%path, error = %e, "failed to load input script");
            std::io::Error::other(format!("failed to load input script {path}: {e}"))
        })?,
        None => {
            tracing::debug!("no input script configured; using demo script");
            InputScript::demo()
        }
    };
    let mut presentation = ScriptedPresentation::new(script, Controls::default())
        .with_snapshots(config::print_snapshots());

    let settings = MatchSettings {
        tick_interval: config::tick_interval(),
        max_ticks: config::max_ticks(),
    };

    // Ctrl-C stops the loop at the next tick boundary.
    let shutdown = Arc::new(Notify::new());
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.notify_one();
        }
    });

    let duel = Duel::new(
        config::playfield(),
        PlayerTuning::default(),
        ProjectileTuning::default(),
    );
    run(duel, &mut presentation, settings, shutdown).await;
    Ok(())
}
