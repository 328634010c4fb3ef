use std::path::{Path, PathBuf};

use anyhow::ensure;
use horizon_engine::{GameState, ShapeSeed};

use crate::{
    summary::{self, SessionSummary},
    tui::Runtime,
};

use self::app::PlayApp;

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Game ticks per second; gravity fires every few hundred ticks
    #[clap(long, default_value_t = 500.0)]
    pub(super) tick_rate: f64,
    /// Maximum screen refreshes per second
    #[clap(long, default_value_t = 60.0)]
    pub(super) frame_rate: f64,
    /// Seed for the shape sequence, as 32 hex digits (random when omitted)
    #[clap(long)]
    pub(super) seed: Option<ShapeSeed>,
    /// Hide the landing preview of the falling piece
    #[clap(long)]
    pub(super) no_ghost: bool,
    /// Append a JSON line describing each finished game to this file
    #[clap(long)]
    pub(super) summary: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            tick_rate: 500.0,
            frame_rate: 60.0,
            seed: None,
            no_ghost: false,
            summary: None,
        }
    }
}

/// Settings shared by every screen of a play session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlayConfig {
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub show_ghost: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        tick_rate,
        frame_rate,
        seed,
        no_ghost,
        summary,
    } = arg;
    ensure!(
        tick_rate.is_finite() && *tick_rate > 0.0,
        "--tick-rate must be a positive number, got {tick_rate}"
    );
    ensure!(
        frame_rate.is_finite() && *frame_rate > 0.0,
        "--frame-rate must be a positive number, got {frame_rate}"
    );

    let game = seed.map_or_else(GameState::new, GameState::with_seed);
    tracing::info!(seed = %game.seed(), tick_rate, frame_rate, "starting play session");

    let config = PlayConfig {
        tick_rate: *tick_rate,
        frame_rate: *frame_rate,
        show_ghost: !no_ghost,
    };
    let mut app = PlayApp::new(game, config);
    let result = Runtime::new().run(&mut app);
    finish_session(result, summary.as_deref(), &app.into_summaries())
}

/// Writes the summaries even if the terminal session failed, then reports the
/// session error first.
fn finish_session(
    result: anyhow::Result<()>,
    path: Option<&Path>,
    summaries: &[SessionSummary],
) -> anyhow::Result<()> {
    let written = match path {
        Some(path) => summary::append_all(path, summaries).map(|()| {
            tracing::info!(games = summaries.len(), path = %path.display(), "summaries written");
        }),
        None => Ok(()),
    };
    if let Err(err) = &result {
        tracing::error!(error = %err, "play session failed");
    }
    result?;
    written
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::anyhow;
    use horizon_engine::Command;

    use super::*;

    #[test]
    fn test_summaries_kept_when_session_fails() {
        let path = std::env::temp_dir().join(format!(
            "horizon-session-test-{}.jsonl",
            std::process::id()
        ));
        _ = fs::remove_file(&path);

        let mut game = GameState::with_seed(ShapeSeed::from_bytes([5; 16]));
        game.apply(Command::Quit);
        let summaries = [SessionSummary::from_finished_game(&game)];

        let result = finish_session(Err(anyhow!("terminal gone")), Some(&path), &summaries);
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap_err().to_string(), "terminal gone");
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_no_summary_path_passes_result_through() {
        assert!(finish_session(Ok(()), None, &[]).is_ok());
        assert!(finish_session(Err(anyhow!("boom")), None, &[]).is_err());
    }
}
