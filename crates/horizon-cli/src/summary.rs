use std::{
    fs::OpenOptions,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use horizon_engine::{GameState, ShapeSeed};
use serde::Serialize;

/// End-of-game report shown on the outro screen and optionally appended to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: ShapeSeed,
    pub score: usize,
    pub level: usize,
    pub locked_pieces: usize,
    pub cleared_rows: usize,
    pub clear_counter: [usize; 5],
    pub ticks: u64,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn new(game: &GameState, finished_at: DateTime<Utc>) -> Self {
        let stats = game.stats();
        Self {
            seed: game.seed(),
            score: stats.score(),
            level: game.level(),
            locked_pieces: stats.locked_pieces(),
            cleared_rows: stats.cleared_rows(),
            clear_counter: *stats.clear_counter(),
            ticks: game.tick_counter(),
            finished_at,
        }
    }

    pub fn from_finished_game(game: &GameState) -> Self {
        Self::new(game, Utc::now())
    }
}

/// Appends one JSON line per summary to `path`, creating the file if needed.
pub fn append_all(path: &Path, summaries: &[SessionSummary]) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open summary file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for summary in summaries {
        serde_json::to_writer(&mut writer, summary)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        writeln!(writer)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    Ok(())
}
