use serde::Serialize;

/// Number of rows from which a clear counts as a combo.
pub const COMBO_ROWS: usize = 3;

/// Points earned by clearing `rows` rows with one piece.
///
/// - 0 rows: 0 points
/// - 1–2 rows: 100 per row
/// - 3 or more rows: 500, plus 100 per row beyond the third
///
/// ```
/// use horizon_engine::score_for_rows;
///
/// assert_eq!(score_for_rows(2), 200);
/// assert_eq!(score_for_rows(4), 600);
/// ```
#[must_use]
pub const fn score_for_rows(rows: usize) -> usize {
    if rows >= COMBO_ROWS {
        500 + 100 * (rows - COMBO_ROWS)
    } else {
        100 * rows
    }
}

/// Running statistics of a game.
///
/// - **Score**: points from row clears, see [`score_for_rows`]
/// - **Locked pieces**: pieces frozen into the obstacle field
/// - **Cleared rows**: total rows removed
/// - **Clear counter**: histogram of clears by size, the last bucket collecting
///   every clear of four rows or more
///
/// # Example
///
/// ```
/// use horizon_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 600);
/// assert_eq!(stats.cleared_rows(), 4);
/// assert_eq!(stats.clear_counter()[4], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    cleared_rows: usize,
    clear_counter: [usize; 5],
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_rows: 0,
            clear_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    #[must_use]
    pub const fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    /// Clears by size: `[0]` no clear, `[1]` singles, `[2]` doubles, `[3]` triples,
    /// `[4]` four rows or more.
    #[must_use]
    pub const fn clear_counter(&self) -> &[usize; 5] {
        &self.clear_counter
    }

    #[cfg(test)]
    pub(crate) fn with_score(score: usize) -> Self {
        Self {
            score,
            ..Self::new()
        }
    }

    /// Records one locked piece and the rows it cleared; returns the points earned.
    pub fn complete_piece_drop(&mut self, rows: usize) -> usize {
        let points = score_for_rows(rows);
        self.locked_pieces += 1;
        self.cleared_rows += rows;
        self.clear_counter[rows.min(self.clear_counter.len() - 1)] += 1;
        self.score += points;
        points
    }
}
