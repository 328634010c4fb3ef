/// Score a player must reach to leave each level, ascending.
///
/// Level `n` covers scores in `LEVEL_THRESHOLDS[n - 1]..LEVEL_THRESHOLDS[n]`; past the
/// last threshold the level stays at `LEVEL_THRESHOLDS.len()`.
pub const LEVEL_THRESHOLDS: [usize; 9] = [500, 1000, 1500, 2000, 2250, 2500, 2750, 3000, 3250];

/// Ticks between two gravity steps, per level, descending.
pub const LEVEL_SPEEDS: [u64; 9] = [300, 250, 200, 175, 150, 125, 112, 100, 90];

/// Highest reachable level.
pub const MAX_LEVEL: usize = LEVEL_THRESHOLDS.len();

/// Returns the level for a score.
///
/// ```
/// use horizon_engine::level_for_score;
///
/// assert_eq!(level_for_score(0), 0);
/// assert_eq!(level_for_score(500), 1);
/// assert_eq!(level_for_score(10_000), 9);
/// ```
#[must_use]
pub fn level_for_score(score: usize) -> usize {
    LEVEL_THRESHOLDS
        .iter()
        .position(|&threshold| score < threshold)
        .unwrap_or(MAX_LEVEL)
}

/// Returns the gravity interval in ticks for a level.
///
/// Levels past the table reuse its last (fastest) entry.
#[must_use]
pub fn speed_for_level(level: usize) -> u64 {
    LEVEL_SPEEDS[level.min(LEVEL_SPEEDS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_score(0), 0);
        assert_eq!(level_for_score(499), 0);
        assert_eq!(level_for_score(500), 1);
        assert_eq!(level_for_score(650), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(2250), 5);
        assert_eq!(level_for_score(3249), 8);
        assert_eq!(level_for_score(3250), 9);
        assert_eq!(level_for_score(usize::MAX), 9);
    }

    #[test]
    fn test_speed_lookup() {
        assert_eq!(speed_for_level(0), 300);
        assert_eq!(speed_for_level(8), 90);
        assert_eq!(speed_for_level(MAX_LEVEL), 90);
        assert_eq!(speed_for_level(100), 90);
    }

    #[test]
    fn test_tables_are_monotonic() {
        assert!(LEVEL_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
        assert!(LEVEL_SPEEDS.windows(2).all(|w| w[0] > w[1]));
    }
}
