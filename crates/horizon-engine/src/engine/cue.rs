/// Something a front end may want to react to (a sound, a flash, a status line).
///
/// Cues are purely observational: the game state never reads them back. They pile up
/// in [`GameState`](crate::GameState) until drained with
/// [`GameState::take_cues`](crate::GameState::take_cues).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cue {
    /// The active piece was frozen into the obstacle field.
    PieceLocked { hard_drop: bool },
    /// The active piece rotated.
    Rotated,
    /// One or two rows were removed.
    LinesCleared { rows: usize },
    /// Three or more rows were removed at once.
    ComboCleared { rows: usize },
}
