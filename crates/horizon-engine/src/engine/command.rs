/// Player input understood by [`GameState::apply`](crate::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    /// Moves the piece one row down, locking it if it cannot fall.
    SoftDrop,
    /// Drops the piece to its landing position and locks it at once.
    HardDrop,
    /// Ends the current game.
    Quit,
}
