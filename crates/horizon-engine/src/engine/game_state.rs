use std::mem;

use crate::core::{
    Boundaries, Boundary, COLUMNS, FLOOR_ROW, ObstacleField, Piece, RenderBoard, RenderCell,
    ShapeKind, TOP_ROW,
};

use super::{
    COMBO_ROWS, Command, Cue, GameStats, ShapeGenerator, ShapeSeed, level_for_score,
    speed_for_level,
};

/// The game controller.
///
/// Owns the board frame, the obstacle field, the active piece and everything that
/// changes while playing. It advances through two entry points only:
///
/// - [`Self::tick`] runs one step of the clock (gravity, level, ghost)
/// - [`Self::apply`] runs one player command
///
/// Both are ignored once the game is over. Every move is speculative: it is applied
/// to the active piece, tested for collisions and rolled back if anything overlaps.
///
/// # Example
///
/// ```
/// use horizon_engine::{Command, Cue, GameState};
///
/// let mut game = GameState::new();
/// assert!(game.apply(Command::HardDrop));
///
/// let cues = game.take_cues();
/// assert_eq!(cues, [Cue::PieceLocked { hard_drop: true }]);
/// assert!(game.take_cues().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    boundaries: Boundaries,
    obstacles: ObstacleField,
    active_piece: Piece,
    ghost: Piece,
    next_shape: ShapeKind,
    generator: ShapeGenerator,
    stats: GameStats,
    level: usize,
    combo: bool,
    is_running: bool,
    tick_counter: u64,
    cues: Vec<Cue>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(ShapeGenerator::new())
    }

    /// Creates a game whose shape sequence is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self::with_generator(ShapeGenerator::with_seed(seed))
    }

    fn with_generator(mut generator: ShapeGenerator) -> Self {
        let active_piece = Piece::spawn(generator.next_shape());
        let next_shape = generator.next_shape();
        let mut game = Self {
            boundaries: Boundaries::new(),
            obstacles: ObstacleField::new(),
            ghost: active_piece.ghost(),
            active_piece,
            next_shape,
            generator,
            stats: GameStats::new(),
            level: 0,
            combo: false,
            is_running: true,
            tick_counter: 0,
            cues: Vec::new(),
        };
        game.rebuild_ghost();
        tracing::debug!(seed = %game.generator.seed(), "new game");
        game
    }

    /// Starts a new game, drawing further shapes from the same generator.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.stats = GameStats::new();
        self.level = 0;
        self.combo = false;
        self.is_running = true;
        self.tick_counter = 0;
        self.cues.clear();
        self.active_piece = Piece::spawn(self.generator.next_shape());
        self.next_shape = self.generator.next_shape();
        self.rebuild_ghost();
        tracing::debug!("game reset");
    }

    #[must_use]
    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    #[must_use]
    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        &self.active_piece
    }

    /// Where the active piece would land if hard-dropped now.
    #[must_use]
    pub fn ghost(&self) -> &Piece {
        &self.ghost
    }

    #[must_use]
    pub fn next_shape(&self) -> ShapeKind {
        self.next_shape
    }

    #[must_use]
    pub fn seed(&self) -> ShapeSeed {
        self.generator.seed()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether a clear of [`COMBO_ROWS`] or more happened since the last tick began.
    #[must_use]
    pub fn combo(&self) -> bool {
        self.combo
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[must_use]
    pub fn tick_counter(&self) -> u64 {
        self.tick_counter
    }

    /// Ticks between two gravity steps at the current level.
    #[must_use]
    pub fn gravity_interval(&self) -> u64 {
        speed_for_level(self.level)
    }

    /// Returns and forgets every cue raised since the previous call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        mem::take(&mut self.cues)
    }

    /// Composes the visible board: obstacles, then the ghost (if requested), then the
    /// active piece on top.
    ///
    /// Once the game is over only the obstacles are painted.
    #[must_use]
    pub fn render_board(&self, with_ghost: bool) -> RenderBoard {
        let mut board = RenderBoard::EMPTY;
        board.fill_group(self.obstacles.group());
        if !self.is_running {
            return board;
        }
        if with_ghost {
            board.fill_group_as(self.ghost.group(), RenderCell::Ghost);
        }
        board.fill_group(self.active_piece.group());
        board
    }

    /// Advances the clock by one tick.
    ///
    /// In order: the combo flag is cleared, gravity runs if due, the level is
    /// recomputed, the ghost is rebuilt and the counter moves on.
    pub fn tick(&mut self) {
        if !self.is_running {
            return;
        }
        self.combo = false;
        if self.tick_counter % self.gravity_interval() == 0 {
            self.apply_gravity();
        }
        self.update_level();
        self.rebuild_ghost();
        self.tick_counter += 1;
    }

    /// Runs one player command.
    ///
    /// Returns `false` if the command was rolled back or the game is already over.
    /// A soft drop that locks the piece in place counts as rolled back.
    pub fn apply(&mut self, command: Command) -> bool {
        if !self.is_running {
            return false;
        }
        let applied = match command {
            Command::MoveLeft => self.try_move_left(),
            Command::MoveRight => self.try_move_right(),
            Command::RotateClockwise => self.try_rotate_clockwise(),
            Command::SoftDrop => self.try_soft_drop(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Quit => {
                self.end_game("quit");
                true
            }
        };
        if self.is_running {
            self.rebuild_ghost();
        }
        applied
    }

    fn try_move_left(&mut self) -> bool {
        self.active_piece.move_left();
        if self.overlaps(&self.boundaries.left_wall) || self.overlaps_obstacles() {
            self.active_piece.move_right();
            return false;
        }
        true
    }

    fn try_move_right(&mut self) -> bool {
        self.active_piece.move_right();
        if self.overlaps(&self.boundaries.right_wall) || self.overlaps_obstacles() {
            self.active_piece.move_left();
            return false;
        }
        true
    }

    fn try_rotate_clockwise(&mut self) -> bool {
        self.active_piece.rotate_clockwise();
        if self.overlaps(&self.boundaries.left_wall)
            || self.overlaps(&self.boundaries.right_wall)
            || self.overlaps(&self.boundaries.floor)
            || self.overlaps_obstacles()
        {
            self.active_piece.rotate_counterclockwise();
            return false;
        }
        self.cues.push(Cue::Rotated);
        true
    }

    fn try_soft_drop(&mut self) -> bool {
        self.active_piece.move_down();
        if landed(&self.active_piece, &self.boundaries.floor, &self.obstacles) {
            self.active_piece.move_up();
            self.lock_active_piece(false);
            return false;
        }
        true
    }

    fn hard_drop(&mut self) {
        drop_to_rest(&mut self.active_piece, &self.boundaries.floor, &self.obstacles);
        self.lock_active_piece(true);
    }

    fn apply_gravity(&mut self) {
        self.active_piece.move_down();
        if landed(&self.active_piece, &self.boundaries.floor, &self.obstacles) {
            self.active_piece.move_up();
            self.lock_active_piece(false);
        }
    }

    /// Freezes the active piece, clears rows, scores and brings in the next piece.
    fn lock_active_piece(&mut self, hard_drop: bool) {
        let locked = self.active_piece.clone();
        let anchor = locked.anchor();
        tracing::debug!(
            kind = ?locked.kind(),
            column = anchor.column,
            row = anchor.row,
            hard_drop,
            "piece locked"
        );
        self.obstacles.absorb(locked);
        self.cues.push(Cue::PieceLocked { hard_drop });

        #[expect(clippy::cast_sign_loss)]
        let full_rows = self
            .obstacles
            .find_full_rows(TOP_ROW, FLOOR_ROW, COLUMNS as usize);
        self.obstacles.remove_full_rows(&full_rows);

        let rows = full_rows.len();
        let points = self.stats.complete_piece_drop(rows);
        if rows >= COMBO_ROWS {
            self.combo = true;
            self.cues.push(Cue::ComboCleared { rows });
        } else if rows > 0 {
            self.cues.push(Cue::LinesCleared { rows });
        }
        if rows > 0 {
            tracing::info!(rows, points, score = self.stats.score(), "rows cleared");
        }
        self.update_level();

        // A piece frozen on the top row ends the game without spawning; the active
        // piece is left where it locked.
        if anchor.row <= TOP_ROW {
            self.end_game("stack reached the top");
            return;
        }
        self.active_piece = Piece::spawn(self.next_shape);
        self.next_shape = self.generator.next_shape();
        if self.overlaps_obstacles() {
            self.end_game("no room to spawn");
        }
    }

    fn update_level(&mut self) {
        let level = level_for_score(self.stats.score());
        if level != self.level {
            tracing::info!(from = self.level, to = level, "level changed");
            self.level = level;
        }
    }

    fn rebuild_ghost(&mut self) {
        let mut ghost = self.active_piece.ghost();
        drop_to_rest(&mut ghost, &self.boundaries.floor, &self.obstacles);
        self.ghost = ghost;
    }

    fn end_game(&mut self, reason: &str) {
        self.is_running = false;
        tracing::info!(
            reason,
            score = self.stats.score(),
            level = self.level,
            locked_pieces = self.stats.locked_pieces(),
            "game over"
        );
    }

    fn overlaps(&self, boundary: &Boundary) -> bool {
        self.active_piece.group().collides_with(boundary.group())
    }

    fn overlaps_obstacles(&self) -> bool {
        self.active_piece
            .group()
            .collides_with(self.obstacles.group())
    }
}

fn landed(piece: &Piece, floor: &Boundary, obstacles: &ObstacleField) -> bool {
    piece.group().collides_with(floor.group()) || piece.group().collides_with(obstacles.group())
}

/// Moves `piece` down until the next step would collide.
fn drop_to_rest(piece: &mut Piece, floor: &Boundary, obstacles: &ObstacleField) {
    loop {
        piece.move_down();
        if landed(piece, floor, obstacles) {
            piece.move_up();
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::{BlockGroup, ColorIndex, Position, Rotation};

    fn game() -> GameState {
        GameState::with_seed(ShapeSeed::from_bytes([42; 16]))
    }

    fn place(game: &mut GameState, column: i32, row: i32) {
        game.obstacles.absorb_group(BlockGroup::filled(
            Position::new(column, row),
            1,
            ColorIndex::DEFAULT,
        ));
    }

    fn fill_row_except(game: &mut GameState, row: i32, gap: std::ops::Range<i32>) {
        for column in 0..COLUMNS {
            if !gap.contains(&column) {
                place(game, column, row);
            }
        }
    }

    fn set_piece(game: &mut GameState, kind: ShapeKind, column: i32, row: i32, rotation: u8) {
        game.active_piece = Piece::new(
            kind,
            Position::new(column, row),
            Rotation::ALL[usize::from(rotation)],
        );
        game.rebuild_ghost();
    }

    #[test]
    fn test_single_row_from_zero() {
        let mut game = game();
        fill_row_except(&mut game, 24, 10..14);
        set_piece(&mut game, ShapeKind::I, 12, 10, 1);

        assert!(game.apply(Command::HardDrop));
        assert_eq!(game.score(), 100);
        assert_eq!(game.level(), 0);
        assert!(!game.combo());
        assert!(game.obstacles().is_empty());
        assert_eq!(
            game.take_cues(),
            [
                Cue::PieceLocked { hard_drop: true },
                Cue::LinesCleared { rows: 1 }
            ]
        );
    }

    #[test]
    fn test_double_crosses_first_threshold() {
        let mut game = game();
        game.stats = GameStats::with_score(450);
        fill_row_except(&mut game, 23, 0..2);
        fill_row_except(&mut game, 24, 0..2);
        set_piece(&mut game, ShapeKind::O, 1, 10, 0);

        game.apply(Command::HardDrop);
        assert_eq!(game.score(), 650);
        assert_eq!(game.level(), 1);
        assert_eq!(game.gravity_interval(), 250);
        assert!(game.is_running());
    }

    #[test]
    fn test_four_rows_set_combo_until_next_tick() {
        let mut game = game();
        for row in 21..25 {
            fill_row_except(&mut game, row, 0..1);
        }
        set_piece(&mut game, ShapeKind::I, 0, 5, 0);

        game.apply(Command::HardDrop);
        assert_eq!(game.score(), 600);
        assert!(game.combo());
        assert!(game.obstacles().is_empty());
        assert!(game.take_cues().contains(&Cue::ComboCleared { rows: 4 }));
        assert_eq!(game.stats().clear_counter()[4], 1);

        game.tick();
        assert!(!game.combo());
    }

    #[test]
    fn test_partial_rows_shift_down() {
        let mut game = game();
        fill_row_except(&mut game, 24, 10..14);
        place(&mut game, 3, 23);
        set_piece(&mut game, ShapeKind::I, 12, 10, 1);

        game.apply(Command::HardDrop);
        let cells: Vec<_> = game
            .obstacles()
            .blocks()
            .iter()
            .map(|b| (b.column(), b.row()))
            .collect();
        assert_eq!(cells, [(3, 24)]);
    }

    #[test]
    fn test_cannot_move_left_past_column_zero() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::I, 0, 10, 0);
        let before = game.active_piece().clone();

        assert!(!game.apply(Command::MoveLeft));
        assert_eq!(game.active_piece(), &before);

        assert!(game.apply(Command::MoveRight));
        assert_eq!(game.active_piece().anchor(), Position::new(1, 10));
    }

    #[test]
    fn test_cannot_move_right_past_last_column() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::I, 13, 10, 0);
        assert!(!game.apply(Command::MoveRight));
        assert_eq!(game.active_piece().anchor(), Position::new(13, 10));
    }

    #[test]
    fn test_moves_blocked_by_obstacles() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::I, 5, 10, 0);
        place(&mut game, 4, 11);
        place(&mut game, 6, 8);

        assert!(!game.apply(Command::MoveLeft));
        assert!(!game.apply(Command::MoveRight));
        assert_eq!(game.active_piece().anchor(), Position::new(5, 10));
    }

    #[test]
    fn test_rotation_rolls_back_at_wall() {
        let mut game = game();
        // Vertical I against the left wall; rotating lays it across columns -2..=1.
        set_piece(&mut game, ShapeKind::I, 0, 10, 0);

        assert!(!game.apply(Command::RotateClockwise));
        assert_eq!(game.active_piece().rotation(), Rotation::ALL[0]);
        assert!(game.take_cues().is_empty());
    }

    #[test]
    fn test_rotation_rolls_back_at_floor() {
        let mut game = game();
        // Horizontal I resting on the floor; the next (vertical) state reaches row 25.
        set_piece(&mut game, ShapeKind::I, 5, 24, 2);

        assert!(!game.apply(Command::RotateClockwise));
        assert_eq!(game.active_piece().rotation(), Rotation::ALL[2]);
    }

    #[test]
    fn test_rotation_emits_cue() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::T, 5, 10, 0);

        assert!(game.apply(Command::RotateClockwise));
        assert_eq!(game.active_piece().rotation(), Rotation::ALL[1]);
        assert_eq!(game.take_cues(), [Cue::Rotated]);
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::O, 5, 23, 0);

        assert!(game.apply(Command::SoftDrop));
        assert_eq!(game.active_piece().anchor(), Position::new(5, 24));
        assert!(game.take_cues().is_empty());

        assert!(!game.apply(Command::SoftDrop));
        assert_eq!(game.obstacles().len(), 4);
        assert_eq!(game.stats().locked_pieces(), 1);
        assert_eq!(game.active_piece().anchor(), Piece::SPAWN_POSITION);
        assert_eq!(game.take_cues(), [Cue::PieceLocked { hard_drop: false }]);
    }

    #[test]
    fn test_hard_drop_lands_on_obstacles() {
        let mut game = game();
        place(&mut game, 5, 20);
        set_piece(&mut game, ShapeKind::I, 5, 5, 0);

        game.apply(Command::HardDrop);
        let mut rows: Vec<_> = game
            .obstacles()
            .blocks()
            .iter()
            .filter(|b| b.column() == 5)
            .map(|b| b.row())
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, [16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_ghost_tracks_landing_position() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::O, 5, 3, 0);
        assert_eq!(game.ghost().anchor(), Position::new(5, 24));
        assert!(game.ghost().is_ghost());

        place(&mut game, 0, 24);
        game.apply(Command::MoveLeft);
        game.apply(Command::MoveLeft);
        game.apply(Command::MoveLeft);
        game.apply(Command::MoveLeft);
        assert_eq!(game.active_piece().anchor(), Position::new(1, 3));
        assert_eq!(game.ghost().anchor(), Position::new(1, 23));
    }

    #[test]
    fn test_gravity_follows_level_speed() {
        let mut game = game();
        let start = game.active_piece().anchor();

        game.tick();
        assert_eq!(game.active_piece().anchor(), start.offset(0, 1));
        for _ in 1..300 {
            game.tick();
        }
        assert_eq!(game.active_piece().anchor(), start.offset(0, 1));
        assert_eq!(game.tick_counter(), 300);

        game.tick();
        assert_eq!(game.active_piece().anchor(), start.offset(0, 2));
    }

    #[test]
    fn test_gravity_locks_and_clears() {
        let mut game = game();
        fill_row_except(&mut game, 24, 10..14);
        set_piece(&mut game, ShapeKind::I, 12, 24, 1);
        let next = game.next_shape();

        game.tick();
        assert_eq!(game.score(), 100);
        assert_eq!(game.stats().locked_pieces(), 1);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.active_piece().kind(), next);
        assert_eq!(game.active_piece().anchor(), Piece::SPAWN_POSITION);
        assert_eq!(
            game.take_cues(),
            [
                Cue::PieceLocked { hard_drop: false },
                Cue::LinesCleared { rows: 1 }
            ]
        );
        assert!(game.is_running());
    }

    #[test]
    fn test_gravity_speeds_up_with_level() {
        let mut game = game();
        game.stats = GameStats::with_score(600);
        let start = game.active_piece().anchor();

        game.tick();
        assert_eq!(game.level(), 1);
        assert_eq!(game.gravity_interval(), 250);
        assert_eq!(game.active_piece().anchor(), start.offset(0, 1));
        for _ in 1..250 {
            game.tick();
        }
        assert_eq!(game.active_piece().anchor(), start.offset(0, 1));

        game.tick();
        assert_eq!(game.active_piece().anchor(), start.offset(0, 2));
    }

    #[test]
    fn test_lock_at_top_ends_game() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::O, 7, TOP_ROW, 0);
        place(&mut game, 7, TOP_ROW + 1);
        let next = game.next_shape();

        game.apply(Command::HardDrop);
        assert!(!game.is_running());

        // Nothing spawned: the locked piece stays active and the preview is unchanged.
        assert_eq!(game.active_piece().kind(), ShapeKind::O);
        assert_eq!(game.active_piece().anchor(), Position::new(7, TOP_ROW));
        assert_eq!(game.next_shape(), next);
        let board = game.render_board(true);
        assert_eq!(
            board.cell(7, TOP_ROW),
            Some(RenderCell::Block(ShapeKind::O.color()))
        );

        let ticks = game.tick_counter();
        game.tick();
        assert_eq!(game.tick_counter(), ticks);
        assert!(!game.apply(Command::MoveLeft));
        assert!(!game.apply(Command::HardDrop));
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut game = game();
        place(&mut game, Piece::SPAWN_POSITION.column, Piece::SPAWN_POSITION.row);
        set_piece(&mut game, ShapeKind::I, 0, 10, 0);

        game.apply(Command::HardDrop);
        assert!(!game.is_running());

        // The piece that failed to spawn is not drawn.
        let board = game.render_board(true);
        let mut obstacles_only = RenderBoard::EMPTY;
        obstacles_only.fill_group(game.obstacles().group());
        assert_eq!(board, obstacles_only);
    }

    #[test]
    fn test_quit_ends_game() {
        let mut game = game();
        assert!(game.apply(Command::Quit));
        assert!(!game.is_running());
    }

    #[test]
    fn test_no_ghost_after_game_over() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::O, 7, TOP_ROW, 0);
        place(&mut game, 7, TOP_ROW + 1);

        game.apply(Command::HardDrop);
        assert!(!game.is_running());
        let board = game.render_board(true);
        for row in TOP_ROW..FLOOR_ROW {
            for column in 0..COLUMNS {
                assert_ne!(board.cell(column, row), Some(RenderCell::Ghost));
            }
        }
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = game();
        game.stats = GameStats::with_score(1200);
        game.apply(Command::HardDrop);
        game.apply(Command::Quit);
        game.tick();

        game.reset();
        assert!(game.is_running());
        assert!(game.obstacles().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 0);
        assert_eq!(game.tick_counter(), 0);
        assert_eq!(game.active_piece().anchor(), Piece::SPAWN_POSITION);
        assert!(game.take_cues().is_empty());
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = game();
        let mut b = game();
        for _ in 0..10 {
            assert_eq!(a.active_piece().kind(), b.active_piece().kind());
            assert_eq!(a.next_shape(), b.next_shape());
            a.apply(Command::HardDrop);
            b.apply(Command::HardDrop);
        }
    }

    #[test]
    fn test_render_board_layers() {
        let mut game = game();
        set_piece(&mut game, ShapeKind::O, 5, 10, 0);

        let board = game.render_board(true);
        let color = ShapeKind::O.color();
        assert_eq!(board.cell(5, 10), Some(RenderCell::Block(color)));
        assert_eq!(board.cell(5, 24), Some(RenderCell::Ghost));

        let board = game.render_board(false);
        assert_eq!(board.cell(5, 24), Some(RenderCell::Empty));
    }
}
