use super::{
    COLUMNS, FLOOR_ROW, LEFT_COLUMN, ROWS, TOP_ROW,
    block::{Block, ColorIndex},
    block_group::BlockGroup,
};

#[expect(clippy::cast_sign_loss)]
const WIDTH: usize = COLUMNS as usize;
#[expect(clippy::cast_sign_loss)]
const HEIGHT: usize = ROWS as usize;

/// A single visible cell, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderCell {
    /// Nothing here.
    #[default]
    Empty,
    /// Landing preview of the active piece.
    Ghost,
    /// A solid block of the given color.
    Block(ColorIndex),
}

impl RenderCell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == RenderCell::Empty
    }
}

/// Cell-by-cell snapshot of the visible board.
///
/// Built from block groups for drawing: blocks outside the visible rectangle
/// (the spawn buffer above `TOP_ROW`, boundaries) are skipped. Later fills
/// overwrite earlier ones, so callers paint the ghost before the active piece.
///
/// # Example
///
/// ```
/// use horizon_engine::{Piece, RenderBoard, RenderCell, ShapeKind};
///
/// let mut board = RenderBoard::EMPTY;
/// let mut piece = Piece::spawn(ShapeKind::O);
/// piece.move_down();
/// board.fill_group(piece.group());
///
/// let filled = board.rows().flatten().filter(|c| !c.is_empty()).count();
/// assert_eq!(filled, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBoard {
    rows: [[RenderCell; WIDTH]; HEIGHT],
}

impl RenderBoard {
    pub const WIDTH: usize = WIDTH;
    pub const HEIGHT: usize = HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [[RenderCell::Empty; WIDTH]; HEIGHT],
    };

    /// Iterates over visible rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[RenderCell; WIDTH]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn cell(&self, column: i32, row: i32) -> Option<RenderCell> {
        let (x, y) = Self::index(column, row)?;
        Some(self.rows[y][x])
    }

    /// Paints every visible block of `group` with its own color.
    pub fn fill_group(&mut self, group: &BlockGroup) {
        for block in group.blocks() {
            self.fill_block_as(block, RenderCell::Block(block.color()));
        }
    }

    /// Paints every visible block of `group` with a fixed cell.
    pub fn fill_group_as(&mut self, group: &BlockGroup, cell: RenderCell) {
        for block in group.blocks() {
            self.fill_block_as(block, cell);
        }
    }

    fn fill_block_as(&mut self, block: &Block, cell: RenderCell) {
        if let Some((x, y)) = Self::index(block.column(), block.row()) {
            self.rows[y][x] = cell;
        }
    }

    fn index(column: i32, row: i32) -> Option<(usize, usize)> {
        if !(LEFT_COLUMN..LEFT_COLUMN + COLUMNS).contains(&column)
            || !(TOP_ROW..FLOOR_ROW).contains(&row)
        {
            return None;
        }
        let x = usize::try_from(column - LEFT_COLUMN).ok()?;
        let y = usize::try_from(row - TOP_ROW).ok()?;
        Some((x, y))
    }
}
