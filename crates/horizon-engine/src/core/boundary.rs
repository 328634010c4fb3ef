use super::{
    COLUMNS, FLOOR_ROW, LEFT_COLUMN, RIGHT_COLUMN,
    block::{Block, ColorIndex, Position},
    block_group::BlockGroup,
};

/// A static straight line of blocks used only as a collision target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    group: BlockGroup,
}

impl Boundary {
    /// A horizontal line of `len` blocks starting at `(column, row)`.
    #[must_use]
    pub fn floor(column: i32, row: i32, len: usize) -> Self {
        let mut group = BlockGroup::filled(Position::new(column, row), len, ColorIndex::DEFAULT);
        let column_offsets: Vec<i32> = (0..).take(len).collect();
        group.set_offsets(&column_offsets, &vec![0; len]);
        Self { group }
    }

    /// A vertical line of `len` blocks starting at `(column, row)` and going down.
    #[must_use]
    pub fn wall(column: i32, row: i32, len: usize) -> Self {
        let mut group = BlockGroup::filled(Position::new(column, row), len, ColorIndex::DEFAULT);
        let row_offsets: Vec<i32> = (0..).take(len).collect();
        group.set_offsets(&vec![0; len], &row_offsets);
        Self { group }
    }

    #[must_use]
    pub fn group(&self) -> &BlockGroup {
        &self.group
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.group.blocks()
    }
}

/// The floor and both side walls of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    pub floor: Boundary,
    pub left_wall: Boundary,
    pub right_wall: Boundary,
}

impl Default for Boundaries {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundaries {
    /// Builds the fixed board frame.
    ///
    /// The floor spans every playable column at `FLOOR_ROW`; each wall runs from row 0
    /// down to the row just above the floor.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub fn new() -> Self {
        Self {
            floor: Boundary::floor(LEFT_COLUMN, FLOOR_ROW, COLUMNS as usize),
            left_wall: Boundary::wall(LEFT_COLUMN - 1, 0, FLOOR_ROW as usize),
            right_wall: Boundary::wall(RIGHT_COLUMN, 0, FLOOR_ROW as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_is_horizontal_line() {
        let floor = Boundary::floor(2, 10, 4);
        let cells: Vec<_> = floor.blocks().iter().map(Block::position).collect();
        assert_eq!(
            cells,
            [
                Position::new(2, 10),
                Position::new(3, 10),
                Position::new(4, 10),
                Position::new(5, 10),
            ]
        );
    }

    #[test]
    fn test_wall_is_vertical_line() {
        let wall = Boundary::wall(-1, 0, 3);
        let cells: Vec<_> = wall.blocks().iter().map(Block::position).collect();
        assert_eq!(
            cells,
            [Position::new(-1, 0), Position::new(-1, 1), Position::new(-1, 2)]
        );
    }

    #[test]
    fn test_board_frame_layout() {
        let frame = Boundaries::new();
        assert_eq!(frame.floor.blocks().len(), 14);
        assert!(frame.floor.blocks().iter().all(|b| b.row() == FLOOR_ROW));
        assert!(frame.left_wall.blocks().iter().all(|b| b.column() == -1));
        assert!(frame.right_wall.blocks().iter().all(|b| b.column() == 14));

        let lowest_wall_row = frame.left_wall.blocks().iter().map(Block::row).max();
        assert_eq!(lowest_wall_row, Some(FLOOR_ROW - 1));
    }
}
