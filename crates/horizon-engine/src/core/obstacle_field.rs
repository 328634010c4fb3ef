use super::{
    FLOOR_ROW, LEFT_COLUMN,
    block::{Block, ColorIndex, Position},
    block_group::BlockGroup,
    piece::Piece,
};

/// Every block frozen so far in the current game.
///
/// The field only grows by absorbing landed pieces and only shrinks through
/// [`ObstacleField::remove_full_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    group: BlockGroup,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    #[must_use]
    pub fn new() -> Self {
        Self {
            group: BlockGroup::filled(Position::new(LEFT_COLUMN, FLOOR_ROW), 0, ColorIndex::DEFAULT),
        }
    }

    #[must_use]
    pub fn group(&self) -> &BlockGroup {
        &self.group
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.group.blocks()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.group.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    /// Freezes a landed piece into the field.
    ///
    /// # Panics
    ///
    /// Panics if `piece` is a ghost.
    pub fn absorb(&mut self, piece: Piece) {
        assert!(!piece.is_ghost(), "ghost pieces are never frozen");
        self.group.absorb(piece.into_group());
    }

    /// Adds loose blocks to the field.
    pub fn absorb_group(&mut self, group: BlockGroup) {
        self.group.absorb(group);
    }

    /// Empties the field for a new game.
    pub fn clear(&mut self) {
        self.group.clear_free_blocks();
    }

    /// Returns the rows in `top..bottom`, ascending, that hold exactly `columns` blocks.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_engine::{BlockGroup, ColorIndex, ObstacleField, Position};
    ///
    /// let mut field = ObstacleField::new();
    /// for column in 0..3 {
    ///     field.absorb_group(BlockGroup::filled(Position::new(column, 5), 1, ColorIndex::DEFAULT));
    /// }
    /// assert_eq!(field.find_full_rows(0, 10, 3), [5]);
    /// assert!(field.find_full_rows(0, 10, 4).is_empty());
    /// ```
    #[must_use]
    pub fn find_full_rows(&self, top: i32, bottom: i32, columns: usize) -> Vec<i32> {
        (top..bottom)
            .filter(|&row| self.blocks().iter().filter(|b| b.row() == row).count() == columns)
            .collect()
    }

    /// Removes each listed row and lets the blocks above it fall by one.
    ///
    /// Rows are handled one at a time in the given order: every block on the row is
    /// deleted, then every remaining block above it moves down one row. A block sitting
    /// above several cleared rows therefore moves once per row. Callers pass the
    /// ascending snapshot returned by [`Self::find_full_rows`].
    pub fn remove_full_rows(&mut self, rows: &[i32]) {
        for &removed in rows {
            self.group.retain_free_blocks(|block| block.row() != removed);
            for block in self.group.free_blocks_mut() {
                if block.row() < removed {
                    block.position.row += 1;
                }
            }
        }
    }
}
