use serde::Serialize;

use crate::InvalidColorError;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    #[must_use]
    pub const fn offset(self, d_column: i32, d_row: i32) -> Self {
        Self::new(self.column + d_column, self.row + d_row)
    }
}

/// Index into the fixed eight-color palette.
///
/// | index | color   |
/// |-------|---------|
/// | 0     | black   |
/// | 1     | red     |
/// | 2     | green   |
/// | 3     | blue    |
/// | 4     | orange  |
/// | 5     | cyan    |
/// | 6     | magenta |
/// | 7     | yellow  |
///
/// Shape kinds use their own number as color, so every piece color is valid by
/// construction. Raw indices coming from anywhere else go through [`ColorIndex::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Number of palette entries.
    pub const PALETTE_LEN: usize = 8;

    /// Color used by boundaries and groups built without an explicit color.
    pub const DEFAULT: Self = Self(1);

    /// Validates a raw palette index.
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_engine::ColorIndex;
    ///
    /// assert!(ColorIndex::new(7).is_ok());
    /// assert!(ColorIndex::new(8).is_err());
    /// ```
    pub const fn new(index: u8) -> Result<Self, crate::InvalidColorError> {
        if (index as usize) < Self::PALETTE_LEN {
            Ok(Self(index))
        } else {
            Err(InvalidColorError { index })
        }
    }

    pub(crate) const fn new_unchecked(index: u8) -> Self {
        assert!((index as usize) < Self::PALETTE_LEN);
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// A single colored cell owned by a [`BlockGroup`](super::BlockGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub(crate) position: Position,
    color: ColorIndex,
}

impl Block {
    pub fn new(column: i32, row: i32, color: u8) -> Result<Self, InvalidColorError> {
        Ok(Self::with_color(
            Position::new(column, row),
            ColorIndex::new(color)?,
        ))
    }

    #[must_use]
    pub const fn with_color(position: Position, color: ColorIndex) -> Self {
        Self { position, color }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn column(&self) -> i32 {
        self.position.column
    }

    #[must_use]
    pub const fn row(&self) -> i32 {
        self.position.row
    }

    #[must_use]
    pub const fn color(&self) -> ColorIndex {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_bounds() {
        for index in 0..8 {
            assert_eq!(ColorIndex::new(index).unwrap().index(), index);
        }
        assert_eq!(ColorIndex::new(8), Err(InvalidColorError { index: 8 }));
        assert_eq!(ColorIndex::new(255), Err(InvalidColorError { index: 255 }));
    }

    #[test]
    fn test_block_rejects_invalid_color() {
        let block = Block::new(3, 4, 5).unwrap();
        assert_eq!(block.position(), Position::new(3, 4));
        assert_eq!(block.color().index(), 5);

        assert!(Block::new(3, 4, 9).is_err());
    }
}
