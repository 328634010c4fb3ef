use crate::InvalidColorError;

use super::block::{Block, ColorIndex, Position};

/// A positioned collection of blocks sharing one anchor.
///
/// Each of the first `column_offsets().len()` blocks is governed by a `(column, row)` offset
/// pair relative to the anchor:
///
/// ```text
/// blocks[i] == anchor + (column_offsets[i], row_offsets[i])
/// ```
///
/// Every mutation that touches the anchor or the offsets ends with a reprojection that
/// restores this invariant. Blocks taken over with [`BlockGroup::absorb`] are appended
/// after the governed ones and keep their own positions from then on.
///
/// Boundaries, pieces and the obstacle field all compose a `BlockGroup`; the group
/// itself never validates moves, callers test collisions and roll back.
///
/// # Example
///
/// ```
/// use horizon_engine::{BlockGroup, Position};
///
/// let mut a = BlockGroup::with_colors(Position::new(0, 0), &[1, 2]).unwrap();
/// let b = BlockGroup::with_colors(Position::new(0, 0), &[3]).unwrap();
/// assert!(a.collides_with(&b));
///
/// a.move_by(0, 1);
/// assert!(!a.collides_with(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGroup {
    anchor: Position,
    column_offsets: Vec<i32>,
    row_offsets: Vec<i32>,
    blocks: Vec<Block>,
}

impl BlockGroup {
    /// Creates a group with one block per color, all sitting on the anchor.
    pub fn with_colors(anchor: Position, colors: &[u8]) -> Result<Self, InvalidColorError> {
        let colors = colors
            .iter()
            .map(|&c| ColorIndex::new(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_colors(anchor, colors))
    }

    /// Creates a group of `len` blocks sharing one color, all sitting on the anchor.
    #[must_use]
    pub fn filled(anchor: Position, len: usize, color: ColorIndex) -> Self {
        Self::from_colors(anchor, vec![color; len])
    }

    fn from_colors(anchor: Position, colors: Vec<ColorIndex>) -> Self {
        let len = colors.len();
        Self {
            anchor,
            column_offsets: vec![0; len],
            row_offsets: vec![0; len],
            blocks: colors
                .into_iter()
                .map(|color| Block::with_color(anchor, color))
                .collect(),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn column_offsets(&self) -> &[i32] {
        &self.column_offsets
    }

    #[must_use]
    pub fn row_offsets(&self) -> &[i32] {
        &self.row_offsets
    }

    /// Shifts the anchor and reprojects. No collision check is done.
    pub fn move_by(&mut self, d_column: i32, d_row: i32) {
        self.anchor = self.anchor.offset(d_column, d_row);
        self.reproject();
    }

    /// Replaces the offset table and reprojects around the current anchor.
    ///
    /// # Panics
    ///
    /// Panics if the offset slices don't both match the number of governed blocks.
    pub fn set_offsets(&mut self, column_offsets: &[i32], row_offsets: &[i32]) {
        assert_eq!(column_offsets.len(), self.column_offsets.len());
        assert_eq!(row_offsets.len(), self.row_offsets.len());
        self.column_offsets.copy_from_slice(column_offsets);
        self.row_offsets.copy_from_slice(row_offsets);
        self.reproject();
    }

    /// Recomputes governed block positions from anchor and offsets.
    fn reproject(&mut self) {
        let offsets = self.column_offsets.iter().zip(&self.row_offsets);
        for (block, (&dc, &dr)) in self.blocks.iter_mut().zip(offsets) {
            block.position = self.anchor.offset(dc, dr);
        }
    }

    /// Returns `true` if any block of `self` shares a cell with any block of `other`.
    ///
    /// Plain pairwise scan; groups here hold a handful of blocks against a few hundred
    /// at most.
    #[must_use]
    pub fn collides_with(&self, other: &BlockGroup) -> bool {
        self.blocks
            .iter()
            .any(|a| other.blocks.iter().any(|b| a.position == b.position))
    }

    /// Takes over every block of `other`.
    ///
    /// The absorbed blocks keep their current positions and are not reprojected again.
    pub fn absorb(&mut self, other: BlockGroup) {
        self.blocks.extend(other.blocks);
    }

    /// Keeps governed blocks and the free blocks matching `f`.
    pub(crate) fn retain_free_blocks<F>(&mut self, mut f: F)
    where
        F: FnMut(&Block) -> bool,
    {
        let governed = self.column_offsets.len();
        let mut index = 0;
        self.blocks.retain(|block| {
            let keep = index < governed || f(block);
            index += 1;
            keep
        });
    }

    /// Iterates mutably over blocks that are not governed by an offset.
    pub(crate) fn free_blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        let governed = self.column_offsets.len();
        self.blocks.iter_mut().skip(governed)
    }

    /// Removes every block that is not governed by an offset.
    pub(crate) fn clear_free_blocks(&mut self) {
        let governed = self.column_offsets.len();
        self.blocks.truncate(governed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_at(cells: &[(i32, i32)]) -> BlockGroup {
        let mut group = BlockGroup::filled(Position::new(0, 0), 0, ColorIndex::DEFAULT);
        for &(column, row) in cells {
            let single = BlockGroup::filled(Position::new(column, row), 1, ColorIndex::DEFAULT);
            group.absorb(single);
        }
        group
    }

    #[test]
    fn test_new_group_sits_on_anchor() {
        let group = BlockGroup::with_colors(Position::new(4, 9), &[1, 2, 3]).unwrap();
        assert_eq!(group.len(), 3);
        for block in group.blocks() {
            assert_eq!(block.position(), Position::new(4, 9));
        }
        let colors: Vec<_> = group.blocks().iter().map(|b| b.color().index()).collect();
        assert_eq!(colors, [1, 2, 3]);
    }

    #[test]
    fn test_invalid_color_fails_construction() {
        let err = BlockGroup::with_colors(Position::new(0, 0), &[1, 8, 2]).unwrap_err();
        assert_eq!(err, InvalidColorError { index: 8 });
    }

    #[test]
    fn test_move_by_keeps_offset_invariant() {
        let mut group = BlockGroup::filled(Position::new(2, 3), 3, ColorIndex::DEFAULT);
        group.set_offsets(&[0, 1, 2], &[0, 0, -1]);
        group.move_by(-1, 5);

        assert_eq!(group.anchor(), Position::new(1, 8));
        for (i, block) in group.blocks().iter().enumerate() {
            let expected = group
                .anchor()
                .offset(group.column_offsets()[i], group.row_offsets()[i]);
            assert_eq!(block.position(), expected);
        }
    }

    #[test]
    fn test_collides_with_is_symmetric() {
        let groups = [
            group_at(&[(0, 0), (1, 0)]),
            group_at(&[(1, 0), (5, 5)]),
            group_at(&[(2, 2)]),
            group_at(&[]),
        ];
        for a in &groups {
            for b in &groups {
                assert_eq!(a.collides_with(b), b.collides_with(a));
            }
        }
        assert!(groups[0].collides_with(&groups[1]));
        assert!(!groups[0].collides_with(&groups[2]));
        assert!(!groups[3].collides_with(&groups[0]));
    }

    #[test]
    fn test_absorbed_blocks_do_not_follow_anchor() {
        let mut group = BlockGroup::filled(Position::new(0, 0), 1, ColorIndex::DEFAULT);
        group.absorb(group_at(&[(7, 7)]));
        assert_eq!(group.len(), 2);

        group.move_by(1, 1);
        assert_eq!(group.blocks()[0].position(), Position::new(1, 1));
        assert_eq!(group.blocks()[1].position(), Position::new(7, 7));
    }
}
