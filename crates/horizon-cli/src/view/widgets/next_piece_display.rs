use std::collections::HashSet;

use horizon_engine::{RenderCell, Rotation, ShapeKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::BlockDisplay;

/// Preview of the upcoming shape in its spawn orientation.
#[derive(Debug)]
pub struct NextPieceDisplay<'a> {
    shape: ShapeKind,
    block: Option<BlockWidget<'a>>,
}

/// Bounding box of a shape in spawn orientation, with its occupied cells relative
/// to the box's top-left corner.
fn shape_cells(shape: ShapeKind) -> (u16, u16, HashSet<(u16, u16)>) {
    let (columns, rows) = shape.offsets(Rotation::default());
    let min_column = columns.iter().copied().min().unwrap_or(0);
    let min_row = rows.iter().copied().min().unwrap_or(0);
    let cells: HashSet<_> = columns
        .iter()
        .zip(rows)
        .filter_map(|(&c, &r)| {
            Some((
                u16::try_from(c - min_column).ok()?,
                u16::try_from(r - min_row).ok()?,
            ))
        })
        .collect();
    let width = cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
    let height = cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
    (width, height, cells)
}

impl<'a> NextPieceDisplay<'a> {
    pub fn new(shape: ShapeKind) -> Self {
        Self { shape, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Wide enough for the I piece lying flat.
    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    /// Tall enough for the I piece standing up.
    pub fn height(&self) -> u16 {
        4 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for NextPieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let (width, height, cells) = shape_cells(self.shape);
        let piece_area = area.centered(
            Constraint::Length(width * BlockDisplay::width()),
            Constraint::Length(height * BlockDisplay::height()),
        );
        let horizontal = Layout::horizontal(
            (0..width).map(|_| Constraint::Length(BlockDisplay::width())),
        )
        .flex(Flex::Center);
        let vertical =
            Layout::vertical((0..height).map(|_| Constraint::Length(BlockDisplay::height())));

        let occupied = BlockDisplay::from_cell(RenderCell::Block(self.shape.color()), false);
        let empty = BlockDisplay::from_cell(RenderCell::Empty, false);
        for (y, row) in (0..).zip(piece_area.layout_vec(&vertical)) {
            for (x, cell) in (0..).zip(row.layout_vec(&horizontal)) {
                if cells.contains(&(x, y)) {
                    occupied.render(cell, buf);
                } else {
                    empty.render(cell, buf);
                }
            }
        }
    }
}
