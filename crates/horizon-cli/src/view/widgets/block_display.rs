use horizon_engine::RenderCell;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One board cell, two terminal columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: RenderCell, show_dots: bool) -> Self {
        match cell {
            RenderCell::Empty if show_dots => Self::new(style::EMPTY_DOT, " ."),
            RenderCell::Empty => Self::new(style::EMPTY, ""),
            RenderCell::Ghost => Self::new(style::GHOST, "[]"),
            RenderCell::Block(color) => Self::new(style::block(color), ""),
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph paints the style over the whole area, not just the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use horizon_engine::ShapeKind;

    use super::*;

    #[test]
    fn test_cell_styles() {
        let ghost = BlockDisplay::from_cell(RenderCell::Ghost, true);
        assert_eq!(ghost, BlockDisplay::new(style::GHOST, "[]"));

        let empty = BlockDisplay::from_cell(RenderCell::Empty, false);
        assert_eq!(empty, BlockDisplay::new(style::EMPTY, ""));

        let color = ShapeKind::T.color();
        let block = BlockDisplay::from_cell(RenderCell::Block(color), true);
        assert_eq!(block, BlockDisplay::new(style::block(color), ""));
    }
}
