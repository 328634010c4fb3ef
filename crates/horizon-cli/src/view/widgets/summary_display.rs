use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::summary::SessionSummary;

use super::style;

/// Final figures of a finished game, one label/value pair per line.
#[derive(Debug)]
pub struct SummaryDisplay<'a> {
    summary: &'a SessionSummary,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SummaryDisplay<'a> {
    pub fn new(summary: &'a SessionSummary) -> Self {
        Self {
            summary,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn entries(&self) -> Vec<(&'static str, String)> {
        let summary = self.summary;
        let [_, singles, doubles, triples, fours] = summary.clear_counter;
        vec![
            ("SCORE", summary.score.to_string()),
            ("LEVEL", super::level_text(summary.level)),
            ("PIECES", summary.locked_pieces.to_string()),
            ("ROWS", summary.cleared_rows.to_string()),
            (
                "CLEARS",
                format!("{singles} / {doubles} / {triples} / {fours}"),
            ),
            ("SEED", summary.seed.to_string()),
            (
                "FINISHED",
                summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        ]
    }

    pub fn width(&self) -> u16 {
        // label column + widest value (the 32-digit seed)
        12 + 32 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        self.entries().len() as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for SummaryDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let entries = self.entries();
        let row_areas =
            Layout::vertical(entries.iter().map(|_| Constraint::Length(1))).split(area);
        for ((label, value), area) in entries.into_iter().zip(row_areas.iter().copied()) {
            let [label_area, value_area] =
                area.layout(&Layout::horizontal([Constraint::Length(12), Constraint::Fill(1)]));
            Line::styled(label, style::TITLE).render(label_area, buf);
            Line::styled(value, style::DEFAULT)
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
