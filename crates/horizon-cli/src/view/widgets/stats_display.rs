use std::{iter, time::Duration};

use horizon_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

pub struct StatsDisplay<'a> {
    game: &'a GameState,
    tick_rate: f64,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(game: &'a GameState, tick_rate: f64) -> Self {
        Self {
            game,
            tick_rate,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        ROWS.len() as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = &'static dyn Fn(&GameState, f64) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

#[expect(clippy::cast_precision_loss)]
fn elapsed(game: &GameState, tick_rate: f64) -> Duration {
    Duration::try_from_secs_f64(game.tick_counter() as f64 / tick_rate).unwrap_or_default()
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|game, _| game.score().to_string()),
    Row::FullLabel("TIME:"),
    Row::FullValue(&|game, tick_rate| {
        let dur = elapsed(game, tick_rate);
        format!(
            "{:0}:{:0>2}.{:0>2}",
            dur.as_secs() / 60,
            dur.as_secs() % 60,
            dur.subsec_millis() / 10
        )
    }),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|game, _| super::level_text(game.level())),
    Row::LabelValue("ROWS:", &|game, _| game.stats().cleared_rows().to_string()),
    Row::LabelValue("PIECES:", &|game, _| {
        game.stats().locked_pieces().to_string()
    }),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|game, _| {
        game.stats().clear_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|game, _| {
        game.stats().clear_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|game, _| {
        game.stats().clear_counter()[3].to_string()
    }),
    Row::LabelValue("4+ ROWS:", &|game, _| {
        game.stats().clear_counter()[4].to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let row_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), row_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.game, self.tick_rate), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.game, self.tick_rate), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
