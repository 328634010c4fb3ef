use horizon_engine::GameState;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, NextPieceDisplay, StatsDisplay, style};

/// Stats, board and next-piece preview side by side.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a GameState,
    tick_rate: f64,
    show_ghost: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a GameState, tick_rate: f64, show_ghost: bool) -> Self {
        Self {
            game,
            tick_rate,
            show_ghost,
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padding = Padding::horizontal(1);
        let border_color = if !self.game.is_running() {
            style::BORDER_GAME_OVER
        } else if self.game.combo() {
            style::BORDER_COMBO
        } else {
            style::BORDER_PLAYING
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(padding)
                .border_style(border_color)
                .style(style::DEFAULT)
        };

        let render_board = self.game.render_board(self.show_ghost);
        let board = BoardDisplay::new(&render_board)
            .block(Block::bordered().border_style(border_color).style(style::DEFAULT));
        let stats = StatsDisplay::new(self.game, self.tick_rate).block(panel("STATS"));
        let next = NextPieceDisplay::new(self.game.next_shape()).block(panel("NEXT"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] = Layout::vertical([Constraint::Length(board.height())]).areas(center_column);
        let [next_area] = Layout::vertical([Constraint::Length(next.height())]).areas(right_column);

        let board_width = board.width();
        stats.render(stats_area, buf);
        board.render(board_area, buf);
        next.render(next_area, buf);

        if !self.game.is_running() {
            let block = Block::new().style(style::GAME_OVER);
            let text = Text::styled("GAME OVER!!", style::GAME_OVER).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
