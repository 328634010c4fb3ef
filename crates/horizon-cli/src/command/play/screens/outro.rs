use crossterm::event::Event;
use horizon_engine::GameState;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::{Block, Padding},
};

use crate::{
    command::play::PlayConfig,
    summary::SessionSummary,
    view::widgets::{GameDisplay, KeyBinding, KeyBindingDisplay, SummaryDisplay, style},
};

use super::{Transition, menu_key};

const MENU_KEYS: &[KeyBinding] = &[(&["Enter"], "Play Again"), (&["Q", "Esc"], "Quit")];

/// Final board and summary of the game that just ended.
#[derive(Debug)]
pub struct OutroScreen {
    config: PlayConfig,
    summary: SessionSummary,
}

impl OutroScreen {
    pub fn new(config: PlayConfig, summary: SessionSummary) -> Self {
        Self { config, summary }
    }

    pub fn handle_event(&mut self, game: &mut GameState, event: &Event) -> Transition {
        let transition = menu_key(event).unwrap_or(Transition::Stay);
        if transition.is_play() {
            game.reset();
        }
        transition
    }

    pub fn draw(&self, game: &GameState, frame: &mut Frame) {
        let summary = SummaryDisplay::new(&self.summary).block(
            Block::bordered()
                .title(Line::from("SUMMARY").centered())
                .padding(Padding::horizontal(1))
                .border_style(style::BORDER_GAME_OVER)
                .style(style::DEFAULT),
        );
        let [game_area, summary_area, menu_area] = Layout::vertical([
            Constraint::Length(26),
            Constraint::Length(summary.height()),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [summary_area] = Layout::horizontal([Constraint::Length(summary.width())])
            .flex(Flex::Center)
            .areas(summary_area);

        frame.render_widget(
            GameDisplay::new(game, self.config.tick_rate, self.config.show_ghost),
            game_area,
        );
        frame.render_widget(summary, summary_area);
        frame.render_widget(KeyBindingDisplay::new(MENU_KEYS), menu_area);
    }
}
