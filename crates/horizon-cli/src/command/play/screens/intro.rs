use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, style};

use super::{Transition, menu_key};

const TITLE: &[&str] = &[
    r"█  █ █▀▀█ █▀▀█ ▀█▀ ▀▀▀█ █▀▀█ █▀▀▄",
    r"█▀▀█ █  █ █▄▄▀  █   ▄▀  █  █ █  █",
    r"▀  ▀ ▀▀▀▀ ▀ ▀▀ ▀▀▀ ▀▀▀▀ ▀▀▀▀ ▀  ▀",
];

const MENU_KEYS: &[KeyBinding] = &[(&["Enter"], "Start"), (&["Q", "Esc"], "Quit")];

pub const GAME_KEYS: &[KeyBinding] = &[
    (&["←", "A"], "Left"),
    (&["→", "D"], "Right"),
    (&["↑", "W"], "Rotate"),
    (&["↓", "S"], "Soft Drop"),
    (&["Space"], "Hard Drop"),
    (&["Q", "Esc"], "Quit"),
];

#[derive(Debug, Default)]
pub struct IntroScreen {}

impl IntroScreen {
    pub fn new() -> Self {
        Self {}
    }

    pub fn handle_event(&mut self, event: &Event) -> Transition {
        menu_key(event).unwrap_or(Transition::Stay)
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn draw(&self, frame: &mut Frame) {
        let title = Text::from_iter(TITLE.iter().map(|line| Line::styled(*line, style::TITLE)))
            .centered();
        let [title_area, _, controls_area, menu_area] = Layout::vertical([
            Constraint::Length(TITLE.len() as u16),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(frame.area());

        frame.render_widget(title, title_area);
        frame.render_widget(KeyBindingDisplay::new(GAME_KEYS), controls_area);
        let [_, menu_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(menu_area);
        frame.render_widget(KeyBindingDisplay::new(MENU_KEYS), menu_area);
    }
}
