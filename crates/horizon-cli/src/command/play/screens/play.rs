use std::mem;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use horizon_engine::{Command, Cue, GameState, score_for_rows};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Style,
    text::Line,
};

use crate::{
    command::play::PlayConfig,
    view::widgets::{GameDisplay, KeyBindingDisplay, style},
};

use super::{Transition, intro::GAME_KEYS};

/// How long a status message stays up.
const STATUS_SECONDS: f64 = 1.5;

/// Maps a key press to a game command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::MoveRight,
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::RotateClockwise,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Status {
    text: String,
    style: Style,
    expires_at: u64,
}

#[derive(Debug)]
pub struct PlayScreen {
    config: PlayConfig,
    status: Option<Status>,
    bell: bool,
}

impl PlayScreen {
    pub fn new(config: PlayConfig) -> Self {
        Self {
            config,
            status: None,
            bell: false,
        }
    }

    /// Whether a combo asked for the terminal bell since the last call.
    pub fn take_bell(&mut self) -> bool {
        mem::take(&mut self.bell)
    }

    pub fn handle_event(&mut self, game: &mut GameState, event: &Event) -> Transition {
        if let Some(command) = event.as_key_event().and_then(command_for_key) {
            game.apply(command);
            self.show_cues(game.take_cues(), game.tick_counter());
        }
        Self::transition(game)
    }

    pub fn update(&mut self, game: &mut GameState) -> Transition {
        game.tick();
        self.show_cues(game.take_cues(), game.tick_counter());
        if self
            .status
            .as_ref()
            .is_some_and(|status| game.tick_counter() >= status.expires_at)
        {
            self.status = None;
        }
        Self::transition(game)
    }

    fn transition(game: &GameState) -> Transition {
        if game.is_running() {
            Transition::Stay
        } else {
            Transition::Outro
        }
    }

    fn show_cues(&mut self, cues: Vec<Cue>, tick: u64) {
        for cue in cues {
            let (text, style) = match cue {
                Cue::LinesCleared { rows } => {
                    let plural = if rows == 1 { "" } else { "S" };
                    (
                        format!("{rows} ROW{plural}  +{}", score_for_rows(rows)),
                        style::STATUS,
                    )
                }
                Cue::ComboCleared { rows } => {
                    self.bell = true;
                    (
                        format!("COMBO! {rows} ROWS  +{}", score_for_rows(rows)),
                        style::COMBO,
                    )
                }
                Cue::PieceLocked { .. } | Cue::Rotated => continue,
            };
            self.status = Some(Status {
                text,
                style,
                expires_at: tick + self.status_ticks(),
            });
        }
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn status_ticks(&self) -> u64 {
        (self.config.tick_rate * STATUS_SECONDS).ceil() as u64
    }

    pub fn draw(&self, game: &GameState, frame: &mut Frame) {
        let display = GameDisplay::new(game, self.config.tick_rate, self.config.show_ghost);
        let [status_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(26),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());

        if let Some(status) = &self.status {
            let line = Line::styled(status.text.as_str(), status.style).centered();
            frame.render_widget(line, status_area);
        }
        frame.render_widget(display, main_area);
        frame.render_widget(KeyBindingDisplay::new(GAME_KEYS), help_area);
    }
}
