use crossterm::event::Event;
use horizon_engine::GameState;
use ratatui::Frame;

use crate::{
    summary::SessionSummary,
    tui::{App, Runtime},
};

use super::{
    PlayConfig,
    screens::{IntroScreen, OutroScreen, PlayScreen, Screen, Transition},
};

/// Intro, play and outro screens around a single [`GameState`].
#[derive(Debug)]
pub struct PlayApp {
    game: GameState,
    config: PlayConfig,
    screen: Screen,
    summaries: Vec<SessionSummary>,
    should_exit: bool,
}

impl PlayApp {
    pub fn new(game: GameState, config: PlayConfig) -> Self {
        Self {
            game,
            config,
            screen: Screen::Intro(IntroScreen::new()),
            summaries: vec![],
            should_exit: false,
        }
    }

    /// Summaries of every game finished during the session, oldest first.
    pub fn into_summaries(self) -> Vec<SessionSummary> {
        self.summaries
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: Transition) {
        if self.screen.take_bell() {
            runtime.ring_bell();
        }
        match transition {
            Transition::Stay => return,
            Transition::Play => {
                self.screen = Screen::Play(PlayScreen::new(self.config));
            }
            Transition::Outro => {
                let summary = SessionSummary::from_finished_game(&self.game);
                self.summaries.push(summary.clone());
                self.screen = Screen::Outro(OutroScreen::new(self.config, summary));
            }
            Transition::Exit => self.should_exit = true,
        }
        self.configure_ticks(runtime);
    }

    /// Ticks only drive the play screen; the others redraw on input alone.
    fn configure_ticks(&self, runtime: &mut Runtime) {
        runtime.set_tick_rate(self.screen.is_play().then_some(self.config.tick_rate));
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_frame_rate(self.config.frame_rate);
        self.configure_ticks(runtime);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        let transition = self.screen.handle_event(&mut self.game, event);
        self.apply_transition(runtime, transition);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        let transition = self.screen.update(&mut self.game);
        self.apply_transition(runtime, transition);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(&self.game, frame);
    }
}
