use crossterm::event::{Event, KeyCode, KeyEventKind};
use horizon_engine::GameState;
use ratatui::Frame;

pub use self::{intro::IntroScreen, outro::OutroScreen, play::PlayScreen};

mod intro;
mod outro;
mod play;

/// What the app should do after a screen handled an event or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Transition {
    Stay,
    /// Show the play screen; the game is expected to be running.
    Play,
    /// The game just ended; summarize it and show the outro.
    Outro,
    Exit,
}

#[derive(Debug, derive_more::IsVariant)]
pub enum Screen {
    Intro(IntroScreen),
    Play(PlayScreen),
    Outro(OutroScreen),
}

impl Screen {
    pub fn handle_event(&mut self, game: &mut GameState, event: &Event) -> Transition {
        match self {
            Screen::Intro(screen) => screen.handle_event(event),
            Screen::Play(screen) => screen.handle_event(game, event),
            Screen::Outro(screen) => screen.handle_event(game, event),
        }
    }

    pub fn update(&mut self, game: &mut GameState) -> Transition {
        match self {
            Screen::Intro(_) | Screen::Outro(_) => Transition::Stay,
            Screen::Play(screen) => screen.update(game),
        }
    }

    pub fn take_bell(&mut self) -> bool {
        match self {
            Screen::Play(screen) => screen.take_bell(),
            Screen::Intro(_) | Screen::Outro(_) => false,
        }
    }

    pub fn draw(&self, game: &GameState, frame: &mut Frame) {
        match self {
            Screen::Intro(screen) => screen.draw(frame),
            Screen::Play(screen) => screen.draw(game, frame),
            Screen::Outro(screen) => screen.draw(game, frame),
        }
    }
}

/// Enter and quit keys shared by the intro and outro screens.
fn menu_key(event: &Event) -> Option<Transition> {
    let key = event.as_key_event()?;
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(Transition::Play),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Transition::Exit),
        _ => None,
    }
}
