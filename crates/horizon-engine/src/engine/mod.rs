//! Game rules on top of the board primitives.
//!
//! - [`GameState`] - the controller: active piece, obstacle field, gravity, scoring
//! - [`GameStats`] - score, locked pieces and clear histogram
//! - [`ShapeGenerator`] - seeded shape source
//! - [`Command`] / [`Cue`] - what goes into the controller and what comes out
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`], optionally from a [`ShapeSeed`]
//! 2. Call [`GameState::tick`] at a fixed rate; gravity fires every
//!    [`speed_for_level`] ticks
//! 3. Feed player input through [`GameState::apply`] between ticks
//! 4. Drain [`GameState::take_cues`] and draw [`GameState::render_board`]
//! 5. Stop once [`GameState::is_running`] turns false, or [`GameState::reset`]
//!
//! # Example
//!
//! ```
//! use horizon_engine::{Command, GameState};
//!
//! let mut game = GameState::new();
//! game.tick();
//! game.apply(Command::MoveLeft);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.stats().locked_pieces(), 1);
//! assert!(game.is_running());
//! ```

pub use self::{command::*, cue::*, game_state::*, game_stats::*, level::*, shape_generator::*};

mod command;
mod cue;
mod game_state;
mod game_stats;
mod level;
mod shape_generator;
