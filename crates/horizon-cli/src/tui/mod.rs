//! Tick-driven terminal runtime.
//!
//! [`Runtime::run`] drives an [`App`] with three kinds of events: ticks at the
//! configured tick rate, renders at most at the frame rate, and terminal input.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
