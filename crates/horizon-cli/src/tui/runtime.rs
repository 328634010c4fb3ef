use std::{io, mem, time::Duration};

use super::{App, event::TuiEvent, event_loop::EventLoop};

const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Owns the terminal for the lifetime of an [`App`].
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
    bell: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(Duration::from_secs_f64(1.0 / DEFAULT_FRAME_RATE)),
            bell: false,
        }
    }

    /// Ticks per second; `None` disables ticks.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Upper bound on renders per second.
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.events
            .set_frame_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Rings the terminal bell once the current event has been handled.
    pub fn ring_bell(&mut self) {
        self.bell = true;
    }

    fn take_bell(&mut self) -> bool {
        mem::take(&mut self.bell)
    }

    /// Runs `app` until it asks to exit, restoring the terminal afterwards.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, &event),
                }
                if self.take_bell() {
                    write_bell(terminal.backend_mut())?;
                }
            }
            Ok(())
        })
    }
}

fn write_bell<W: io::Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}
