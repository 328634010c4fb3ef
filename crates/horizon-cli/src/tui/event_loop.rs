use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use super::event::TuiEvent;

/// Interleaves ticks, renders and terminal input.
///
/// Ticks fire every `tick_interval` regardless of input. A render fires only when
/// something happened since the previous one, and never more often than
/// `frame_interval`.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    frame_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(frame_interval: Duration) -> Self {
        let now = Instant::now();
        let long_ago = now.checked_sub(Duration::from_secs(3600)).unwrap_or(now);
        Self {
            tick_interval: None,
            frame_interval,
            last_tick: long_ago,
            last_render: long_ago,
            dirty: true,
        }
    }

    /// `None` stops tick events.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_frame_interval(&mut self, interval: Duration) {
        self.frame_interval = interval;
    }

    /// Blocks until the next event is due.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.tick_due(now) {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }
            if self.render_due(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn tick_due(&self, now: Instant) -> bool {
        self.tick_interval
            .is_some_and(|interval| now.duration_since(self.last_tick) >= interval)
    }

    fn render_due(&self, now: Instant) -> bool {
        self.dirty && now.duration_since(self.last_render) >= self.frame_interval
    }

    /// Time left until the next tick or pending render; `None` means wait for input.
    fn timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = self.dirty.then(|| self.last_render + self.frame_interval);
        let next_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const TICK: Duration = Duration::from_millis(2);

    #[test]
    fn test_first_render_is_immediate() {
        let events = EventLoop::new(FRAME);
        let now = Instant::now();
        assert!(events.render_due(now));
        assert!(!events.tick_due(now));
    }

    #[test]
    fn test_no_tick_without_interval() {
        let mut events = EventLoop::new(FRAME);
        let now = Instant::now();
        events.last_render = now;
        events.dirty = false;
        assert_eq!(events.timeout(now), None);

        events.set_tick_interval(Some(TICK));
        events.last_tick = now;
        assert_eq!(events.timeout(now), Some(TICK));
    }

    #[test]
    fn test_render_is_throttled() {
        let mut events = EventLoop::new(FRAME);
        let now = Instant::now();
        events.last_render = now;
        events.dirty = true;

        assert!(!events.render_due(now));
        assert_eq!(events.timeout(now), Some(FRAME));
        assert!(events.render_due(now + FRAME));
    }

    #[test]
    fn test_clean_loop_skips_render() {
        let mut events = EventLoop::new(FRAME);
        let now = Instant::now();
        events.dirty = false;
        assert!(!events.render_due(now + FRAME));
    }
}
