use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// When the loop asks the application to draw.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Draw as soon as anything changed (a tick or a terminal event).
    #[default]
    OnDirty,
    /// Like `OnDirty`, but at most once per interval. Changes arriving faster
    /// are folded into the next draw.
    Throttled(Duration),
}

impl RenderMode {
    /// `Throttled` mode capped at `rate` frames per second.
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Scheduler behind [`Runtime`](crate::Runtime).
///
/// `next()` blocks until a tick is due, a draw is due, or the terminal reports
/// an event, whichever comes first. Ticks carry the wall-clock time since the
/// previous tick, so late frames do not slow game clocks down.
#[derive(Debug, Default)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Option<Instant>,
    last_render: Option<Instant>,
    /// Something changed since the last draw.
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }

    /// `None` disables ticks.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(elapsed) = self.take_tick(now) {
                return Ok(TuiEvent::Tick(elapsed));
            }
            if self.take_render(now) {
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

    /// Consumes a due tick, returning the time since the previous one (zero
    /// for the first).
    fn take_tick(&mut self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        let elapsed = match self.last_tick {
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                if elapsed < interval {
                    return None;
                }
                elapsed
            }
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.dirty = true;
        Some(elapsed)
    }

    fn take_render(&mut self, now: Instant) -> bool {
        let due = self.dirty
            && match self.render_mode {
                RenderMode::OnDirty => true,
                RenderMode::Throttled(interval) => self
                    .last_render
                    .is_none_or(|last| now.saturating_duration_since(last) >= interval),
            };
        if due {
            self.last_render = Some(now);
            self.dirty = false;
        }
        due
    }

    /// How long to wait for terminal input before a tick or draw is due.
    /// `None` means wait indefinitely.
    fn timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick = self
            .tick_interval
            .map(|interval| self.last_tick.map_or(now, |last| last + interval));
        let next_render = self.dirty.then(|| match self.render_mode {
            RenderMode::OnDirty => now,
            RenderMode::Throttled(interval) => self.last_render.map_or(now, |last| last + interval),
        });
        let deadline = next_tick.into_iter().chain(next_render).min()?;
        Some(deadline.saturating_duration_since(now))
    }
}
