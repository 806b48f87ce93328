use std::time::Duration;

/// Gravity clock.
///
/// Elapsed frame time is added to a counter. Once the counter goes past the
/// interval the timer fires and starts over from zero. A frame that brings in
/// several intervals at once still fires only once.
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::DropTimer;
///
/// let mut timer = DropTimer::new(Duration::from_millis(1000));
/// assert!(!timer.advance(Duration::from_millis(600)));
/// assert!(!timer.advance(Duration::from_millis(400))); // exactly 1000ms: not yet
/// assert!(timer.advance(Duration::from_millis(1)));
/// assert_eq!(timer.counter(), Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct DropTimer {
    interval: Duration,
    counter: Duration,
}

impl DropTimer {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            counter: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn counter(&self) -> Duration {
        self.counter
    }

    /// Adds `elapsed` to the counter and reports whether a drop is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.counter = self.counter.saturating_add(elapsed);
        if self.counter > self.interval {
            self.counter = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.counter = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = DropTimer::new(Duration::from_millis(100));
        let frame = Duration::from_millis(16);
        let fired = (0..70).filter(|_| timer.advance(frame)).count();
        // 7 frames (112ms) per drop.
        assert_eq!(fired, 10);
    }

    #[test]
    fn test_large_frame_fires_once() {
        let mut timer = DropTimer::new(Duration::from_millis(100));
        assert!(timer.advance(Duration::from_secs(5)));
        assert_eq!(timer.counter(), Duration::ZERO);
        assert!(!timer.advance(Duration::from_millis(50)));
    }

    #[test]
    fn test_reset_restarts_the_interval() {
        let mut timer = DropTimer::new(Duration::from_millis(100));
        assert!(!timer.advance(Duration::from_millis(90)));
        timer.reset();
        assert!(!timer.advance(Duration::from_millis(90)));
        assert!(timer.advance(Duration::from_millis(20)));
    }
}
