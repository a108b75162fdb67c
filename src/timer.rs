//! Wall-clock timing around a single call or a scope.

use std::time::{Duration, Instant};

use log::debug;

/// Runs `f` once and returns its result together with the elapsed time.
pub fn with_timer<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Logs the time spent in a scope when dropped.
pub struct Stopwatch {
    label: &'static str,
    start: Instant,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        debug!("{}: {:?} elapsed", self.label, self.start.elapsed());
    }
}
