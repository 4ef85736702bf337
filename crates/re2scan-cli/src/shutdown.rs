use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Cooperative stop flag for the polling loops.
///
/// The watch loop spends most of its time sleeping between refreshes,
/// and a plain `thread::sleep` would make Ctrl-C feel sluggish at
/// long intervals. Waits therefore go through a condvar that the
/// signal handler can wake immediately.
pub struct StopFlag {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopFlag {
    pub fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            wake: Condvar::new(),
        }
    }

    /// Request a stop and wake every thread inside `sleep`.
    pub fn stop(&self) {
        let mut stopped = match self.stopped.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *stopped = true;
        self.wake.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        match self.stopped.lock() {
            Ok(guard) => *guard,
            // A poisoned lock means a panicking thread; stop the loop.
            Err(_) => true,
        }
    }

    /// Sleep for `duration` unless a stop arrives first.
    ///
    /// Returns `true` once a stop has been requested, whether it
    /// arrived before or during the sleep.
    pub fn sleep(&self, duration: Duration) -> bool {
        let guard = match self.stopped.lock() {
            Ok(guard) => guard,
            Err(_) => return true,
        };
        match self
            .wake
            .wait_timeout_while(guard, duration, |stopped| !*stopped)
        {
            Ok((stopped, _)) => *stopped,
            Err(_) => true,
        }
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_starts_running() {
        assert!(!StopFlag::new().is_stopped());
    }

    #[test]
    fn test_stop_is_sticky() {
        let flag = StopFlag::new();
        flag.stop();
        assert!(flag.is_stopped());
        assert!(flag.is_stopped());
    }

    #[test]
    fn test_sleep_runs_the_full_interval_without_stop() {
        let flag = StopFlag::new();
        let start = Instant::now();
        assert!(!flag.sleep(Duration::from_millis(40)));
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_sleep_after_stop_returns_immediately() {
        let flag = StopFlag::new();
        flag.stop();
        let start = Instant::now();
        assert!(flag.sleep(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_stop_wakes_a_sleeper() {
        let flag = Arc::new(StopFlag::new());
        let sleeper = Arc::clone(&flag);

        let handle = thread::spawn(move || {
            let start = Instant::now();
            (sleeper.sleep(Duration::from_secs(10)), start.elapsed())
        });

        thread::sleep(Duration::from_millis(50));
        flag.stop();

        let (stopped, elapsed) = handle.join().unwrap();
        assert!(stopped);
        assert!(elapsed < Duration::from_secs(1));
    }
}
