use std::{
    sync::{Condvar, Mutex, PoisonError},
    time::Duration,
};

/// One-shot event. Once set it stays set.
#[derive(Default)]
pub struct Latch {
    set: Mutex<bool>,
    cv: Condvar,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the call that actually set the latch.
    pub fn set(&self) -> bool {
        let mut set = self.set.lock().unwrap_or_else(PoisonError::into_inner);
        let first = !*set;
        *set = true;
        self.cv.notify_all();
        first
    }

    pub fn is_set(&self) -> bool {
        *self.set.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks for at most `timeout`, returning early once set.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let set = self.set.lock().unwrap_or_else(PoisonError::into_inner);
        let (set, _) = self
            .cv
            .wait_timeout_while(set, timeout, |set| !*set)
            .unwrap_or_else(PoisonError::into_inner);
        *set
    }
}

#[cfg(test)]
mod tests {
    use super::Latch;
    use std::{
        sync::Arc,
        time::{Duration, Instant},
    };

    #[test]
    fn set_is_idempotent() {
        let latch = Latch::new();
        assert!(!latch.is_set());
        assert!(latch.set());
        assert!(!latch.set());
        assert!(latch.is_set());
    }

    #[test]
    fn wait_times_out_when_unset() {
        let latch = Latch::new();
        let start = Instant::now();
        assert!(!latch.wait_timeout(Duration::from_millis(50)));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn wait_wakes_on_set() {
        let latch = Arc::new(Latch::new());
        let th = std::thread::spawn({
            let latch = latch.clone();
            move || latch.wait_timeout(Duration::from_secs(30))
        });
        std::thread::sleep(Duration::from_millis(50));
        latch.set();
        assert!(th.join().unwrap());
    }
}
