use std::sync::{Condvar, Mutex, PoisonError};

/// Binary handoff signal: a semaphore that starts at 0 and never exceeds 1.
///
/// A single `signal()` primes exactly one `acquire()`; `acquire()` blocks until primed.
#[derive(Default)]
pub struct Gate {
    primed: Mutex<bool>,
    cv: Condvar,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        let mut primed = self.primed.lock().unwrap_or_else(PoisonError::into_inner);
        debug_assert!(!*primed, "gate signalled twice without an acquire");
        *primed = true;
        self.cv.notify_one();
    }

    pub fn acquire(&self) {
        let primed = self.primed.lock().unwrap_or_else(PoisonError::into_inner);
        let mut primed = self
            .cv
            .wait_while(primed, |primed| !*primed)
            .unwrap_or_else(PoisonError::into_inner);
        *primed = false;
    }

    pub fn is_primed(&self) -> bool {
        *self.primed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::Gate;
    use std::{sync::Arc, time::Duration};

    #[test]
    fn signal_before_acquire_returns_immediately() {
        let gate = Gate::new();
        assert!(!gate.is_primed());
        gate.signal();
        assert!(gate.is_primed());
        gate.acquire();
        assert!(!gate.is_primed());
    }

    #[test]
    fn acquire_blocks_until_signalled() {
        let gate = Arc::new(Gate::new());
        let th = std::thread::spawn({
            let gate = gate.clone();
            move || gate.acquire()
        });
        std::thread::sleep(Duration::from_millis(100));
        assert!(!th.is_finished());

        gate.signal();
        th.join().unwrap();
        assert!(!gate.is_primed());
    }

    #[test]
    fn one_signal_primes_one_acquire() {
        let gate = Arc::new(Gate::new());
        let ths = (0..2)
            .map(|_| {
                let gate = gate.clone();
                std::thread::spawn(move || gate.acquire())
            })
            .collect::<Vec<_>>();
        std::thread::sleep(Duration::from_millis(50));

        gate.signal();
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(ths.iter().filter(|th| th.is_finished()).count(), 1);

        gate.signal();
        ths.into_iter().for_each(|th| th.join().unwrap());
        assert!(!gate.is_primed());
    }
}
