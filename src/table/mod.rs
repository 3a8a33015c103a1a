pub mod counter;
pub mod state;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::sync::{gate::Gate, Lock, LockGuard};
use counter::MealCounter;
use state::{State, States};

/// Arbitrates the forks around a ring of `n` seats.
///
/// Every state transition happens under one lock, which is the single point where
/// forks are granted. Nobody owns an individual fork, so there is no circular wait.
/// A seat only becomes `Eating` inside `test`, which re-checks both neighbours
/// under that same lock, so adjacent seats never eat together.
///
/// No aging: a seat whose neighbours keep alternating can wait indefinitely.
pub struct Table {
    states: Mutex<States>,
    gates: Vec<Gate>,
    meals: MealCounter,
}

impl Table {
    pub fn new(n: usize) -> Self {
        Self::with_states(States::new(n))
    }

    fn with_states(states: States) -> Self {
        let n = states.len();
        Self {
            states: Mutex::new(states),
            gates: (0..n).map(|_| Gate::new()).collect(),
            meals: MealCounter::new(n),
        }
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn state(&self, i: usize) -> State {
        self.lock().get(i)
    }

    /// Consistent view of every seat's state.
    pub fn states(&self) -> States {
        self.lock().clone()
    }

    pub fn meals(&self) -> &MealCounter {
        &self.meals
    }

    pub fn seat(self: &Arc<Self>, i: usize) -> Seat {
        Seat::new(i, self)
    }

    // A panicking seat never leaves `States` half written: every transition is a
    // single assignment.
    fn lock(&self) -> MutexGuard<'_, States> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Borrowing `States` mutably requires the lock guard.
    fn test(&self, states: &mut States, i: usize) -> bool {
        if states.get(i) == State::Hungry
            && states.get(states.left(i)) != State::Eating
            && states.get(states.right(i)) != State::Eating
        {
            states.set(i, State::Eating);
            // Either `i` itself is about to wait on the gate and passes straight
            // through, or a neighbour's release wakes a waiting `i`.
            self.gates[i].signal();
            return true;
        }
        false
    }

    /// Blocks until seat `i` holds both of its forks.
    pub fn acquire_forks(&self, i: usize) {
        debug!(seat = i, "trying to acquire forks");
        {
            let mut states = self.lock();
            states.set(i, State::Hungry);
            self.test(&mut states, i);
        }
        self.gates[i].acquire();
        debug!(seat = i, "acquired forks");
    }

    /// Puts seat `i`'s forks down and hands them to whichever neighbour can now eat.
    pub fn release_forks(&self, i: usize) {
        debug!(seat = i, "releasing forks");
        let mut states = self.lock();
        states.set(i, State::Thinking);
        let (left, right) = (states.left(i), states.right(i));
        self.test(&mut states, left);
        self.test(&mut states, right);
    }
}

/// One seat's handle on a shared table.
pub struct Seat {
    n: usize,
    table: Arc<Table>,
}

impl Seat {
    pub fn new(n: usize, table: &Arc<Table>) -> Self {
        assert!(
            n < table.len(),
            "Expect 0-based seat {n} < n_seats={}",
            table.len()
        );
        Self {
            n,
            table: table.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.n
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }
}

impl Lock for Seat {
    fn acquire(&self) -> LockGuard<'_, Self> {
        self.table.acquire_forks(self.n);
        LockGuard { lock: self }
    }
    fn release(&self) {
        self.table.release_forks(self.n)
    }
}
