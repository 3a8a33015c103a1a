#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Thinking,
    Hungry,
    Eating,
}

/// Per-seat states around the ring.
///
/// The table's copy is only reachable through its lock, so inside the table a
/// `&mut States` means the lock is held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct States(Vec<State>);

impl States {
    pub fn new(n: usize) -> Self {
        Self(vec![State::Thinking; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> State {
        self.0[i]
    }

    pub(crate) fn set(&mut self, i: usize, state: State) {
        self.0[i] = state;
    }

    pub fn left(&self, i: usize) -> usize {
        (i + self.len() - 1) % self.len()
    }

    pub fn right(&self, i: usize) -> usize {
        (i + 1) % self.len()
    }

    /// No two adjacent seats are eating at once.
    pub fn is_exclusive(&self) -> bool {
        (0..self.len()).all(|i| {
            self.get(i) != State::Eating
                || i == self.right(i)
                || self.get(self.right(i)) != State::Eating
        })
    }

    pub fn as_slice(&self) -> &[State] {
        &self.0
    }
}

impl From<Vec<State>> for States {
    fn from(states: Vec<State>) -> Self {
        Self(states)
    }
}
