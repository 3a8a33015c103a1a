use std::sync::{Mutex, PoisonError};

/// Meals eaten per seat. Guarded by its own lock, independent of the table's
/// state lock; the two are never held together.
pub struct MealCounter {
    meals: Mutex<Vec<usize>>,
}

impl MealCounter {
    pub fn new(n: usize) -> Self {
        Self {
            meals: Mutex::new(vec![0; n]),
        }
    }

    pub fn increment_and_get(&self, i: usize) -> usize {
        let mut meals = self.meals.lock().unwrap_or_else(PoisonError::into_inner);
        meals[i] += 1;
        meals[i]
    }

    pub fn snapshot(&self) -> Vec<usize> {
        self.meals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::MealCounter;
    use std::sync::Arc;

    #[test]
    fn counts_are_per_seat() {
        let counter = MealCounter::new(3);
        assert_eq!(counter.increment_and_get(1), 1);
        assert_eq!(counter.increment_and_get(1), 2);
        assert_eq!(counter.increment_and_get(2), 1);
        assert_eq!(counter.snapshot(), vec![0, 2, 1]);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        const N_THREADS: usize = 4;
        const WORK: usize = 10_000;
        let counter = Arc::new(MealCounter::new(N_THREADS));
        let ths = (0..N_THREADS)
            .map(|n| {
                let counter = counter.clone();
                std::thread::spawn(move || {
                    (0..WORK)
                        .map(|_| counter.increment_and_get(n))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for th in ths {
            assert_eq!(th.join().unwrap(), (1..=WORK).collect::<Vec<_>>());
        }
        assert_eq!(counter.snapshot(), vec![WORK; N_THREADS]);
    }
}
