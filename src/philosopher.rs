use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::{config::DurationRange, sync::Lock, table::Seat};

/// Thinks, eats, repeats, for a fixed number of meals.
pub struct Philosopher {
    seat: Seat,
    meals: usize,
    think_time: DurationRange,
    eat_time: DurationRange,
}

impl Philosopher {
    pub fn new(
        seat: Seat,
        meals: usize,
        think_time: DurationRange,
        eat_time: DurationRange,
    ) -> Self {
        Self {
            seat,
            meals,
            think_time,
            eat_time,
        }
    }

    /// Runs every meal, returning the count reported after each one.
    pub fn dine(&self) -> Vec<usize> {
        let mut rng = rand::thread_rng();
        (0..self.meals)
            .map(|_| {
                self.think(&mut rng);
                let _forks = self.seat.acquire();
                self.eat(&mut rng)
            })
            .collect()
    }

    fn think<R: Rng>(&self, rng: &mut R) {
        debug!(seat = self.seat.index(), "thinking");
        pause(self.think_time.sample(rng));
    }

    fn eat<R: Rng>(&self, rng: &mut R) -> usize {
        let i = self.seat.index();
        let times = self.seat.table().meals().increment_and_get(i);
        debug!(seat = i, times_eaten = times, "eating");
        pause(self.eat_time.sample(rng));
        times
    }
}

fn pause(d: Duration) {
    if !d.is_zero() {
        std::thread::sleep(d);
    }
}
