use std::time::Duration;

use tracing::info;

use crate::{sync::latch::Latch, table::counter::MealCounter};

pub fn report(meals: &MealCounter) {
    info!("Progress: {:?}", meals.snapshot());
}

/// Logs the meal counts every `interval` until `finished` is set.
pub struct Reporter<'a> {
    meals: &'a MealCounter,
    finished: &'a Latch,
    interval: Duration,
}

impl<'a> Reporter<'a> {
    pub fn new(meals: &'a MealCounter, finished: &'a Latch, interval: Duration) -> Self {
        Self {
            meals,
            finished,
            interval,
        }
    }

    /// Returns the number of reports emitted.
    pub fn run(&self) -> usize {
        let mut reports = 0;
        while !self.finished.is_set() {
            report(self.meals);
            reports += 1;
            if self.finished.wait_timeout(self.interval) {
                break;
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::Reporter;
    use crate::{sync::latch::Latch, table::counter::MealCounter};
    use std::time::Duration;

    #[test]
    fn stops_once_finished() {
        let meals = MealCounter::new(3);
        let finished = Latch::new();
        let reports = std::thread::scope(|s| {
            let th = s.spawn(|| Reporter::new(&meals, &finished, Duration::from_millis(20)).run());
            std::thread::sleep(Duration::from_millis(110));
            finished.set();
            th.join().unwrap()
        });
        assert!(reports >= 2, "only {reports} reports");
    }

    #[test]
    fn silent_when_already_finished() {
        let meals = MealCounter::new(3);
        let finished = Latch::new();
        finished.set();
        assert_eq!(Reporter::new(&meals, &finished, Duration::from_secs(60)).run(), 0);
    }
}
