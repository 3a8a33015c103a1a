//! Run parameters for a dinner.

use std::time::Duration;

use anyhow::{ensure, Result};
use rand::Rng;

pub const NUMBER_OF_PHILOSOPHERS: usize = 15;
pub const MEALS: usize = 25;
pub const PROGRESS_REPORT_INTERVAL: Duration = Duration::from_secs(3);
pub const THINK_TIME: DurationRange = DurationRange::from_millis(300, 1600);
pub const EAT_TIME: DurationRange = DurationRange::from_millis(300, 1600);

/// Inclusive range a random pause is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationRange {
    pub min: Duration,
    pub max: Duration,
}

impl DurationRange {
    pub const ZERO: Self = Self::fixed(Duration::ZERO);

    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub const fn fixed(d: Duration) -> Self {
        Self::new(d, d)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub philosophers: usize,
    /// Meals each philosopher eats before leaving the table.
    pub meals: usize,
    pub think_time: DurationRange,
    pub eat_time: DurationRange,
    pub report_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            philosophers: NUMBER_OF_PHILOSOPHERS,
            meals: MEALS,
            think_time: THINK_TIME,
            eat_time: EAT_TIME,
            report_interval: PROGRESS_REPORT_INTERVAL,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.philosophers > 0, "need at least one philosopher");
        ensure!(
            self.think_time.min <= self.think_time.max,
            "think time min {:?} exceeds max {:?}",
            self.think_time.min,
            self.think_time.max
        );
        ensure!(
            self.eat_time.min <= self.eat_time.max,
            "eat time min {:?} exceeds max {:?}",
            self.eat_time.min,
            self.eat_time.max
        );
        ensure!(
            !self.report_interval.is_zero(),
            "progress report interval must be non-zero"
        );
        Ok(())
    }
}
