use std::{sync::Arc, thread};

use anyhow::{anyhow, ensure, Context, Result};
use tracing::{debug, info};

use crate::{
    config::Config,
    philosopher::Philosopher,
    progress::{report, Reporter},
    sync::latch::Latch,
    table::Table,
};

/// Seats the philosophers, lets them eat, and reports progress until they are done.
pub struct Dinner {
    config: Config,
    finished: Latch,
}

impl Dinner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            finished: Latch::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn finished(&self) -> &Latch {
        &self.finished
    }

    /// Runs one philosopher thread per seat plus a progress reporter, and returns
    /// the final meal counts in seat order.
    pub fn run(&self) -> Result<Vec<usize>> {
        self.config.validate()?;
        let config = &self.config;
        let table = Arc::new(Table::new(config.philosophers));
        info!(
            philosophers = config.philosophers,
            meals = config.meals,
            "seating philosophers"
        );

        let outcome = thread::scope(|s| -> Result<()> {
            let reporter = thread::Builder::new()
                .name("progress".to_string())
                .spawn_scoped(s, || {
                    Reporter::new(table.meals(), &self.finished, config.report_interval).run()
                })
                .context("spawning progress reporter")?;

            let dined = (0..config.philosophers)
                .map(|i| {
                    let p = Philosopher::new(
                        table.seat(i),
                        config.meals,
                        config.think_time,
                        config.eat_time,
                    );
                    thread::Builder::new()
                        .name(format!("philosopher-{i}"))
                        .spawn_scoped(s, move || p.dine())
                        .with_context(|| format!("spawning philosopher {i}"))
                })
                .collect::<Result<Vec<_>>>()
                .and_then(|ths| {
                    let panicked = ths
                        .into_iter()
                        .enumerate()
                        .filter_map(|(i, th)| th.join().err().map(|_| i))
                        .collect::<Vec<_>>();
                    ensure!(
                        panicked.is_empty(),
                        "philosophers {panicked:?} left the table early"
                    );
                    Ok(())
                });

            if self.finished.set() {
                debug!("all philosophers done");
            }
            let reports = reporter
                .join()
                .map_err(|_| anyhow!("progress reporter panicked"))?;
            debug!(reports, "progress reporter stopped");
            dined
        });

        report(table.meals());
        outcome?;
        Ok(table.meals().snapshot())
    }
}
