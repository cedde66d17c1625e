use crate::{metrics::Metrics, Dice, Rng, Seed};

const PROGRESS_INTERVAL: u64 = 100_000;

/// Outcome of a Monte-Carlo run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    pub seed: Seed,
    pub trials: u64,
    /// Trials where every person rolled a different sum
    pub distinct: u64,
}

impl Simulation {
    pub fn estimate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.distinct as f64 / self.trials as f64
    }
}

/// Estimates the probability that `num_people` people rolling `dice` all get different sums
pub fn simulate(dice: Dice, num_people: u32, trials: u64, rng: &mut Rng) -> Simulation {
    reset!();
    indent!("simulating {trials} trials of {num_people} people rolling {dice}");
    let mut metrics = Metrics::new("simulate::simulate");

    let mut sums = Vec::with_capacity(num_people as usize);
    let mut distinct = 0;
    for trial in 0..trials {
        metrics.inc_trials();

        sums.clear();
        sums.extend((0..num_people).map(|_| rng.roll_sum(dice)));
        sums.sort_unstable();
        if sums.windows(2).all(|pair| pair[0] != pair[1]) {
            distinct += 1;
        }

        if trial > 0 && trial % PROGRESS_INTERVAL == 0 {
            log!("{trial} trials, {distinct} distinct");
        }
    }

    dedent!("done");
    metrics.print_report();

    Simulation {
        seed: rng.initial_seed,
        trials,
        distinct,
    }
}
