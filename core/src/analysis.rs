use std::ops::RangeInclusive;

use crate::{
    approx::birthday_approximation, exact::exact_probability, stats::DistributionStats, Dice,
    Result, DEFAULT_CHART_WIDTH, DEFAULT_MAX_DICE, DEFAULT_PEOPLE, DEFAULT_SIDES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub dice: RangeInclusive<u32>,
    pub sides: u8,
    pub num_people: u32,
    pub chart_width: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dice: 1..=DEFAULT_MAX_DICE,
            sides: DEFAULT_SIDES,
            num_people: DEFAULT_PEOPLE,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

/// Results for a single dice count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub dice: u32,
    pub exact: f64,
    pub num_sums: usize,
    pub birthday: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub cv: f64,
}

/// Difference between consecutive rows, in percentage points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub dice: u32,
    pub delta: f64,
    /// Change relative to the previous value, None if the previous value was zero
    pub relative: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sides: u8,
    pub num_people: u32,
    pub rows: Vec<Row>,
}

pub fn analyze(config: &AnalysisConfig) -> Result<Analysis> {
    reset!();
    indent!(
        "analyzing {:?} d{} dice for {} people",
        config.dice,
        config.sides,
        config.num_people
    );

    let mut rows = Vec::with_capacity(config.dice.clone().count());
    for count in config.dice.clone() {
        let dice = Dice::new(count, config.sides);
        let exact = exact_probability(dice, config.num_people)?;
        let birthday = birthday_approximation(exact.num_sums as u32, config.num_people);
        let stats = DistributionStats::for_dice(dice);

        log!("{dice}: exact {} birthday {birthday}", exact.probability);

        rows.push(Row {
            dice: count,
            exact: exact.probability,
            num_sums: exact.num_sums,
            birthday,
            mean: stats.mean,
            std_dev: stats.std_dev,
            cv: stats.cv,
        });
    }

    dedent!();

    Ok(Analysis {
        sides: config.sides,
        num_people: config.num_people,
        rows,
    })
}

impl Analysis {
    /// Exact probabilities as percentages, in row order
    pub fn exact_percentages(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.exact * 100.0).collect()
    }

    pub fn changes(&self) -> Vec<Change> {
        self.rows
            .windows(2)
            .map(|pair| {
                let (prev, next) = (pair[0].exact * 100.0, pair[1].exact * 100.0);
                let delta = next - prev;
                Change {
                    dice: pair[1].dice,
                    delta,
                    relative: (prev > 0.0).then(|| delta / prev),
                }
            })
            .collect()
    }
}
