#[cfg(feature = "logging")]
#[macro_use]
mod logging;
#[cfg(not(feature = "logging"))]
#[macro_use]
mod logging_noop;

mod metrics;
mod rng;

mod analysis;
mod approx;
mod chart;
mod display;
mod exact;
mod frequency;
mod simulate;
mod stats;

pub mod experiments;
pub mod report;

pub use analysis::{analyze, Analysis, AnalysisConfig, Change, Row};
pub use approx::{birthday_approximation, normal_heuristic};
pub use chart::{bar_length, BarChart};
pub use display::{DisplayPercent, DisplayProbability, ProbabilityClass};
pub use exact::{exact_probability, favorable_outcomes, ExactProbability};
pub use frequency::SumFrequencies;
pub use rng::{Rng, Seed};
pub use simulate::{simulate, Simulation};
pub use stats::DistributionStats;

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NoSides,
    TooManyOutcomes { count: u32, sides: u8 },
    InvalidTarget { target: u32, min: u32, max: u32 },
    FaceOutOfRange { face: u8, sides: u8 },
    Fmt(std::fmt::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoSides => write!(f, "Dice must have at least one side"),
            Error::TooManyOutcomes { count, sides } => {
                write!(f, "Too many outcomes: {sides}^{count} does not fit in 128 bits")
            }
            Error::InvalidTarget { target, min, max } => {
                write!(f, "Target sum {target} must be between {min} and {max}")
            }
            Error::FaceOutOfRange { face, sides } => {
                write!(f, "Face {face} is not on a {sides}-sided die")
            }
            Error::Fmt(inner) => write!(f, "Failed to format output: {inner:?}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::fmt::Error> for Error {
    fn from(inner: std::fmt::Error) -> Self {
        Self::Fmt(inner)
    }
}

/*****************************************************************************************
 * Common Types / Constants
 */

pub const DEFAULT_SIDES: u8 = 6;
pub const DEFAULT_PEOPLE: u32 = 4;
pub const DEFAULT_MAX_DICE: u32 = 20;
pub const DEFAULT_CHART_WIDTH: usize = 50;

/// The dice rolled by a single person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub count: u32,
    pub sides: u8,
}

impl Dice {
    pub const fn new(count: u32, sides: u8) -> Self {
        Self { count, sides }
    }

    pub const fn d6(count: u32) -> Self {
        Self::new(count, DEFAULT_SIDES)
    }

    pub fn min_sum(self) -> u32 {
        self.count
    }

    pub fn max_sum(self) -> u32 {
        self.count * u32::from(self.sides)
    }

    /// Number of distinct sums, every value in min_sum..=max_sum is reachable
    pub fn num_sums(self) -> u32 {
        if self.sides == 0 && self.count > 0 {
            return 0;
        }
        self.max_sum() - self.min_sum() + 1
    }

    /// Size of the ordered outcome space, sides^count
    pub fn num_outcomes(self) -> Result<u128> {
        if self.sides == 0 {
            return Err(Error::NoSides);
        }
        u128::from(self.sides)
            .checked_pow(self.count)
            .ok_or(Error::TooManyOutcomes {
                count: self.count,
                sides: self.sides,
            })
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

pub(crate) fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}
