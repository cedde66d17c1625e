use crate::{frequency::SumFrequencies, Dice};

/// Closed-form moments of the sum of `dice`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Coefficient of variation, std_dev / mean
    pub cv: f64,
}

impl DistributionStats {
    /// mean = count * (sides + 1) / 2, variance = count * (sides^2 - 1) / 12
    pub fn for_dice(dice: Dice) -> Self {
        let count = f64::from(dice.count);
        let sides = f64::from(dice.sides);

        let mean = count * (sides + 1.0) / 2.0;
        let variance = count * (sides * sides - 1.0) / 12.0;
        Self::from_moments(mean, variance)
    }

    /// Moments measured from an enumerated frequency table
    pub fn from_frequencies(freqs: &SumFrequencies) -> Self {
        let total = freqs.total() as f64;
        let mean = freqs
            .iter()
            .map(|(sum, count)| f64::from(sum) * count as f64)
            .sum::<f64>()
            / total;
        let variance = freqs
            .iter()
            .map(|(sum, count)| (f64::from(sum) - mean).powi(2) * count as f64)
            .sum::<f64>()
            / total;
        Self::from_moments(mean, variance)
    }

    fn from_moments(mean: f64, variance: f64) -> Self {
        let std_dev = variance.sqrt();
        let cv = if mean > 0.0 { std_dev / mean } else { 0.0 };
        Self {
            mean,
            variance,
            std_dev,
            cv,
        }
    }
}
