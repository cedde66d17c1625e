use crate::{stats::DistributionStats, Dice};

/// Probability that `num_people` picks from `num_sums` equally likely categories are all
/// different
///
/// Treats every sum as equally likely, which dice sums aren't, so this is only useful as a
/// point of comparison for the exact value.
pub fn birthday_approximation(num_sums: u32, num_people: u32) -> f64 {
    if num_sums < num_people {
        return 0.0;
    }

    let n = f64::from(num_sums);
    (0..num_people).map(|i| (n - f64::from(i)) / n).product()
}

/// Rough plausibility score from the normal approximation of the sum distribution
///
/// Heuristic, unverified. Compares the number of people to the ~99.7% width (6 sigma) of the
/// distribution and returns `1 - density^2`, floored at 0. It is not derived from the exact
/// calculation and nothing checks it against it. Returns None below 5 dice where the normal
/// approximation is too poor to bother with.
pub fn normal_heuristic(dice: Dice, num_people: u32) -> Option<f64> {
    if dice.count < 5 {
        return None;
    }

    let stats = DistributionStats::for_dice(dice);
    let effective_range = 6.0 * stats.std_dev;
    let density = f64::from(num_people) / effective_range;

    Some((1.0 - density.powi(2)).max(0.0))
}
