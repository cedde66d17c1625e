//! Smaller dice experiments that sit alongside the main report
//!
//! Each experiment produces a list of labelled outcomes plus a few summary lines, the driver
//! prints them as a table and a bar chart.

use crate::{
    approx::birthday_approximation,
    exact::{exact_from_frequencies, favorable_outcomes},
    frequency::SumFrequencies,
    Dice, DisplayProbability, Error, Result, DEFAULT_SIDES,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    /// Shorter label for chart axes
    pub short_label: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub title: String,
    pub summary: Vec<String>,
    pub outcomes: Vec<Outcome>,
    pub chart_title: String,
}

/// How often `target` comes up in `rolls` rolls of a six-sided die, for every possible count
pub fn single_die(rolls: u32, target: u8) -> Result<Experiment> {
    let sides = DEFAULT_SIDES;
    if target == 0 || target > sides {
        return Err(Error::FaceOutOfRange {
            face: target,
            sides,
        });
    }

    let p = 1.0 / f64::from(sides);
    let outcomes: Vec<Outcome> = (0..=rolls)
        .map(|k| {
            let probability = binomial(rolls, k)
                * p.powf(f64::from(k))
                * (1.0 - p).powf(f64::from(rolls - k));
            let times = if k == 1 { "time" } else { "times" };
            Outcome {
                label: format!("{target} appears {k} {times}"),
                short_label: format!("{k} times"),
                probability,
            }
        })
        .collect();

    let exactly_once = outcomes.get(1).map_or(0.0, |o| o.probability);
    let at_least_once = 1.0 - outcomes[0].probability;
    let expected = f64::from(rolls) / f64::from(sides);

    Ok(Experiment {
        title: format!("Single {sides}-sided Die ({rolls} rolls)"),
        summary: vec![
            format!(
                "Probability of getting {target} at least once: {}",
                DisplayProbability(at_least_once)
            ),
            format!(
                "Probability of getting {target} exactly once: {}",
                DisplayProbability(exactly_once)
            ),
            format!("Expected occurrences: {expected:.2}"),
        ],
        outcomes,
        chart_title: format!("Distribution of rolling {target} ({rolls} rolls)"),
    })
}

/// Distribution of the sum of `dice`, highlighting `target`
pub fn sum_distribution(dice: Dice, target: u32) -> Result<Experiment> {
    // any dice whose outcomes fit in 128 bits also have a max sum that fits in 32
    dice.num_outcomes()?;

    let (min, max) = (dice.min_sum(), dice.max_sum());
    if target < min || target > max {
        return Err(Error::InvalidTarget { target, min, max });
    }

    let freqs = SumFrequencies::enumerate(dice)?;
    let total = freqs.total();

    let outcomes = freqs
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(sum, count)| Outcome {
            label: format!("Sum = {sum}"),
            short_label: sum.to_string(),
            probability: count as f64 / total as f64,
        })
        .collect();

    let target_count = freqs.get(target);
    let target_probability = target_count as f64 / total as f64;
    let most_likely = (f64::from(dice.count) * (f64::from(dice.sides) + 1.0) / 2.0).round();

    Ok(Experiment {
        title: format!("{} × {}-sided Dice Sum", dice.count, dice.sides),
        summary: vec![
            format!(
                "Probability of sum = {target}: {}",
                DisplayProbability(target_probability)
            ),
            format!("Ways to get sum = {target}: {target_count} out of {total}"),
            format!("Most likely sum: {most_likely}"),
        ],
        outcomes,
        chart_title: format!(
            "Sum distribution for {} × {}-sided dice",
            dice.count, dice.sides
        ),
    })
}

/// Chance of rolling `target` `count` times in a row on a `sides`-sided die
///
/// For longer runs of rolls this uses `1 - (1 - p)^windows`, which treats the overlapping
/// windows as independent and so slightly overestimates.
pub fn consecutive(sides: u8, count: u32, target: u8) -> Result<Experiment> {
    if sides == 0 {
        return Err(Error::NoSides);
    }
    if target == 0 || target > sides {
        return Err(Error::FaceOutOfRange {
            face: target,
            sides,
        });
    }

    let exact = (1.0 / f64::from(sides)).powf(f64::from(count));

    let outcomes = (count..=count.saturating_add(10))
        .map(|total_rolls| {
            let probability = if total_rolls == count {
                exact
            } else {
                let windows = total_rolls - count + 1;
                1.0 - (1.0 - exact).powf(f64::from(windows))
            };
            Outcome {
                label: format!("In {total_rolls} rolls"),
                short_label: format!("In {total_rolls} rolls"),
                probability,
            }
        })
        .collect();

    Ok(Experiment {
        title: format!("{count} Consecutive {target}s on {sides}-sided die"),
        summary: vec![
            format!(
                "Probability of exactly {count} consecutive {target}s: {}",
                DisplayProbability(exact)
            ),
            if exact > 0.0 {
                format!("This is 1 in {:.0} chance", (1.0 / exact).round())
            } else {
                "This is too unlikely to write as 1 in N".to_owned()
            },
        ],
        outcomes,
        chart_title: format!("Probability of {count} consecutive {target}s"),
    })
}

/// Birthday approximation of everyone rolling different sums, for 1 up to `num_people`
/// people, with the exact value for the full group alongside
pub fn all_different(num_people: u32, dice: Dice) -> Result<Experiment> {
    let freqs = SumFrequencies::enumerate(dice)?;
    let num_sums = dice.num_sums();

    let outcomes = (1..=num_people)
        .map(|people| {
            let person = if people == 1 { "person" } else { "people" };
            Outcome {
                label: format!("{people} {person}"),
                short_label: format!("{people} {person}"),
                probability: birthday_approximation(num_sums, people),
            }
        })
        .collect();

    let exact = exact_from_frequencies(&freqs, num_people);
    let approx = birthday_approximation(num_sums, num_people);

    let mut summary = vec![
        format!(
            "Probability all {num_people} people get different sums: {} (uniform approximation)",
            DisplayProbability(approx)
        ),
        format!(
            "Exact probability accounting for the sum distribution: {}",
            DisplayProbability(exact.probability)
        ),
    ];
    let total = dice.num_outcomes()?.checked_pow(num_people);
    if let (Some(favorable), Some(total)) = (favorable_outcomes(&freqs, num_people), total) {
        summary.push(format!("Favorable outcomes: {favorable} out of {total}"));
    }
    summary.push(format!("Each person rolls {} dice", dice.count));
    summary.push(format!(
        "Possible sums range: {} to {} ({num_sums} possibilities)",
        dice.min_sum(),
        dice.max_sum()
    ));

    Ok(Experiment {
        title: "All Different Sums".to_owned(),
        summary,
        outcomes,
        chart_title: format!(
            "Probability of all different sums ({} dice each)",
            dice.count
        ),
    })
}

// n choose k, in floating point so large roll counts don't overflow
fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * f64::from(n - i) / f64::from(i + 1))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const EPSILON: f64 = 1e-12;

    fn total(experiment: &Experiment) -> f64 {
        experiment.outcomes.iter().map(|o| o.probability).sum()
    }

    #[test_case(5, 0 => 1.0)]
    #[test_case(5, 2 => 10.0)]
    #[test_case(10, 3 => 120.0)]
    #[test_case(52, 5 => 2_598_960.0)]
    #[test_case(3, 4 => 0.0)]
    fn binomial(n: u32, k: u32) -> f64 {
        super::binomial(n, k)
    }

    #[test]
    fn single_die_distribution() {
        let experiment = single_die(3, 6).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes.len(), 4);
        pretty_assertions::assert_eq!(experiment.outcomes[1].label, "6 appears 1 time");
        pretty_assertions::assert_eq!(experiment.outcomes[2].label, "6 appears 2 times");
        assert!((experiment.outcomes[0].probability - 125.0 / 216.0).abs() < EPSILON);
        assert!((total(&experiment) - 1.0).abs() < EPSILON);
        pretty_assertions::assert_eq!(
            experiment.summary,
            vec![
                "Probability of getting 6 at least once: 42.13%",
                "Probability of getting 6 exactly once: 34.72%",
                "Expected occurrences: 0.50",
            ]
        );
    }

    #[test]
    fn single_die_no_rolls() {
        let experiment = single_die(0, 6).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes.len(), 1);
        pretty_assertions::assert_eq!(experiment.outcomes[0].probability, 1.0);
        assert!(experiment.summary[1].ends_with("0.000e0"));
    }

    #[test_case(0)]
    #[test_case(7)]
    fn single_die_bad_target(target: u8) {
        assert!(matches!(
            single_die(3, target),
            Err(Error::FaceOutOfRange { .. })
        ));
    }

    #[test]
    fn two_dice_sum() {
        let experiment = sum_distribution(Dice::d6(2), 7).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes.len(), 11);
        pretty_assertions::assert_eq!(experiment.outcomes[0].short_label, "2");
        assert!((experiment.outcomes[5].probability - 6.0 / 36.0).abs() < EPSILON);
        assert!((total(&experiment) - 1.0).abs() < EPSILON);
        pretty_assertions::assert_eq!(experiment.summary[1], "Ways to get sum = 7: 6 out of 36");
        pretty_assertions::assert_eq!(experiment.summary[2], "Most likely sum: 7");
    }

    #[test_case(1)]
    #[test_case(13)]
    fn sum_target_out_of_range(target: u32) {
        assert!(matches!(
            sum_distribution(Dice::d6(2), target),
            Err(Error::InvalidTarget { min: 2, max: 12, .. })
        ));
    }

    #[test]
    fn consecutive_sixes() {
        let experiment = consecutive(6, 3, 6).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes.len(), 11);
        let p = 1.0 / 216.0;
        assert!((experiment.outcomes[0].probability - p).abs() < EPSILON);
        let five_rolls = 1.0 - (1.0 - p).powi(3);
        assert!((experiment.outcomes[2].probability - five_rolls).abs() < EPSILON);
        pretty_assertions::assert_eq!(experiment.summary[1], "This is 1 in 216 chance");
    }

    #[test]
    fn sum_with_too_many_dice() {
        assert!(matches!(
            sum_distribution(Dice::new(3_000_000_000, 2), 7),
            Err(Error::TooManyOutcomes {
                count: 3_000_000_000,
                sides: 2
            })
        ));
    }

    #[test]
    fn consecutive_huge_run() {
        let experiment = consecutive(6, 3_000_000_000, 6).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes[0].probability, 0.0);
        assert!(experiment.outcomes.iter().all(|o| o.probability.is_finite()));
        pretty_assertions::assert_eq!(
            experiment.summary[1],
            "This is too unlikely to write as 1 in N"
        );
    }

    #[test]
    fn consecutive_longest_run() {
        let experiment = consecutive(2, u32::MAX, 1).unwrap();
        pretty_assertions::assert_eq!(experiment.outcomes.len(), 1);
        pretty_assertions::assert_eq!(experiment.outcomes[0].label, format!("In {} rolls", u32::MAX));
    }

    #[test]
    fn consecutive_bad_face() {
        assert!(matches!(
            consecutive(6, 3, 8),
            Err(Error::FaceOutOfRange { face: 8, sides: 6 })
        ));
        assert!(matches!(consecutive(0, 3, 1), Err(Error::NoSides)));
    }

    #[test]
    fn all_different_per_person() {
        let experiment = all_different(4, Dice::d6(1)).unwrap();
        let probabilities: Vec<f64> = experiment.outcomes.iter().map(|o| o.probability).collect();
        pretty_assertions::assert_eq!(probabilities[0], 1.0);
        assert!((probabilities[1] - 5.0 / 6.0).abs() < EPSILON);
        assert!((probabilities[3] - 360.0 / 1296.0).abs() < EPSILON);
        pretty_assertions::assert_eq!(experiment.outcomes[0].label, "1 person");
        pretty_assertions::assert_eq!(experiment.summary[2], "Favorable outcomes: 360 out of 1296");
        pretty_assertions::assert_eq!(
            experiment.summary[4],
            "Possible sums range: 1 to 6 (6 possibilities)"
        );
    }

    #[test]
    fn all_different_skips_favorable_count_when_too_large() {
        // (6^20)^4 doesn't fit in 128 bits
        let experiment = all_different(4, Dice::d6(20)).unwrap();
        pretty_assertions::assert_eq!(experiment.summary.len(), 4);
        pretty_assertions::assert_eq!(experiment.summary[2], "Each person rolls 20 dice");
    }
}
