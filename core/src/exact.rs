use crate::{factorial, frequency::SumFrequencies, metrics::Metrics, Dice, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactProbability {
    /// Probability that every person rolls a different sum
    pub probability: f64,
    /// Number of distinct sums the dice can produce
    pub num_sums: usize,
}

/// Exact probability that `num_people` people each rolling `dice` all get different sums
///
/// Every way of picking `num_people` distinct sums contributes the product of their
/// frequencies, times `num_people!` for the assignment of sums to people. Dividing by
/// `(sides^count)^num_people` is done up front by working with per-sum probabilities so that
/// nothing overflows.
pub fn exact_probability(dice: Dice, num_people: u32) -> Result<ExactProbability> {
    let freqs = SumFrequencies::enumerate(dice)?;
    Ok(exact_from_frequencies(&freqs, num_people))
}

pub(crate) fn exact_from_frequencies(freqs: &SumFrequencies, num_people: u32) -> ExactProbability {
    let num_sums = freqs.num_sums();

    if num_sums < num_people as usize {
        log!("{} sums for {num_people} people, impossible", num_sums);
        return ExactProbability {
            probability: 0.0,
            num_sums,
        };
    }

    indent!("walking sum combinations for {} ({num_people} people)", freqs.dice());
    let mut metrics = Metrics::new("exact::exact_probability");

    let weights = freqs.probabilities();
    let mut favorable = 0.0;
    for_each_combination(weights.len(), num_people as usize, |combo| {
        metrics.inc_sum_combinations();
        favorable += combo.iter().map(|&i| weights[i]).product::<f64>();
    });
    let probability = favorable * factorial(num_people);

    dedent!("probability {probability}");
    metrics.print_report();

    ExactProbability {
        probability,
        num_sums,
    }
}

/// Exact number of favorable outcomes, out of `(sides^count)^num_people`
///
/// Returns None when the count doesn't fit in a u128.
pub fn favorable_outcomes(freqs: &SumFrequencies, num_people: u32) -> Option<u128> {
    let counts: Vec<u128> = freqs
        .iter()
        .map(|(_, count)| count)
        .filter(|&count| count > 0)
        .collect();

    let mut total: Option<u128> = Some(0);
    for_each_combination(counts.len(), num_people as usize, |combo| {
        let ways = combo
            .iter()
            .try_fold(1u128, |acc, &i| acc.checked_mul(counts[i]));
        total = total.zip(ways).and_then(|(total, ways)| total.checked_add(ways));
    });

    let permutations = (1..=u128::from(num_people)).try_fold(1u128, |acc, n| acc.checked_mul(n));
    total.zip(permutations).and_then(|(total, p)| total.checked_mul(p))
}

// calls f with every strictly increasing k-subset of 0..n, in lexicographic order
fn for_each_combination(n: usize, k: usize, mut f: impl FnMut(&[usize])) {
    if k > n {
        return;
    }

    let mut combo: Vec<usize> = (0..k).collect();
    loop {
        f(&combo);

        // find the rightmost index that can still move right
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if combo[i] < n - k + i {
                break;
            }
        }

        combo[i] += 1;
        for j in i + 1..k {
            combo[j] = combo[j - 1] + 1;
        }
    }
}
