use crate::{metrics::Metrics, Dice, Error, Result};

/// Number of ordered outcomes producing each sum for a given set of dice
///
/// Stored densely, the count for `sum` lives at `sum - dice.min_sum()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumFrequencies {
    dice: Dice,
    counts: Vec<u128>,
}

impl SumFrequencies {
    /// Counts every ordered outcome of rolling `dice`
    ///
    /// Rather than walking all sides^count ordered rolls this walks every face multiset once
    /// and credits it with the number of distinct orderings it stands for, which produces the
    /// same table.
    pub fn enumerate(dice: Dice) -> Result<Self> {
        if dice.sides == 0 {
            return Err(Error::NoSides);
        }
        let total = dice.num_outcomes()?;

        indent!("enumerating sum frequencies for {dice} ({total} outcomes)");
        let mut metrics = Metrics::new("frequency::enumerate");

        let mut counts = vec![0; dice.num_sums() as usize];

        // kept in non-increasing order, which makes runs of equal faces contiguous
        let mut faces = vec![1; dice.count as usize];
        loop {
            metrics.inc_face_multisets();

            let sum: u32 = faces.iter().map(|&face| u32::from(face)).sum();
            counts[(sum - dice.min_sum()) as usize] += num_orderings(&faces);

            if !next_multiset(dice.sides, &mut faces) {
                break;
            }
        }

        debug_assert_eq!(counts.iter().sum::<u128>(), total);

        dedent!("done");
        metrics.print_report();

        Ok(Self { dice, counts })
    }

    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// Number of outcomes producing `sum`, zero if the sum isn't reachable
    pub fn get(&self, sum: u32) -> u128 {
        sum.checked_sub(self.dice.min_sum())
            .and_then(|idx| self.counts.get(idx as usize))
            .copied()
            .unwrap_or(0)
    }

    /// (sum, count) pairs in increasing sum order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u128)> + '_ {
        let min_sum = self.dice.min_sum();
        (min_sum..).zip(self.counts.iter().copied())
    }

    /// Number of sums that can actually be rolled
    pub fn num_sums(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn total(&self) -> u128 {
        self.counts.iter().sum()
    }

    /// Probability of each reachable sum, in increasing sum order
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.total() as f64;
        self.counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| count as f64 / total)
            .collect()
    }

    /// The sum with the highest count, the lowest one if there's a tie
    pub fn most_likely_sum(&self) -> u32 {
        let mut best = (self.dice.min_sum(), 0);
        for (sum, count) in self.iter() {
            if count > best.1 {
                best = (sum, count);
            }
        }
        best.0
    }
}

// mutates the faces to the next multiset (combination with repetition)
// returning false if there is no next multiset
fn next_multiset(sides: u8, faces: &mut [u8]) -> bool {
    if faces.is_empty() {
        false
    } else if faces[0] < sides {
        faces[0] += 1;
        true
    } else if faces.len() > 1 {
        let res = next_multiset(sides, &mut faces[1..]);
        faces[0] = faces[1];
        res
    } else {
        false
    }
}

// number of distinct orderings of the given faces, which must have equal faces next to each
// other
//
// builds the multinomial coefficient one face at a time, n!/(c1!..cs!) grows by i/run when the
// i-th face is the run-th of its kind
//
// the division is exact, and dividing out the common factor first keeps every intermediate
// value at or below the final count
fn num_orderings(faces: &[u8]) -> u128 {
    let mut orderings: u128 = 1;
    let mut prev = None;
    let mut run: u128 = 0;
    for (i, &face) in faces.iter().enumerate() {
        run = if prev == Some(face) { run + 1 } else { 1 };
        prev = Some(face);
        let g = gcd(orderings, run);
        orderings = orderings / g * ((i as u128 + 1) / (run / g));
    }
    orderings
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
