use rand::{distributions::uniform, thread_rng, Rng as _, SeedableRng as _};

use crate::Dice;

pub type Seed = u64;

// Wrapper around a rand random number generator
// allowing use of the Rng methods without having to import any traits
pub struct Rng {
    pub initial_seed: Seed,
    gen: rand_pcg::Pcg32,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        let seed = thread_rng().gen();
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            initial_seed: seed,
            gen: rand_pcg::Pcg32::seed_from_u64(seed),
        }
    }

    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.gen.gen_range(range)
    }

    /// Rolls every die and returns the total
    ///
    /// panics if the dice have no sides
    pub fn roll_sum(&mut self, dice: Dice) -> u32 {
        (0..dice.count)
            .map(|_| u32::from(self.gen_range::<u8, _>(1..=dice.sides)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Rng::from_seed(7);
        let mut b = Rng::from_seed(7);
        let rolls_a: Vec<u32> = (0..20).map(|_| a.roll_sum(Dice::d6(3))).collect();
        let rolls_b: Vec<u32> = (0..20).map(|_| b.roll_sum(Dice::d6(3))).collect();
        pretty_assertions::assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = Rng::from_seed(42);
        for _ in 0..1000 {
            let sum = rng.roll_sum(Dice::d6(4));
            assert!((4..=24).contains(&sum));
        }
    }

    #[test]
    fn no_dice_rolls_zero() {
        let mut rng = Rng::new();
        assert_eq!(rng.roll_sum(Dice::d6(0)), 0);
    }
}
