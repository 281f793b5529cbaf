use rand::seq::SliceRandom;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Random workload generator for exercising trees.
///
/// Uses the xoshiro256** PRNG so a failing run can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use avl_tree::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some([7u8; 32]));
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> Option<&'a T> {
        elements.choose(&mut self.rng)
    }

    /// `len` integers drawn from `[min, max]`, duplicates allowed.
    pub fn values(&mut self, len: usize, min: i64, max: i64) -> Vec<i64> {
        (0..len).map(|_| self.random_int(min, max)).collect()
    }

    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        elements.shuffle(&mut self.rng);
    }
}
