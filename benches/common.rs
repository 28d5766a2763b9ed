//! common routines to be included by benches

use bigint_ext::num_bigint::{BigInt, Sign};


/// Generate `count` random integers of `limbs` 32-bit limbs each,
/// multiplied by a random power of ten below `max_zeros`
pub fn random_bigints(seed: u64, count: usize, limbs: usize, max_zeros: u32) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);

    (0..count)
        .map(|_| {
            let digits: Vec<u32> = (0..limbs).map(|_| rng.rand_u32()).collect();
            let sign = if rng.rand_u32() % 2 == 0 { Sign::Plus } else { Sign::Minus };
            let zeros = rng.rand_range(0..max_zeros.max(1));
            BigInt::from_slice(sign, &digits) * BigInt::from(10).pow(zeros)
        })
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
