use crate::common::{Sequence, VALID_BASES};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// generate random bases of given length from seed
///
pub fn generate(length: usize, seed: u64) -> Sequence {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    generate_with_rng(&mut rng, length)
}

///
/// generate random bases of given length, drawing from `rng`
///
pub fn generate_with_rng<R: Rng>(rng: &mut R, length: usize) -> Sequence {
    (0..length)
        .map(|_| VALID_BASES[rng.gen_range(0..VALID_BASES.len())])
        .collect()
}
