/*!
   Random value generators for test identifiers.
*/

use rand::Rng;

pub fn random_u32() -> u32 {
    let mut rng = rand::thread_rng();
    rng.gen()
}

pub fn random_u64_range(min: u64, max: u64) -> u64 {
    let mut rng = rand::thread_rng();
    rng.gen_range(min..max)
}

/// A short random hex string, e.g. for wallet address suffixes.
pub fn random_hex_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let digit: u8 = rng.gen_range(0..16);
            char::from_digit(digit as u32, 16).unwrap()
        })
        .collect()
}
