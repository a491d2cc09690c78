use std::iter;

use rand::distributions::Uniform;
use rand::Rng;

/// Generates a random string of `len` lowercase ASCII letters, each drawn uniformly.
pub fn gen_lowercase<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let letters = Uniform::new_inclusive(b'a', b'z');
    iter::repeat(()).map(|_| rng.sample(letters)).map(char::from).take(len).collect()
}
