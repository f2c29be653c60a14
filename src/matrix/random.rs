//! Random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound (inclusive) of generated values.
pub const LOW: f32 = -0.5;
/// Upper bound (exclusive) of generated values.
pub const HIGH: f32 = 0.5;

/// Random source for benchmark inputs: fixed seed for reproducible runs,
/// OS entropy otherwise.
pub fn input_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Overwrites every slot of `dst` with an independent draw from [-0.5, 0.5).
///
/// ```
/// use matbench::matrix::random::{fill_uniform, input_rng};
///
/// let mut rng = input_rng(Some(7));
/// let mut buf = vec![0.0f32; 64];
/// fill_uniform(&mut rng, &mut buf);
/// assert!(buf.iter().all(|&x| (-0.5..0.5).contains(&x)));
/// ```
pub fn fill_uniform<R: Rng + ?Sized>(rng: &mut R, dst: &mut [f32]) {
    for slot in dst.iter_mut() {
        *slot = rng.random_range(LOW..HIGH);
    }
}

/// A fresh n×n matrix of uniform values.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f32> {
    random_vec(rng, n * n)
}

/// A fresh buffer of `len` uniform values.
pub fn random_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    let mut buf = vec![0.0; len];
    fill_uniform(rng, &mut buf);
    buf
}
