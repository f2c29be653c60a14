//! Sums one billion random floats with a scalar loop and a SIMD reduction.

use matbench::harness::sum::{BILLION, SumComparison};
use matbench::harness::timed;
use matbench::matrix::random::{input_rng, random_vec};

fn main() {
    let mut rng = input_rng(None);
    let (values, elapsed) = timed(|| random_vec(&mut rng, BILLION));
    println!("Rand: {:.3?}", elapsed);

    print!("{}", SumComparison::run(&values));
}
