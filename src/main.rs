//! Prints the lesson's worked examples.

use finset::prelude::*;

fn main() {
    let (s, a) = sample_sets();
    println!("s: {s}");
    println!("a: {a}");

    let ops = SetOps::new(&s, &a);
    println!("\ns ∪ a: {}", ops.union);
    println!("s ∖ a: {}", ops.difference);
    println!("s ∩ a: {}", ops.intersection);

    let fst = IntSet::from_range(1..3);
    let snd = IntSet::from_range(3..5);
    println!("\n{fst} × {snd}: {}", fst.prod(&snd));

    println!();
    for x in [-10.0, 0.0, 10.0] {
        println!("H({x}) = {}", heaviside(x));
    }

    println!("\ng(x) = x² + 1");
    for x in -2..=2 {
        println!("g({x}) = {}", square_successor(f64::from(x)));
    }

    match factor_pair(10) {
        Ok((x, y)) => println!("\nfactor_pair(10) = ({x}, {y})"),
        Err(err) => println!("\nfactor_pair(10) failed: {err}"),
    }
}
