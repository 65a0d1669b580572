//! Smoke-test driver: exercises the whole public surface and prints
//! the results, with a timed bulk-append comparison against
//! `std::vec::Vec` at the top.
//!
//! Run with `cargo run --release --example smoke`.

use std::time::Instant;

use quadvec::{dump, quadvec, QuadVec, VecError};

const BULK: i64 = 10_000_000;

fn main() -> Result<(), VecError> {
    // ── Timed bulk append ───────────────────────────────────────
    let start = Instant::now();
    let mut v1 = QuadVec::new();
    for i in 0..BULK {
        v1.push(i)?;
    }
    println!("quadvec      {:.3}s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    let mut std_v1 = Vec::new();
    for i in 0..BULK {
        std_v1.push(i);
    }
    println!(
        "std::vec     {:.3}s ({} elements)",
        start.elapsed().as_secs_f64(),
        std_v1.len()
    );

    let out = &mut std::io::stdout();

    println!("\nmax_capacity: {}", v1.max_capacity());

    println!("\nresize ...");
    v1.resize(5, 0)?;
    dump(&v1, "v1", out).expect("stdout");
    v1.resize(10, 10)?;
    dump(&v1, "v1", out).expect("stdout");

    println!("\nassign from a subrange ...");
    let mut v1_a = QuadVec::new();
    v1_a.assign_from_slice(&v1[1..3])?;
    dump(&v1_a, "v1_a", out).expect("stdout");

    println!("\nfront, back, pop ...");
    println!("front = {:?}, back = {:?}", v1.first(), v1.last());
    v1.pop();
    dump(&v1, "v1", out).expect("stdout");

    println!("\nindexed writes ...");
    v1[0] = 1;
    dump(&v1, "v1", out).expect("stdout");

    println!("\nliteral list and swap ...");
    let mut v2 = quadvec![10i64, 11, 12, 13, 14];
    v1.swap_with(&mut v2);
    dump(&v1, "v1", out).expect("stdout");
    dump(&v2, "v2", out).expect("stdout");

    println!("\nclear ...");
    v1.clear();
    println!("v1.len() = {}, v1.capacity() = {}", v1.len(), v1.capacity());

    println!("\nsizing constructors ...");
    let mut v3 = QuadVec::from_elem(5, 2.0)?;
    v3[0] = 1.0;
    v3[4] = 3.0;
    dump(&v3, "v3", out).expect("stdout");
    let v4 = v3.clone();
    dump(&v4, "v4", out).expect("stdout");

    println!("\ninsert ...");
    let mut v6 = quadvec![3.0, 2.0, 2.0, 2.0, 1.0];
    v6.insert(1, 2.5)?;
    println!("just inserted: {}", v6[1]);
    v6.insert(0, 4.0)?;
    println!("just inserted: {}", v6[0]);
    v6.insert_slice(1, &[-2.0, -3.0])?;
    println!("just inserted: {} {}", v6[1], v6[2]);
    dump(&v6, "v6", out).expect("stdout");

    let end = v6.len();
    v6.insert_n(end, 2, &0.0)?;
    v6.insert_n(v6.len() - 2, 3, &0.5)?;
    v6.insert_slice(0, &[1.0, 2.0, 3.0, 4.0, 5.0])?;
    dump(&v6, "v6", out).expect("stdout");

    println!("\nerase ...");
    let mut v7 = QuadVec::from_elem(2, 5.0)?;
    v7.extend_from_slice(&v6)?;
    v7.remove(0)?;
    v7.remove_range(2..4)?;
    dump(&v7, "v7", out).expect("stdout");

    println!("\nshrink_to_fit ...");
    println!("before: len = {}, capacity = {}", v7.len(), v7.capacity());
    v7.shrink_to_fit()?;
    println!("after:  len = {}, capacity = {}", v7.len(), v7.capacity());

    println!("\ncomparison operators ...");
    let v8 = v7.clone();
    println!("v6 == v8: {}", v6 == v8);
    println!("v7 == v8: {}", v7 == v8);
    println!("v6 <  v8: {}", v6 < v8);
    println!("v8 <  v6: {}", v8 < v6);
    println!("v7 <= v8: {}", v7 <= v8);
    println!("v8 >= v7: {}", v8 >= v7);

    println!("\nreverse iteration ...");
    let reversed: Vec<f64> = v8.iter().rev().copied().collect();
    println!("{reversed:?}");

    println!("\nassign growing past the old length ...");
    let mut v9 = QuadVec::from_elem(4, 5i64)?;
    dump(&v9, "v9", out).expect("stdout");
    v9.assign(8, &7)?;
    dump(&v9, "v9 (after assign(8, 7))", out).expect("stdout");

    Ok(())
}
