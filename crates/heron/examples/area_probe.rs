//! Area timing probe over a seeded batch of figures.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for the cost of Heron
//!   evaluation and the right-triangle predicate relative to the circle
//!   closed form.
//!
//! Why this shape
//! - The batch mixes random scalene triangles with an exact Pythagorean
//!   family (3k, 4k, 5k), so the predicate count has a known expected value
//!   instead of depending on float coincidences.
//!
//! Code cross-refs: crates/heron/src/shape/triangle.rs::is_right_triangle

use std::time::Instant;

use heron::{Circle, Triangle};
use rand::{rngs::StdRng, Rng, SeedableRng};

const BATCH: usize = 10_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(43);
    let mut triangles = Vec::with_capacity(2 * BATCH);

    // Exact family: (3k, 4k, 5k) stays exactly right in f64 for integer k.
    for k in 1..=BATCH {
        let k = k as f64;
        let t = Triangle::new(3.0 * k, 4.0 * k, 5.0 * k).expect("pythagorean family is valid");
        triangles.push(t);
    }
    while triangles.len() < 2 * BATCH {
        let a: f64 = rng.gen_range(0.5..10.0);
        let b: f64 = rng.gen_range(0.5..10.0);
        let c = rng.gen_range((a - b).abs()..a + b);
        if let Ok(t) = Triangle::new(a, b, c) {
            triangles.push(t);
        }
    }

    let area_start = Instant::now();
    let area_sum: f64 = triangles.iter().map(Triangle::area).sum();
    let area_elapsed = area_start.elapsed().as_secs_f64() * 1e3;

    let pred_start = Instant::now();
    let right = triangles.iter().filter(|t| t.is_right_triangle()).count();
    let pred_elapsed = pred_start.elapsed().as_secs_f64() * 1e3;

    assert!(
        right >= BATCH,
        "expected at least the {BATCH} exact right triangles, got {right}"
    );

    let circle = Circle::new(2.0);

    println!("triangles={} area_sum={area_sum:.6}", triangles.len());
    println!("right_count={right} (exact family = {BATCH})");
    println!("heron_time_ms={area_elapsed:.3}");
    println!("predicate_time_ms={pred_elapsed:.3}");
    println!("circle_r2_area={:.15}", circle.area());
}
