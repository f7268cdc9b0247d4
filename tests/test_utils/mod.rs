#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

use dynamic_rtree::{Coordinate, Rectangle};

//// Utility functions

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn get_random_rects(universe: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let x_max = universe.x + universe.width;
    let y_max = universe.y + universe.height;
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Rectangle::from_corners(
            Coordinate::new(
                rng.gen_range(universe.x, x_max),
                rng.gen_range(universe.y, y_max),
            ),
            Coordinate::new(
                rng.gen_range(universe.x, x_max),
                rng.gen_range(universe.y, y_max),
            ),
        ));
    }

    results
}

/// Rectangles shaped like the ones an interactive session adds: corners in
/// 0..400, sides of 20 to 70.
pub(crate) fn get_session_rects(n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Rectangle::new(
                rng.gen_range(0., 400.),
                rng.gen_range(0., 400.),
                rng.gen_range(20., 70.),
                rng.gen_range(20., 70.),
            )
        })
        .collect()
}

pub(crate) fn get_results_brute_force(query: &Rectangle, rectangles: &[Rectangle]) -> Vec<Rectangle> {
    let mut result: Vec<Rectangle> = rectangles
        .iter()
        .copied()
        .filter(|r| query.intersects(r))
        .collect();
    result.sort_unstable_by(order_rectangles);
    result
}

pub(crate) fn sorted(mut rects: Vec<Rectangle>) -> Vec<Rectangle> {
    rects.sort_unstable_by(order_rectangles);
    rects
}

pub(crate) fn order_rectangles(a: &Rectangle, b: &Rectangle) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.width.total_cmp(&b.width))
        .then(a.height.total_cmp(&b.height))
}
