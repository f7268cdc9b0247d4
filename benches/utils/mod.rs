#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use dynamic_rtree::{Coordinate, Rectangle};

//// Utility functions

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x, rect.x + rect.width),
            rng.gen_range(rect.y, rect.y + rect.height),
        ));
    }

    results
}

/// `n` rectangles with corners in `universe` and sides up to `max_side`.
pub(crate) fn get_random_rects(
    universe: Rectangle,
    n: usize,
    max_side: f64,
    seed: u64,
) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    get_random_points(universe, n, seed)
        .into_iter()
        .map(|p| Rectangle::new(p.x, p.y, rng.gen_range(0., max_side), rng.gen_range(0., max_side)))
        .collect()
}

pub(crate) fn universe() -> Rectangle {
    Rectangle::new(0., 0., 10_000., 10_000.)
}
