//! Distance-seeded greedy split of an overfull node.
//!
//! The two entries whose centres are farthest apart seed two groups, then
//! every other entry joins the group whose box grows least in area.

use crate::Envelope;

/// Entry positions of the two groups, each in assignment order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Partition {
    pub(crate) first: Vec<usize>,
    pub(crate) second: Vec<usize>,
}

/// The pair `(i, j)`, `i < j`, with the largest centroid distance.
/// The first pair found wins ties.
pub(crate) fn pick_seeds(boxes: &[Envelope]) -> (usize, usize) {
    debug_assert!(boxes.len() >= 2, "a split needs at least two entries");
    let mut best = (0, 1);
    let mut max_distance = f64::NEG_INFINITY;
    for i in 0..boxes.len() - 1 {
        for j in (i + 1)..boxes.len() {
            let distance = boxes[i].centroid_distance(boxes[j]);
            if distance > max_distance {
                max_distance = distance;
                best = (i, j);
            }
        }
    }
    best
}

pub(crate) fn partition(boxes: &[Envelope]) -> Partition {
    let (seed1, seed2) = pick_seeds(boxes);
    let mut first = vec![seed1];
    let mut second = vec![seed2];
    let mut first_box = boxes[seed1];
    let mut second_box = boxes[seed2];

    for (k, entry) in boxes.iter().enumerate() {
        if k == seed1 || k == seed2 {
            continue;
        }
        // Ties go to the first group.
        if first_box.enlargement(entry) <= second_box.enlargement(entry) {
            first.push(k);
            first_box.expand(entry);
        } else {
            second.push(k);
            second_box.expand(entry);
        }
    }

    Partition { first, second }
}

pub(crate) fn pick<T: Copy>(items: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&i| items[i]).collect()
}
