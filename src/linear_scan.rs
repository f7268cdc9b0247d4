/**
 * A flat list of rectangles queried by testing every entry.
 *
 * This is the brute-force baseline the R-tree is checked and benchmarked
 * against.
 */
use crate::{Envelope, RTreeError, RTreeResult, Rectangle, SpatialIndex};

#[derive(Clone, Debug, Default)]
pub struct LinearScan {
    rects: Vec<Rectangle>,
}

impl LinearScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rects
    }
}

impl SpatialIndex for LinearScan {
    fn len(&self) -> usize {
        self.rects.len()
    }

    fn envelope(&self) -> Option<Rectangle> {
        Envelope::of(&self.rects).map(|e| e.to_rectangle())
    }

    fn insert(&mut self, rect: Rectangle) -> RTreeResult<()> {
        if !rect.is_valid() {
            return Err(RTreeError::InvalidRectangle(rect));
        }
        self.rects.push(rect);
        Ok(())
    }

    fn remove(&mut self, rect: &Rectangle) -> bool {
        match self.rects.iter().position(|r| r == rect) {
            Some(position) => {
                self.rects.remove(position);
                true
            }
            None => false,
        }
    }

    fn search(&self, query: &Rectangle) -> RTreeResult<Vec<Rectangle>> {
        if !query.is_valid() {
            return Err(RTreeError::InvalidQuery(*query));
        }
        Ok(self
            .rects
            .iter()
            .copied()
            .filter(|r| r.intersects(query))
            .collect())
    }
}

impl FromIterator<Rectangle> for LinearScan {
    /// Invalid rectangles are skipped.
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        LinearScan {
            rects: iter.into_iter().filter(|r| r.is_valid()).collect(),
        }
    }
}
