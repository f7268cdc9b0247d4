use crate::{RTree, RTreeResult, Rectangle};

/// Operations shared by every rectangle index in this crate.
pub trait SpatialIndex {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of all stored rectangles, `None` when empty.
    fn envelope(&self) -> Option<Rectangle>;

    fn insert(&mut self, rect: Rectangle) -> RTreeResult<()>;

    /// Remove one stored rectangle equal to `rect`; returns whether one was found.
    fn remove(&mut self, rect: &Rectangle) -> bool;

    /// Stored rectangles intersecting `query`.
    fn search(&self, query: &Rectangle) -> RTreeResult<Vec<Rectangle>>;
}

impl SpatialIndex for RTree {
    fn len(&self) -> usize {
        RTree::len(self)
    }

    fn envelope(&self) -> Option<Rectangle> {
        RTree::envelope(self)
    }

    fn insert(&mut self, rect: Rectangle) -> RTreeResult<()> {
        RTree::insert(self, rect)
    }

    fn remove(&mut self, rect: &Rectangle) -> bool {
        RTree::remove(self, rect)
    }

    fn search(&self, query: &Rectangle) -> RTreeResult<Vec<Rectangle>> {
        RTree::search(self, query)
    }
}
