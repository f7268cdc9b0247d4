use crate::{Coordinate, Rectangle};

/// Bounding box in min/max form, used for node boxes.
///
/// Unions in this form are exact, so a box grown one entry at a time equals
/// the box recomputed from scratch over the same entries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Envelope {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Envelope;
}

impl HasEnvelope for Envelope {
    fn envelope(&self) -> Envelope {
        *self
    }
}

impl<T: HasEnvelope> HasEnvelope for &T {
    fn envelope(&self) -> Envelope {
        (*self).envelope()
    }
}

impl Envelope {
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Envelope {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    /// Minimum bounding envelope of `items`, or `None` if there are none.
    pub fn of<T: HasEnvelope>(items: &[T]) -> Option<Self> {
        Self::of_iter(items.iter().map(|i| i.envelope()))
    }

    pub fn of_iter<I: IntoIterator<Item = Envelope>>(items: I) -> Option<Self> {
        items.into_iter().fold(None, |acc, e| match acc {
            None => Some(e),
            Some(s) => Some(s.merge(e)),
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: self.x_min + self.width() / 2.,
            y: self.y_min + self.height() / 2.,
        }
    }

    /// Overlap of the open boxes; touching edges do not intersect.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min < other.x_max
            && self.x_max > other.x_min
            && self.y_min < other.y_max
            && self.y_max > other.y_min
    }

    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    pub fn merge<T: HasEnvelope>(&self, item: T) -> Self {
        let rect = item.envelope();
        Envelope {
            x_min: self.x_min.min(rect.x_min),
            y_min: self.y_min.min(rect.y_min),
            x_max: self.x_max.max(rect.x_max),
            y_max: self.y_max.max(rect.y_max),
        }
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        *self = self.merge(item);
    }

    /// Area this box would gain by growing to cover `item`.
    pub fn enlargement<T: HasEnvelope>(&self, item: T) -> f64 {
        self.merge(item).area() - self.area()
    }

    pub fn centroid_distance<T: HasEnvelope>(&self, item: T) -> f64 {
        self.center().distance(item.envelope().center())
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.x_min, self.y_min, self.width(), self.height())
    }
}
