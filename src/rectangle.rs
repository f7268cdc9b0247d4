use crate::{Coordinate, Envelope, HasEnvelope};

/// An axis-aligned rectangle anchored at its minimum corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Envelope {
        Envelope {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }
}

impl From<(f64, f64, f64, f64)> for Rectangle {
    fn from(fields: (f64, f64, f64, f64)) -> Self {
        Rectangle::new(fields.0, fields.1, fields.2, fields.3)
    }
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle with both points as corners, in any order.
    pub fn from_corners(p1: Coordinate, p2: Coordinate) -> Self {
        Envelope::new(p1, p2).to_rectangle()
    }

    /// Finite fields and non-negative extents.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.
            && self.height >= 0.
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Coordinate {
        self.envelope().center()
    }

    /// Overlap of the open rectangles; touching edges do not intersect.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        self.envelope().intersects(item)
    }

    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        self.envelope().contains(item)
    }

    pub fn union<T: HasEnvelope>(&self, item: T) -> Rectangle {
        self.envelope().merge(item).to_rectangle()
    }

    pub fn centroid_distance<T: HasEnvelope>(&self, item: T) -> f64 {
        self.envelope().centroid_distance(item)
    }
}
