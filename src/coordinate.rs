use crate::{Envelope, HasEnvelope};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    pub fn distance(&self, other: Coordinate) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(pair: (f64, f64)) -> Self {
        Coordinate::new(pair.0, pair.1)
    }
}

impl HasEnvelope for Coordinate {
    fn envelope(&self) -> Envelope {
        Envelope::new(*self, *self)
    }
}
