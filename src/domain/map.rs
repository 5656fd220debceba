//! Rectangular drivable area.

use super::{HasCollision, Position, Size};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Map {
    width: f64,
    height: f64,
}

impl Map {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn contains(&self, object: &dyn HasCollision) -> bool {
        object.shape().is_within(0.0, 0.0, self.width, self.height)
    }
}
