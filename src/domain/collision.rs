//! Collision detection based on axis-aligned rectangles.

use super::Position;

pub trait HasCollision {
    fn shape(&self) -> Rectangle;
}

/// Axis-aligned rectangle centered on `position`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rectangle {
    pub position: Position,
    pub x_length: f64,
    pub y_length: f64,
}

impl Rectangle {
    pub fn new(position: Position, x_length: f64, y_length: f64) -> Self {
        Self {
            position,
            x_length,
            y_length,
        }
    }

    pub fn left(&self) -> f64 {
        self.position.x() - self.x_length / 2.0
    }

    pub fn right(&self) -> f64 {
        self.left() + self.x_length
    }

    pub fn top(&self) -> f64 {
        self.position.y() - self.y_length / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.y_length
    }

    /// Checks that no edge lies outside the given bounds. Touching an edge is still inside.
    pub fn is_within(&self, x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> bool {
        self.left() >= x_min && self.top() >= y_min && self.right() <= x_max && self.bottom() <= y_max
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_rectangle_edges() {
        let rectangle = Rectangle::new(Position::new(10.0, 20.0), 4.0, 8.0);
        assert_abs_diff_eq!(rectangle.left(), 8.0);
        assert_abs_diff_eq!(rectangle.right(), 12.0);
        assert_abs_diff_eq!(rectangle.top(), 16.0);
        assert_abs_diff_eq!(rectangle.bottom(), 24.0);
    }

    #[rstest]
    #[case::inside(Position::new(5.0, 5.0), true)]
    #[case::touching_left(Position::new(1.0, 5.0), true)]
    #[case::touching_bottom(Position::new(5.0, 9.0), true)]
    #[case::beyond_left(Position::new(0.5, 5.0), false)]
    #[case::beyond_top(Position::new(5.0, 0.99), false)]
    #[case::beyond_right(Position::new(9.5, 5.0), false)]
    #[case::beyond_bottom(Position::new(5.0, 9.01), false)]
    fn test_rectangle_is_within(#[case] position: Position, #[case] expected: bool) {
        let rectangle = Rectangle::new(position, 2.0, 2.0);
        assert_eq!(rectangle.is_within(0.0, 0.0, 10.0, 10.0), expected);
    }
}
