//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, AddAssign, SubAssign},
};

/// Point in map coordinates. The origin is the top-left corner of the map and y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Angle> for f32 {
    fn from(value: Angle) -> Self {
        value.0 as f32
    }
}

/// Facing direction restricted to the eight compass points. 90° is up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Heading {
    East,
    NorthEast,
    #[default]
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Heading {
    pub const STEP_DEG: u16 = 45;

    pub fn to_deg(self) -> u16 {
        self.octant() as u16 * Self::STEP_DEG
    }

    pub fn angle(self) -> Angle {
        Angle::from_deg(self.to_deg().into())
    }

    pub fn is_diagonal(self) -> bool {
        self.octant() % 2 == 1
    }

    /// North and south, the headings aligned with the map's vertical axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }

    /// Rotates by a signed number of 45° steps, counter-clockwise for positive values.
    pub fn turned(self, octants: i32) -> Self {
        Self::from_octant((self.octant() as i32 + octants).rem_euclid(8))
    }

    fn octant(self) -> u8 {
        self as u8
    }

    fn from_octant(octant: i32) -> Self {
        match octant {
            0 => Heading::East,
            1 => Heading::NorthEast,
            2 => Heading::North,
            3 => Heading::NorthWest,
            4 => Heading::West,
            5 => Heading::SouthWest,
            6 => Heading::South,
            _ => Heading::SouthEast,
        }
    }
}

/// Signed scalar speed along the heading. Negative values drive in reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    pub fn is_reverse(self) -> bool {
        self.0 < 0.0
    }
}

impl AddAssign<f64> for Speed {
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl SubAssign<f64> for Speed {
    fn sub_assign(&mut self, rhs: f64) {
        self.0 -= rhs;
    }
}

impl From<Speed> for f64 {
    fn from(value: Speed) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[test]
    fn test_size_swapped() {
        let size = Size::new(25.0, 50.0).swapped();
        assert_abs_diff_eq!(size.width(), 50.0);
        assert_abs_diff_eq!(size.height(), 25.0);
    }

    #[test]
    fn test_heading_degrees_ascend_in_steps() {
        let degrees = all_headings().map(|h| h.to_deg()).collect::<Vec<_>>();
        assert_eq!(degrees, vec![0, 45, 90, 135, 180, 225, 270, 315]);
    }

    #[rstest]
    #[case::east(Heading::East, 0.0)]
    #[case::north(Heading::North, 0.5 * PI)]
    #[case::west(Heading::West, PI)]
    #[case::south_east(Heading::SouthEast, 1.75 * PI)]
    fn test_heading_angle(#[case] heading: Heading, #[case] radians: f64) {
        assert_abs_diff_eq!(f64::from(heading.angle()), radians, epsilon = 1e-12);
    }

    #[rstest]
    #[case::counter_clockwise(Heading::North, 1, Heading::NorthWest)]
    #[case::clockwise(Heading::North, -1, Heading::NorthEast)]
    #[case::wrap_below_zero(Heading::East, -1, Heading::SouthEast)]
    #[case::wrap_at_full_turn(Heading::SouthEast, 1, Heading::East)]
    #[case::several_turns(Heading::West, 17, Heading::SouthWest)]
    fn test_heading_turned(#[case] heading: Heading, #[case] octants: i32, #[case] expected: Heading) {
        assert_eq!(heading.turned(octants), expected);
    }

    #[test]
    fn test_heading_classification() {
        let diagonal = all_headings().filter(|h| h.is_diagonal()).collect::<Vec<_>>();
        assert_eq!(
            diagonal,
            vec![
                Heading::NorthEast,
                Heading::NorthWest,
                Heading::SouthWest,
                Heading::SouthEast
            ]
        );
        let vertical = all_headings().filter(|h| h.is_vertical()).collect::<Vec<_>>();
        assert_eq!(vertical, vec![Heading::North, Heading::South]);
    }

    #[test]
    fn test_speed_accumulates() {
        let mut speed = Speed::default();
        speed += 1.0;
        speed += 1.0;
        speed -= 3.0;
        assert_abs_diff_eq!(f64::from(speed), -1.0);
        assert!(speed.is_reverse());
        speed += 1.0;
        assert!(!speed.is_reverse());
    }

    fn all_headings() -> impl Iterator<Item = Heading> {
        (0..8).map(|octants| Heading::East.turned(octants))
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }
}
