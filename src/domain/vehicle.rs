//! Vehicle driving in eight discrete directions on a rectangular map.
//!
//! The heading is restricted to the compass points. Each tick the vehicle is displaced along a
//! direction obtained by quantizing the heading's cosine and sine to {-1, 0, 1}, which yields
//! arcade-like eight-way movement. Diagonal steps are scaled so that their length per axis is
//! `speed / √2`.

use std::f64::consts::SQRT_2;

use nalgebra::Vector2;

use super::{HasCollision, Heading, Map, Position, Rectangle, Size, Speed};

/// Map-derived body width is the smaller map dimension divided by this.
const MAP_TO_BODY_DIVISOR: f64 = 10.0;

/// Threshold for quantizing a direction component to -1, 0 or 1.
const DEADBAND: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Vehicle {
    position: Position,
    heading: Heading,
    speed: Speed,
    body: Size,
    map: Map,
    config: VehicleConfig,
}

impl Vehicle {
    /// Vehicle with a fixed body.
    ///
    /// `set_map_size` leaves a fixed body as it is; only map-derived bodies are rescaled.
    pub fn new(map_width: f64, map_height: f64, body_width: f64, body_height: f64) -> Self {
        Self::with_config(
            Map::new(map_width, map_height),
            VehicleConfig {
                body: BodySizing::Fixed(Size::new(body_width, body_height)),
                ..VehicleConfig::default()
            },
        )
    }

    /// Vehicle whose body is a tenth of the smaller map dimension wide and half as tall, and is
    /// rescaled whenever the map is resized.
    pub fn map_relative(map_width: f64, map_height: f64) -> Self {
        Self::with_config(
            Map::new(map_width, map_height),
            VehicleConfig {
                body: BodySizing::MapRelative,
                ..VehicleConfig::default()
            },
        )
    }

    pub fn with_config(map: Map, config: VehicleConfig) -> Self {
        let mut vehicle = Self {
            position: Position::default(),
            heading: Heading::default(),
            speed: Speed::default(),
            body: config.body.size_for(&map),
            map,
            config,
        };
        vehicle.restart();
        vehicle
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn body(&self) -> Size {
        self.body
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn forward(&mut self) {
        self.speed += self.config.acceleration;
    }

    pub fn back(&mut self) {
        self.speed -= self.config.acceleration;
    }

    pub fn left(&mut self) {
        self.steer(1);
    }

    pub fn right(&mut self) {
        self.steer(-1);
    }

    pub fn stop(&mut self) {
        self.speed = Speed::default();
    }

    /// Resets speed, heading and position. Map and body are kept.
    pub fn restart(&mut self) {
        self.speed = Speed::default();
        self.heading = Heading::North;
        self.position = Position::new(
            self.map.width() / 2.0 - self.body.width() / 2.0,
            self.map.height() / 2.0 - self.body.height() / 2.0,
        );
    }

    /// Updates the map bounds and the map-derived body dimensions. The position stays as it is
    /// until the next restart.
    pub fn set_map_size(&mut self, width: f64, height: f64) {
        self.map = Map::new(width, height);
        self.body = self.config.body.size_for(&self.map);
    }

    /// Advances the vehicle by one tick.
    pub fn move_once(&mut self) {
        let displacement = self.movement() * self.step_speed();
        // Screen y grows downward while the movement vector points up for positive y.
        self.position = self.position + Position::new(displacement.x, -displacement.y);
    }

    /// Eight-way direction of travel with components in {-1, 0, 1}.
    pub fn movement(&self) -> Vector2<f64> {
        let angle: f64 = self.heading.angle().into();
        Vector2::new(quantize(angle.cos()), quantize(angle.sin()))
    }

    /// Axis-aligned extent used for the boundary check at the current heading.
    pub fn hit_zone(&self) -> Size {
        if self.heading.is_diagonal() {
            Size::new(self.body.width(), self.body.width())
        } else if self.heading.is_vertical() {
            self.body.swapped()
        } else {
            self.body
        }
    }

    pub fn hit_wall(&self) -> bool {
        !self.map.contains(self)
    }

    fn steer(&mut self, octants: i32) {
        let octants = if self.speed.is_reverse() {
            -octants
        } else {
            octants
        };
        self.heading = self.heading.turned(octants);
    }

    /// Speed applied to this tick's displacement. The stored speed is left untouched.
    fn step_speed(&self) -> f64 {
        let speed: f64 = self.speed.into();
        if self.heading.is_diagonal() {
            speed / SQRT_2
        } else {
            speed
        }
    }
}

impl HasCollision for Vehicle {
    fn shape(&self) -> Rectangle {
        let zone = self.hit_zone();
        Rectangle::new(self.position, zone.width(), zone.height())
    }
}

fn quantize(value: f64) -> f64 {
    if value <= -DEADBAND {
        -1.0
    } else if value >= DEADBAND {
        1.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct VehicleConfig {
    /// Speed change per forward or back command.
    pub acceleration: f64,
    pub body: BodySizing,
}

impl VehicleConfig {
    pub const fn new(acceleration: f64, body: BodySizing) -> Self {
        VehicleConfig { acceleration, body }
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new(1.0, BodySizing::MapRelative)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum BodySizing {
    Fixed(Size),
    /// Width is a tenth of the smaller map dimension, height is half the width.
    MapRelative,
}

impl BodySizing {
    pub fn size_for(&self, map: &Map) -> Size {
        match *self {
            BodySizing::Fixed(size) => size,
            BodySizing::MapRelative => {
                let width = map.min_dimension() / MAP_TO_BODY_DIVISOR;
                Size::new(width, width / 2.0)
            }
        }
    }
}
