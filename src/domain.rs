//! The domain module encapsulates the core driving rules. It defines the `Vehicle` and the `Map`
//! it drives on, along with the kinematics and the boundary check.
//!
//! The module has no dependency on Bevy, so the rules stay independent of how the vehicle is
//! rendered or controlled.

mod basis;
mod collision;
mod map;
mod vehicle;

pub use basis::{Angle, Heading, Position, Size, Speed};
pub use collision::{HasCollision, Rectangle};
pub use map::Map;
pub use vehicle::{BodySizing, Vehicle, VehicleConfig};
