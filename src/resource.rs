//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct VehicleRes(domain::Vehicle);

impl Deref for VehicleRes {
    type Target = domain::Vehicle;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VehicleRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Vehicle> for VehicleRes {
    fn from(value: domain::Vehicle) -> Self {
        Self(value)
    }
}
