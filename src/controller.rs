//! Controller steering the vehicle.
//!
//! The vehicle is driven with the arrow keys or by swiping on a touch screen. Input is only
//! accepted while the round is running, so a crashed vehicle stays frozen until it is restarted.

use bevy::prelude::*;

use crate::{domain::Vehicle, resource::VehicleRes, simulator::RoundState};

/// Minimum distance in logical pixels for a touch to count as a swipe.
const SWIPE_THRESHOLD: f32 = 30.0;

const KEY_BINDINGS: [(KeyCode, Steering); 6] = [
    (KeyCode::ArrowUp, Steering::Forward),
    (KeyCode::ArrowDown, Steering::Back),
    (KeyCode::ArrowLeft, Steering::Left),
    (KeyCode::ArrowRight, Steering::Right),
    (KeyCode::Space, Steering::Stop),
    (KeyCode::KeyR, Steering::Restart),
];

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (control_with_keyboard, control_with_touch).run_if(in_state(RoundState::Running)),
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Steering {
    Forward,
    Back,
    Left,
    Right,
    Stop,
    Restart,
}

impl Steering {
    fn apply(self, vehicle: &mut Vehicle) {
        match self {
            Steering::Forward => vehicle.forward(),
            Steering::Back => vehicle.back(),
            Steering::Left => vehicle.left(),
            Steering::Right => vehicle.right(),
            Steering::Stop => vehicle.stop(),
            Steering::Restart => vehicle.restart(),
        }
    }
}

fn control_with_keyboard(keys: Res<ButtonInput<KeyCode>>, mut vehicle: ResMut<VehicleRes>) {
    for (key, steering) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            steering.apply(&mut vehicle);
            debug!("{steering:?} pressed, speed {:?}", vehicle.speed());
        }
    }
}

fn control_with_touch(touches: Res<Touches>, mut vehicle: ResMut<VehicleRes>) {
    for touch in touches.iter_just_released() {
        if let Some(steering) = swipe_steering(touch.start_position(), touch.position()) {
            steering.apply(&mut vehicle);
            debug!("{steering:?} swiped, speed {:?}", vehicle.speed());
        }
    }
}

/// Maps a swipe in window coordinates (y grows downward) to a steering command along its
/// dominant axis. Swiping up accelerates, swiping down decelerates.
fn swipe_steering(start: Vec2, end: Vec2) -> Option<Steering> {
    let delta = end - start;
    if delta.length() < SWIPE_THRESHOLD {
        return None;
    }

    Some(if delta.x.abs() > delta.y.abs() {
        if delta.x < 0.0 {
            Steering::Left
        } else {
            Steering::Right
        }
    } else if delta.y < 0.0 {
        Steering::Forward
    } else {
        Steering::Back
    })
}
