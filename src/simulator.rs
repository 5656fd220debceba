//! Simulation of the vehicle on the map.
//!
//! The vehicle is advanced once per fixed tick and checked against the map boundary. Hitting the
//! wall stops the vehicle and halts the round. After a delay the vehicle is put back to its start
//! and the round continues.

use std::time::Duration;

use bevy::prelude::*;

use crate::{domain::Vehicle, resource::VehicleRes};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        let settings = SimulatorSettings::default();
        app.init_state::<RoundState>()
            .insert_resource(Time::<Fixed>::from_duration(settings.tick_interval))
            .insert_resource(settings)
            .add_systems(FixedUpdate, simulate.run_if(in_state(RoundState::Running)))
            .add_systems(OnEnter(RoundState::Halted), halt)
            .add_systems(Update, resume.run_if(in_state(RoundState::Halted)));
    }
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct SimulatorSettings {
    pub tick_interval: Duration,
    /// How long the vehicle stays frozen after hitting the wall.
    pub halt_delay: Duration,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(16),
            halt_delay: Duration::from_secs(1),
        }
    }
}

#[derive(States, Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RoundState {
    #[default]
    Running,
    Halted,
}

#[derive(Resource)]
struct HaltTimer(Timer);

fn simulate(mut vehicle: ResMut<VehicleRes>, mut next_state: ResMut<NextState<RoundState>>) {
    if advance(&mut vehicle) {
        let position = vehicle.position();
        info!(
            "Vehicle hit the wall at ({:.1}, {:.1}) heading {}°.",
            position.x(),
            position.y(),
            vehicle.heading().to_deg()
        );
        next_state.set(RoundState::Halted);
    }
}

/// Moves the vehicle by one tick and stops it when it hits the wall. Returns whether the wall
/// was hit.
fn advance(vehicle: &mut Vehicle) -> bool {
    vehicle.move_once();
    let hit = vehicle.hit_wall();
    if hit {
        vehicle.stop();
    }
    hit
}

fn halt(mut commands: Commands, settings: Res<SimulatorSettings>) {
    commands.insert_resource(HaltTimer(Timer::new(settings.halt_delay, TimerMode::Once)));
}

fn resume(
    mut commands: Commands,
    time: Res<Time>,
    timer: Option<ResMut<HaltTimer>>,
    mut vehicle: ResMut<VehicleRes>,
    mut next_state: ResMut<NextState<RoundState>>,
) {
    let Some(mut timer) = timer else {
        return;
    };

    if timer.0.tick(time.delta()).finished() {
        vehicle.restart();
        commands.remove_resource::<HaltTimer>();
        next_state.set(RoundState::Running);
        info!("Game over, vehicle restarted.");
    }
}
