use bevy::{prelude::*, window::WindowResolution};

#[cfg(test)]
mod tests;

mod controller;
mod domain;
mod resource;
mod simulator;
mod visualizer;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "radiocar".into(),
                resolution: WindowResolution::new(visualizer::MAP_WIDTH, visualizer::MAP_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(simulator::Simulator)
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .run();
}
