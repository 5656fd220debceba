//! 2D visualization.
//!
//! The map fills the window and the vehicle is drawn as a sprite sized to its body. Resizing the
//! window resizes the map.

use bevy::{prelude::*, window::WindowResized};

use crate::{
    domain::{Map, Position, Size, Vehicle},
    resource::VehicleRes,
    simulator::RoundState,
};

pub const MAP_WIDTH: f32 = 800.0;
pub const MAP_HEIGHT: f32 = 600.0;

const MAP_COLOR: Color = Color::rgb(0.16, 0.18, 0.2);
const VEHICLE_COLOR: Color = Color::rgb(0.2, 0.7, 0.3);

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(
                Update,
                (
                    handle_window_resize,
                    (update_map, update_vehicle, update_text),
                )
                    .chain(),
            )
            .insert_resource(create_vehicle());
    }
}

#[derive(Component)]
struct MapSurface;

#[derive(Component)]
struct VehicleSprite;

#[derive(Component)]
struct StatusText;

fn create_vehicle() -> VehicleRes {
    let (width, height) = (MAP_WIDTH as f64, MAP_HEIGHT as f64);
    let vehicle = Vehicle::map_relative(width, height);
    info!(
        "Created vehicle with body {:?} ({:?}) on a {width}x{height} map.",
        vehicle.body(),
        vehicle.config().body
    );
    vehicle.into()
}

fn set_up(mut commands: Commands, vehicle: Res<VehicleRes>) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: MAP_COLOR,
                custom_size: Some(to_bevy_size(vehicle.map().size())),
                ..default()
            },
            ..default()
        },
        MapSurface,
    ));

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: VEHICLE_COLOR,
                custom_size: Some(to_bevy_size(vehicle.body())),
                ..default()
            },
            transform: vehicle_transform(&vehicle),
            ..default()
        },
        VehicleSprite,
    ));

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 20.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        }),
        StatusText,
    ));
}

fn handle_window_resize(
    mut events: EventReader<WindowResized>,
    mut vehicle: ResMut<VehicleRes>,
) {
    for event in events.read() {
        vehicle.set_map_size(event.width as f64, event.height as f64);
        info!(
            "Map resized to {}x{}, body is now {:?}.",
            event.width,
            event.height,
            vehicle.body()
        );
    }
}

fn update_map(mut surfaces: Query<&mut Sprite, With<MapSurface>>, vehicle: Res<VehicleRes>) {
    let Ok(mut sprite) = surfaces.get_single_mut() else {
        warn!("Map surface is missing.");
        return;
    };
    sprite.custom_size = Some(to_bevy_size(vehicle.map().size()));
}

fn update_vehicle(
    mut sprites: Query<(&mut Sprite, &mut Transform), With<VehicleSprite>>,
    vehicle: Res<VehicleRes>,
) {
    let Ok((mut sprite, mut transform)) = sprites.get_single_mut() else {
        warn!("Vehicle sprite is missing.");
        return;
    };
    sprite.custom_size = Some(to_bevy_size(vehicle.body()));
    *transform = vehicle_transform(&vehicle);
}

fn update_text(
    mut texts: Query<&mut Text, With<StatusText>>,
    vehicle: Res<VehicleRes>,
    state: Res<State<RoundState>>,
) {
    let Ok(mut text) = texts.get_single_mut() else {
        return;
    };
    text.sections[0].value = status_line(&vehicle, *state.get());
}

fn status_line(vehicle: &Vehicle, state: RoundState) -> String {
    let speed: f64 = vehicle.speed().into();
    let heading = vehicle.heading().to_deg();
    match state {
        RoundState::Running => format!("SPD: {speed:3.0}   HDG: {heading:3}°"),
        RoundState::Halted => format!("SPD: {speed:3.0}   HDG: {heading:3}°   GAME OVER"),
    }
}

/// The sprite's width axis points along the heading.
fn vehicle_transform(vehicle: &Vehicle) -> Transform {
    Transform::from_translation(to_bevy_position(vehicle.position(), vehicle.map()).extend(1.0))
        .with_rotation(Quat::from_rotation_z(vehicle.heading().angle().into()))
}

/// Converts from map coordinates (origin top-left, y down) to world coordinates (origin at the
/// map center, y up).
fn to_bevy_position(position: Position, map: &Map) -> Vec2 {
    let center = map.center();
    let (x, y): (f64, f64) = position.into();
    Vec2::new((x - center.x()) as f32, (center.y() - y) as f32)
}

fn to_bevy_size(size: Size) -> Vec2 {
    Vec2::new(size.width() as f32, size.height() as f32)
}
