//! Test utils.

use crate::domain::Vehicle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Forward,
    Back,
    Left,
    Right,
    Stop,
    Move,
}

pub fn drive(vehicle: &mut Vehicle, commands: &[Command]) {
    for command in commands {
        apply(vehicle, *command);
    }
}

/// Runs the commands and records the position after every move, rounded to one decimal.
pub fn trace(vehicle: &mut Vehicle, commands: &[Command]) -> String {
    commands
        .iter()
        .filter_map(|command| {
            apply(vehicle, *command);
            (*command == Command::Move).then(|| {
                let position = vehicle.position();
                format!("({:.1}, {:.1})", position.x(), position.y())
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply(vehicle: &mut Vehicle, command: Command) {
    match command {
        Command::Forward => vehicle.forward(),
        Command::Back => vehicle.back(),
        Command::Left => vehicle.left(),
        Command::Right => vehicle.right(),
        Command::Stop => vehicle.stop(),
        Command::Move => vehicle.move_once(),
    }
}
