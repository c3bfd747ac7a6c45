//! Movement domain: plugin wiring and public exports.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{Facing, GameLayer, Ground, InputLocked, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{spawn_ground, spawn_player};
use crate::movement::systems::input::read_input;
use crate::movement::systems::movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, detect_ground, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_ground, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    update_facing,
                    apply_horizontal_movement,
                    apply_jump,
                    apply_gravity,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
