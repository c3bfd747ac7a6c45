//! Core domain: app states, world seed, camera, and pause flow.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

/// Seed for deterministic level population.
#[derive(Resource, Debug)]
pub struct WorldSeed(pub u64);

impl Default for WorldSeed {
    fn default() -> Self {
        use rand::Rng;
        Self(rand::rng().random())
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<WorldSeed>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            physics_time.pause();
            next_state.set(GameState::Paused);
            info!("Game paused");
        }
        GameState::Paused => {
            physics_time.unpause();
            next_state.set(GameState::Playing);
            info!("Game resumed");
        }
    }
}
