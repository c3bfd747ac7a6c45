//! UI domain: plugin wiring for the HUD and death overlay.

mod death;
mod hud;

pub use hud::HudHealth;

use bevy::prelude::*;

use crate::ui::death::{clear_death_overlay, show_death_overlay};
use crate::ui::hud::{animate_healthbar, read_health_changes, spawn_player_healthbar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudHealth>()
            .add_systems(Startup, spawn_player_healthbar)
            .add_systems(
                Update,
                (
                    read_health_changes,
                    animate_healthbar,
                    show_death_overlay,
                    clear_death_overlay,
                ),
            );
    }
}
