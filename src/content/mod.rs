//! Content domain: RON tuning loader with in-code defaults as fallback.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::combat::{CombatTuning, EnemyTuning, SwingTuning};

const TUNING_PATH: &str = "assets/data/combat_tuning.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk layout of the tuning file. Every section and field is optional;
/// omitted values keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub combat: CombatTuning,
    pub swing: SwingTuning,
    pub enemy: EnemyTuning,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Replace the default tuning resources with values from disk, or keep the
/// defaults if the file is missing or malformed.
fn apply_tuning(mut commands: Commands) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            commands.insert_resource(tuning.combat);
            commands.insert_resource(tuning.swing);
            commands.insert_resource(tuning.enemy);
            info!("Loaded combat tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning);
    }
}
