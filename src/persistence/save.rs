//! Save file format and disk IO.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the core exposes for serialization. The format and location
/// of the file are owned here; the combat core only hands over values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub player_position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub respawn_position: Vec2,
}

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Format(e) => write!(f, "format error: {}", e),
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Format(e)
    }
}

pub fn write_save(data: &SaveData, path: &Path) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a save if one exists. A malformed file is logged and ignored
/// rather than propagated.
pub fn load_save(path: &Path) -> Option<SaveData> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Ignoring unreadable save {}: {}", path.display(), e);
            None
        }
    }
}
