pub mod chunksys;
pub mod physics;
pub mod rendering;
pub mod worldgen;

pub use chunksys::ChunkSysConfig;
pub use physics::PhysicsConfig;
pub use rendering::RenderConfig;
pub use worldgen::{ResourceParams, TerrainParams, WorldGenConfig};

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Aggregate of every tunable surface, loadable from a TOML file. Changing
/// `worldgen` at runtime requires a world regenerate, never an in-place
/// patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub worldgen: WorldGenConfig,
    pub chunksys: ChunkSysConfig,
    pub physics: PhysicsConfig,
    pub rendering: RenderConfig,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
