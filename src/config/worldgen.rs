use crate::world::block::BlockId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape of the terrain surface: `height = floor(chunk_height * (magnitude +
/// offset * noise))`, clamped to the vertical extent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub scale: f32,
    pub magnitude: f32,
    pub offset: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            scale: 50.0,
            magnitude: 0.5,
            offset: 0.5,
        }
    }
}

/// Noise parameters for one resource deposit kind. A cell becomes this
/// resource when the 3D sample at `(world / scale)` exceeds `scarcity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceParams {
    pub id: BlockId,
    pub name: String,
    pub scale: [f32; 3],
    pub scarcity: f32,
}

/// World generation surface: seed, terrain shaping, and the ordered resource
/// catalog (later entries overwrite earlier ones where both trigger).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub seed: u32,
    pub terrain: TerrainParams,
    pub resources: Vec<ResourceParams>,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            terrain: TerrainParams::default(),
            resources: default_resources(),
        }
    }
}

impl WorldGenConfig {
    /// Default config with a randomized seed, for worlds without a config
    /// file pinning one.
    pub fn with_random_seed() -> Self {
        Self {
            seed: rand::thread_rng().gen_range(0..1000),
            ..Default::default()
        }
    }
}

/// The stock resource catalog: stone, then coal ore, then iron ore.
pub fn default_resources() -> Vec<ResourceParams> {
    vec![
        ResourceParams {
            id: BlockId::STONE,
            name: "stone".into(),
            scale: [30.0, 30.0, 30.0],
            scarcity: 0.5,
        },
        ResourceParams {
            id: BlockId::COAL_ORE,
            name: "coal_ore".into(),
            scale: [20.0, 20.0, 20.0],
            scarcity: 0.8,
        },
        ResourceParams {
            id: BlockId::IRON_ORE,
            name: "iron_ore".into(),
            scale: [30.0, 30.0, 30.0],
            scarcity: 0.9,
        },
    ]
}
