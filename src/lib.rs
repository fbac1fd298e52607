pub mod config;
pub mod physics;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::chunksys::ChunkSysConfig;
pub use config::physics::PhysicsConfig;
pub use config::rendering::RenderConfig;
pub use config::worldgen::{ResourceParams, TerrainParams, WorldGenConfig};
pub use config::EngineConfig;
pub use physics::collision::Contact;
pub use physics::handler::Physics;
pub use player::state::PlayerState;
pub use utils::error::ConfigError;
pub use world::block::{Block, BlockId};
pub use world::chunk::{Chunk, ChunkState, RenderInstance};
pub use world::chunk_coord::ChunkCoord;
pub use world::core::World;
pub use world::generator::TerrainGenerator;
pub use world::noise_field::NoiseField;
