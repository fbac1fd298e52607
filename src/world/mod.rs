pub mod block;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod generator;
pub mod noise_field;

// Re-export commonly used types
pub use block::{Block, BlockId};
pub use chunk::{Chunk, ChunkState, RenderInstance};
pub use chunk_coord::{local_to_world, world_to_local, ChunkCoord};
pub use self::core::World;
pub use generator::TerrainGenerator;
pub use noise_field::NoiseField;
