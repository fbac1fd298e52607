use serde::{Deserialize, Serialize};

/// Chunk dimensions and streaming-window behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSysConfig {
    pub chunk_width: u32,
    pub chunk_height: u32,
    /// Streaming window radius around the avatar, in chunks (Chebyshev).
    pub draw_distance: i32,
    /// Defer generation to `process_pending` slices instead of generating
    /// synchronously inside `update`.
    pub async_generation: bool,
    /// Chunks generated per `process_pending` slice.
    pub generation_budget: usize,
}

impl Default for ChunkSysConfig {
    fn default() -> Self {
        Self {
            chunk_width: 32,
            chunk_height: 32,
            draw_distance: 2,
            async_generation: true,
            generation_budget: 4,
        }
    }
}
