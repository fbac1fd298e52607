use crate::config::chunksys::ChunkSysConfig;
use crate::config::worldgen::WorldGenConfig;
use crate::world::block::Block;
use crate::world::chunk::{Chunk, ChunkState, RenderInstance};
use crate::world::chunk_coord::{world_to_local, ChunkCoord};
use crate::world::generator::TerrainGenerator;
use glam::Vec3;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Owns the set of loaded chunks and keeps it pinned to the streaming window
/// around the avatar. Routes world-space block queries to the owning chunk.
pub struct World {
    chunks: HashMap<ChunkCoord, Chunk>,
    pending: VecDeque<ChunkCoord>,
    generator: TerrainGenerator,
    chunksys: ChunkSysConfig,
    center: ChunkCoord,
}

impl World {
    /// Creates the world and fills the initial window around the origin.
    pub fn new(worldgen: &WorldGenConfig, chunksys: ChunkSysConfig) -> Self {
        let mut world = Self {
            chunks: HashMap::new(),
            pending: VecDeque::new(),
            generator: TerrainGenerator::new(worldgen),
            chunksys,
            center: ChunkCoord::new(0, 0),
        };
        info!(
            "world created: seed {}, draw distance {}",
            world.generator.seed(),
            world.chunksys.draw_distance
        );
        world.stream_to(ChunkCoord::new(0, 0));
        world
    }

    pub fn center(&self) -> ChunkCoord {
        self.center
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn loaded_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values().filter(|c| c.is_loaded())
    }

    /// Recomputes the streaming window from the avatar's position, evicting
    /// chunks that left the window before creating the ones that entered it.
    pub fn update(&mut self, avatar_pos: Vec3) {
        let center = ChunkCoord::from_world(avatar_pos, self.chunksys.chunk_width);
        self.stream_to(center);
    }

    fn stream_to(&mut self, center: ChunkCoord) {
        self.center = center;
        let radius = self.chunksys.draw_distance;

        // Evict first to bound peak memory.
        let evicted: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .filter(|c| c.chebyshev_distance(&center) > radius)
            .copied()
            .collect();
        for coord in &evicted {
            self.chunks.remove(coord);
            debug!("evicted chunk {coord}");
        }
        self.pending
            .retain(|c| c.chebyshev_distance(&center) <= radius);

        for coord in center.window(radius) {
            if self.chunks.contains_key(&coord) {
                continue;
            }
            let mut chunk = Chunk::new(coord, self.chunksys.chunk_width, self.chunksys.chunk_height);
            if self.chunksys.async_generation {
                self.pending.push_back(coord);
            } else {
                self.generator.generate_into(&mut chunk);
            }
            self.chunks.insert(coord, chunk);
        }
    }

    /// Cooperative generation slice: fills at most `budget` queued chunks.
    /// Returns how many were generated.
    pub fn process_pending(&mut self, budget: usize) -> usize {
        let mut generated = 0;
        while generated < budget {
            let Some(coord) = self.pending.pop_front() else {
                break;
            };
            let generator = &self.generator;
            if let Some(chunk) = self.chunks.get_mut(&coord) {
                generator.generate_into(chunk);
                generated += 1;
            }
        }
        generated
    }

    /// Blocking drain of the generation queue, fanned out across workers.
    /// Chunk generation only depends on its own coordinate and the shared
    /// immutable params, so order does not matter.
    pub fn generate_all(&mut self) -> usize {
        let coords: Vec<ChunkCoord> = self.pending.drain(..).collect();
        if coords.is_empty() {
            return 0;
        }
        let generator = &self.generator;
        let width = self.chunksys.chunk_width;
        let height = self.chunksys.chunk_height;
        let grids: Vec<(ChunkCoord, Vec<Block>)> = coords
            .par_iter()
            .map(|&coord| (coord, generator.generate(coord, width, height)))
            .collect();

        let mut generated = 0;
        for (coord, blocks) in grids {
            if let Some(chunk) = self.chunks.get_mut(&coord) {
                chunk.install(blocks);
                generated += 1;
            }
        }
        generated
    }

    /// Block at integer world coordinates. `None` means "no data": outside
    /// every loaded chunk, outside the vertical extent, or not yet generated.
    /// Callers treat it exactly like empty.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        let (coord, local) = world_to_local(x, y, z, self.chunksys.chunk_width);
        let chunk = self.chunks.get(&coord)?;
        if !chunk.is_loaded() {
            return None;
        }
        chunk.get(local.x, local.y, local.z)
    }

    /// Swaps generation parameters and rebuilds the window from scratch.
    /// Chunks are never patched in place; regeneration is destroy-then-create.
    pub fn regenerate(&mut self, worldgen: &WorldGenConfig) {
        info!("regenerating world with seed {}", worldgen.seed);
        self.generator = TerrainGenerator::new(worldgen);
        self.chunks.clear();
        self.pending.clear();
        let center = self.center;
        self.stream_to(center);
    }

    /// Render-instance pass over every loaded chunk, for the rendering
    /// collaborator.
    pub fn build_render_instances(&mut self) -> Vec<RenderInstance> {
        let mut instances = Vec::new();
        for chunk in self.chunks.values_mut() {
            if chunk.state() == ChunkState::Loaded {
                instances.extend(chunk.build_render_instances());
            }
        }
        instances
    }
}
