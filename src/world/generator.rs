use crate::config::worldgen::{ResourceParams, TerrainParams, WorldGenConfig};
use crate::world::block::{Block, BlockId};
use crate::world::chunk::{Chunk, ChunkState};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::noise_field::NoiseField;
use log::trace;

/// Fills chunk voxel grids from noise. Generation is a pure function of
/// `(seed, params, chunk coordinate)`, so chunks can be produced in any
/// order, on any worker, and regenerated bit-identically.
pub struct TerrainGenerator {
    noise: NoiseField,
    terrain: TerrainParams,
    resources: Vec<ResourceParams>,
}

impl TerrainGenerator {
    pub fn new(config: &WorldGenConfig) -> Self {
        Self {
            noise: NoiseField::new(config.seed),
            terrain: config.terrain.clone(),
            resources: config.resources.clone(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.noise.seed()
    }

    /// Produces the voxel grid for the chunk at `coord`. Two ordered passes:
    /// resource deposits seed the subsurface, then the terrain surface pass
    /// is authoritative for everything at and above ground level.
    pub fn generate(&self, coord: ChunkCoord, width: u32, height: u32) -> Vec<Block> {
        let mut blocks = vec![Block::EMPTY; (width * height * width) as usize];
        self.place_resources(coord, width, height, &mut blocks);
        self.shape_surface(coord, width, height, &mut blocks);
        trace!("generated chunk {coord} (seed {})", self.noise.seed());
        blocks
    }

    /// Runs generation against an existing chunk in place, driving its
    /// lifecycle `Generating -> Loaded`.
    pub fn generate_into(&self, chunk: &mut Chunk) {
        chunk.set_state(ChunkState::Generating);
        let blocks = self.generate(chunk.coord(), chunk.width(), chunk.height());
        chunk.install(blocks);
    }

    fn place_resources(&self, coord: ChunkCoord, width: u32, height: u32, blocks: &mut [Block]) {
        let origin = coord.origin(width);
        for resource in &self.resources {
            for x in 0..width {
                for y in 0..height {
                    for z in 0..width {
                        let value = self.noise.sample_3d(
                            (origin.x + x as i32) as f64 / resource.scale[0] as f64,
                            (origin.y + y as i32) as f64 / resource.scale[1] as f64,
                            (origin.z + z as i32) as f64 / resource.scale[2] as f64,
                        );
                        if value > resource.scarcity {
                            // Later catalog entries win at contested cells.
                            blocks[index(width, height, x, y, z)].id = resource.id;
                        }
                    }
                }
            }
        }
    }

    fn shape_surface(&self, coord: ChunkCoord, width: u32, height: u32, blocks: &mut [Block]) {
        let origin = coord.origin(width);
        for x in 0..width {
            for z in 0..width {
                let value = self.noise.sample_2d(
                    (origin.x + x as i32) as f64 / self.terrain.scale as f64,
                    (origin.z + z as i32) as f64 / self.terrain.scale as f64,
                );
                let scaled = self.terrain.magnitude + self.terrain.offset * value;
                let surface = ((height as f32 * scaled).floor() as i32)
                    .clamp(0, height as i32 - 1) as u32;

                for y in 0..height {
                    let cell = &mut blocks[index(width, height, x, y, z)];
                    if y < surface && cell.id.is_empty() {
                        cell.id = BlockId::DIRT;
                    } else if y == surface {
                        // Grass overwrites any resource placed here.
                        cell.id = BlockId::GRASS;
                    } else if y > surface {
                        // Resources above the surface line are discarded.
                        cell.id = BlockId::EMPTY;
                    }
                }
            }
        }
    }
}

#[inline]
fn index(width: u32, height: u32, x: u32, y: u32, z: u32) -> usize {
    (x + width * (y + height * z)) as usize
}
