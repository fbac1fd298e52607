use crate::world::block::{Block, BlockId};
use crate::world::chunk_coord::ChunkCoord;
use glam::Vec3;
use std::collections::HashMap;

/// Lifecycle of a chunk's voxel grid. The grid is written once during
/// generation and is read-only afterwards; `get` only answers for `Loaded`
/// chunks at the world level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    Unloaded,
    Generating,
    Loaded,
}

/// A `width * height * width` column of the voxel world, the unit of
/// streaming. Blocks live in a flat array indexed `x + width*(y + height*z)`.
pub struct Chunk {
    coord: ChunkCoord,
    width: u32,
    height: u32,
    blocks: Vec<Block>,
    state: ChunkState,
}

/// A visible block handed to the rendering side: which kind, and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInstance {
    pub id: BlockId,
    pub position: Vec3,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, width: u32, height: u32) -> Self {
        let volume = (width * height * width) as usize;
        Self {
            coord,
            width,
            height,
            blocks: vec![Block::EMPTY; volume],
            state: ChunkState::Unloaded,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ChunkState::Loaded
    }

    pub(crate) fn set_state(&mut self, state: ChunkState) {
        self.state = state;
    }

    /// Replaces the voxel grid with a freshly generated one and marks the
    /// chunk loaded. The new grid must match this chunk's dimensions.
    pub(crate) fn install(&mut self, blocks: Vec<Block>) {
        debug_assert_eq!(blocks.len(), self.blocks.len());
        self.blocks = blocks;
        self.state = ChunkState::Loaded;
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && (x as u32) < self.width
            && y >= 0
            && (y as u32) < self.height
            && z >= 0
            && (z as u32) < self.width
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (x as u32 + self.width * (y as u32 + self.height * z as u32)) as usize
    }

    /// Block at chunk-local coordinates, or `None` outside the local extent.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        Some(self.blocks[self.index(x, y, z)])
    }

    /// Sets the block id at chunk-local coordinates. Out-of-bounds writes are
    /// silently dropped, matching the out-of-bounds read contract.
    pub fn set_id(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let index = self.index(x, y, z);
        self.blocks[index].id = id;
    }

    pub(crate) fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// A block is obstructed when all six axis neighbors inside this chunk
    /// are non-empty. Neighbors beyond the chunk's own bounds count as empty,
    /// so chunk boundaries never occlude.
    pub fn is_obstructed(&self, x: i32, y: i32, z: i32) -> bool {
        const NEIGHBORS: [(i32, i32, i32); 6] = [
            (0, 1, 0),
            (0, -1, 0),
            (-1, 0, 0),
            (1, 0, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];
        NEIGHBORS.iter().all(|&(dx, dy, dz)| {
            self.get(x + dx, y + dy, z + dz)
                .map_or(false, |b| !b.is_empty())
        })
    }

    /// Enumerates every non-empty, unobstructed block for the rendering side,
    /// assigning per-kind instance indices as it goes. Obstructed or empty
    /// blocks keep `instance_id = None`.
    pub fn build_render_instances(&mut self) -> Vec<RenderInstance> {
        for block in &mut self.blocks {
            block.instance_id = None;
        }

        let origin = self.coord.origin(self.width);
        let mut counters: HashMap<BlockId, u32> = HashMap::new();
        let mut instances = Vec::new();

        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                for z in 0..self.width as i32 {
                    let index = self.index(x, y, z);
                    if self.blocks[index].is_empty() || self.is_obstructed(x, y, z) {
                        continue;
                    }
                    let id = self.blocks[index].id;
                    let counter = counters.entry(id).or_insert(0);
                    self.blocks[index].instance_id = Some(*counter);
                    *counter += 1;
                    instances.push(RenderInstance {
                        id,
                        position: Vec3::new(
                            (origin.x + x) as f32,
                            y as f32,
                            (origin.z + z) as f32,
                        ),
                    });
                }
            }
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_cube(side: u32) -> Chunk {
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0), side, side);
        for x in 0..side as i32 {
            for y in 0..side as i32 {
                for z in 0..side as i32 {
                    chunk.set_id(x, y, z, BlockId::STONE);
                }
            }
        }
        chunk
    }

    #[test]
    fn starts_empty_and_unloaded() {
        let chunk = Chunk::new(ChunkCoord::new(1, -2), 4, 8);
        assert_eq!(chunk.state(), ChunkState::Unloaded);
        assert_eq!(chunk.get(0, 0, 0), Some(Block::EMPTY));
        assert_eq!(chunk.get(3, 7, 3), Some(Block::EMPTY));
    }

    #[test]
    fn out_of_bounds_reads_and_writes_are_no_data() {
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0), 4, 4);
        assert_eq!(chunk.get(-1, 0, 0), None);
        assert_eq!(chunk.get(0, 4, 0), None);
        assert_eq!(chunk.get(0, 0, 4), None);
        chunk.set_id(4, 0, 0, BlockId::DIRT);
        chunk.set_id(0, -1, 0, BlockId::DIRT);
        assert!(chunk.blocks().iter().all(|b| b.is_empty()));
    }

    #[test]
    fn interior_block_is_obstructed_boundary_is_not() {
        let chunk = solid_cube(3);
        assert!(chunk.is_obstructed(1, 1, 1));
        // Faces touching the chunk boundary see an empty neighbor.
        assert!(!chunk.is_obstructed(0, 1, 1));
        assert!(!chunk.is_obstructed(2, 2, 2));
    }

    #[test]
    fn render_instances_skip_obstructed_blocks() {
        let mut chunk = solid_cube(3);
        let instances = chunk.build_render_instances();
        // All 27 blocks are stone; only the center is fully surrounded.
        assert_eq!(instances.len(), 26);
        assert!(chunk.get(1, 1, 1).unwrap().instance_id.is_none());
        assert!(chunk.get(0, 0, 0).unwrap().instance_id.is_some());
        // Per-kind instance indices are dense.
        let mut ids: Vec<u32> = (0..3)
            .flat_map(|x| (0..3).flat_map(move |y| (0..3).map(move |z| (x, y, z))))
            .filter_map(|(x, y, z)| chunk.get(x, y, z).unwrap().instance_id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..26).collect::<Vec<_>>());
    }

    #[test]
    fn instance_positions_are_world_space() {
        let mut chunk = Chunk::new(ChunkCoord::new(2, -1), 4, 4);
        chunk.set_id(1, 2, 3, BlockId::GRASS);
        let instances = chunk.build_render_instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].id, BlockId::GRASS);
        assert_eq!(instances[0].position, Vec3::new(9.0, 2.0, -1.0));
    }
}
