use glam::{IVec3, Vec3};
use std::fmt::{self, Display, Formatter};

/// Coordinate of a chunk on the 2D chunk grid. The world is not subdivided
/// vertically, so a chunk coordinate carries no y component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given world-space position.
    pub fn from_world(pos: Vec3, width: u32) -> Self {
        Self::new(
            (pos.x / width as f32).floor() as i32,
            (pos.z / width as f32).floor() as i32,
        )
    }

    /// World-space origin of this chunk's voxel grid.
    pub fn origin(&self, width: u32) -> IVec3 {
        IVec3::new(self.x * width as i32, 0, self.z * width as i32)
    }

    pub fn chebyshev_distance(&self, other: &Self) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// All chunk coordinates within `radius` of this one (inclusive square
    /// neighborhood), in row-major order.
    pub fn window(&self, radius: i32) -> Vec<Self> {
        let side = (2 * radius + 1).max(0) as usize;
        let mut coords = Vec::with_capacity(side * side);
        for x in self.x - radius..=self.x + radius {
            for z in self.z - radius..=self.z + radius {
                coords.push(Self::new(x, z));
            }
        }
        coords
    }
}

impl Display for ChunkCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Splits integer world-space block coordinates into the owning chunk plus
/// local coordinates. Inverse of `local_to_world` for every input.
pub fn world_to_local(x: i32, y: i32, z: i32, width: u32) -> (ChunkCoord, IVec3) {
    let w = width as i32;
    let coord = ChunkCoord::new(x.div_euclid(w), z.div_euclid(w));
    (coord, IVec3::new(x - coord.x * w, y, z - coord.z * w))
}

/// Maps chunk-local block coordinates back to world space.
pub fn local_to_world(coord: ChunkCoord, local: IVec3, width: u32) -> IVec3 {
    coord.origin(width) + local
}
