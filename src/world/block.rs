use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Identifier for a registered block kind. Zero is reserved for empty/air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u8);

impl BlockId {
    pub const EMPTY: BlockId = BlockId(0);
    pub const GRASS: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const COAL_ORE: BlockId = BlockId(4);
    pub const IRON_ORE: BlockId = BlockId(5);

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EMPTY => "empty",
            Self::GRASS => "grass",
            Self::DIRT => "dirt",
            Self::STONE => "stone",
            Self::COAL_ORE => "coal_ore",
            Self::IRON_ORE => "iron_ore",
            _ => "unknown",
        }
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One cell of a chunk's voxel grid.
///
/// `instance_id` is assigned during the render-instance pass and only for
/// visible blocks; the rendering side owns its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub instance_id: Option<u32>,
}

impl Block {
    pub const EMPTY: Block = Block {
        id: BlockId::EMPTY,
        instance_id: None,
    };

    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            instance_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_reserved() {
        assert!(BlockId::EMPTY.is_empty());
        assert!(!BlockId::GRASS.is_empty());
        assert!(Block::EMPTY.is_empty());
    }

    #[test]
    fn names_match_catalog() {
        assert_eq!(BlockId::COAL_ORE.name(), "coal_ore");
        assert_eq!(BlockId(200).name(), "unknown");
    }
}
