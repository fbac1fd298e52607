use crate::player::PlayerState;
use crate::world::World;
use glam::{IVec3, Vec3};

/// One penetration between the player cylinder and a candidate block,
/// recorded by the narrow phase.
#[derive(Debug, Clone)]
pub struct Contact {
    pub block: IVec3,
    pub point: Vec3,
    pub normal: Vec3,
    pub overlap: f32,
    /// The contact is a vertical one with the block below the player.
    pub ground: bool,
}

/// Broad then narrow phase against the current chunk set. Returns every
/// penetrating contact; an empty result means the step is a no-op.
pub fn detect(player: &PlayerState, world: &World) -> Vec<Contact> {
    narrow_phase(&broad_phase(player, world), player)
}

/// Integer block-coordinate box covering the player's cylinder, filtered to
/// non-empty blocks. Unloaded coordinates read as empty.
fn broad_phase(player: &PlayerState, world: &World) -> Vec<IVec3> {
    let p = player.position;
    let min_x = (p.x - player.radius).floor() as i32;
    let max_x = (p.x + player.radius).ceil() as i32;
    let min_y = (p.y - player.height).floor() as i32;
    let max_y = (p.y + player.height).ceil() as i32;
    let min_z = (p.z - player.radius).floor() as i32;
    let max_z = (p.z + player.radius).ceil() as i32;

    let mut candidates = Vec::new();
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            for z in min_z..=max_z {
                match world.get_block(x, y, z) {
                    Some(block) if !block.is_empty() => candidates.push(IVec3::new(x, y, z)),
                    _ => {}
                }
            }
        }
    }
    candidates
}

/// Precise cylinder-vs-unit-cube overlap. Each candidate cube is centered on
/// its integer coordinates, extending ±0.5 on every axis.
fn narrow_phase(candidates: &[IVec3], player: &PlayerState) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let center = player.center();

    for &block in candidates {
        // Closest point on the cube to the cylinder's center axis.
        let point = Vec3::new(
            center.x.clamp(block.x as f32 - 0.5, block.x as f32 + 0.5),
            center.y.clamp(block.y as f32 - 0.5, block.y as f32 + 0.5),
            center.z.clamp(block.z as f32 - 0.5, block.z as f32 + 0.5),
        );

        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let dz = point.z - center.z;
        if !player.contains(point) {
            continue;
        }

        let overlap_y = player.height / 2.0 - dy.abs();
        let overlap_xz = player.radius - (dx * dx + dz * dz).sqrt();

        let (normal, overlap, ground) = if overlap_y < overlap_xz {
            // Vertical resolution, normal pointing away from the block.
            (Vec3::new(0.0, -dy.signum(), 0.0), overlap_y, dy < 0.0)
        } else {
            let horizontal = Vec3::new(-dx, 0.0, -dz);
            let length = horizontal.length();
            if length <= f32::EPSILON {
                // Unit cube geometry cannot produce this; a zero-length
                // normal here is a defect upstream, not a runtime case.
                debug_assert!(false, "degenerate horizontal contact normal at {block}");
                continue;
            }
            (horizontal / length, overlap_xz, false)
        };

        contacts.push(Contact {
            block,
            point,
            normal,
            overlap,
            ground,
        });
    }
    contacts
}

/// Resolves contacts smallest penetration first, so a deep correction is not
/// undone by a shallow one processed after it. Each contact is re-validated
/// against the already-corrected cylinder before being applied.
pub fn resolve(mut contacts: Vec<Contact>, player: &mut PlayerState) {
    contacts.sort_by(|a, b| a.overlap.total_cmp(&b.overlap));

    for contact in &contacts {
        // An earlier correction in this pass may have separated us already.
        if !player.contains(contact.point) {
            continue;
        }

        player.position += contact.normal * contact.overlap;

        // Cancel only the velocity component moving into the surface.
        let into = player.velocity.dot(contact.normal);
        if into < 0.0 {
            player.velocity -= contact.normal * into;
        }

        if contact.ground {
            player.velocity.y = player.velocity.y.max(0.0);
            player.on_ground = true;
        }
    }
}
