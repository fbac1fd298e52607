use glam::Vec3;

pub const PLAYER_RADIUS: f32 = 0.5;
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Collision subject handed to the physics step each frame. Movement and
/// input live outside this core; the core reads the state and writes back
/// corrected `position`, `velocity` and `on_ground`.
///
/// `position` is the top of the bounding cylinder (eye reference); the
/// cylinder spans `[position.y - height, position.y]`.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub height: f32,
    pub on_ground: bool,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius: PLAYER_RADIUS,
            height: PLAYER_HEIGHT,
            on_ground: false,
        }
    }

    /// Center of the bounding cylinder.
    pub fn center(&self) -> Vec3 {
        self.position - Vec3::new(0.0, self.height / 2.0, 0.0)
    }

    /// Whether a world-space point lies strictly inside the bounding
    /// cylinder.
    pub fn contains(&self, point: Vec3) -> bool {
        let center = self.center();
        let dy = point.y - center.y;
        let dx = point.x - center.x;
        let dz = point.z - center.z;
        dy.abs() < self.height / 2.0 && dx * dx + dz * dz < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cylinder_containment() {
        let player = PlayerState::new(Vec3::new(0.0, 1.8, 0.0));
        // Cylinder spans y in (0, 1.8), radius 0.5 around the origin.
        assert!(player.contains(Vec3::new(0.0, 0.9, 0.0)));
        assert!(player.contains(Vec3::new(0.4, 0.1, 0.0)));
        assert!(!player.contains(Vec3::new(0.5, 0.9, 0.0)));
        assert!(!player.contains(Vec3::new(0.0, 1.8, 0.0)));
        assert!(!player.contains(Vec3::new(0.0, -0.1, 0.0)));
    }
}
