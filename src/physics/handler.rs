use crate::config::physics::PhysicsConfig;
use crate::physics::collision;
use crate::player::PlayerState;
use crate::world::World;
use log::trace;

/// Fixed-timestep physics driver. Frame deltas feed an accumulator and the
/// simulation advances in exact `1 / simulation_rate` steps, which keeps the
/// outcome independent of frame rate.
pub struct Physics {
    gravity: f32,
    timestep: f32,
    accumulator: f32,
}

impl Physics {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            timestep: 1.0 / config.simulation_rate as f32,
            accumulator: 0.0,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Time still buffered in the accumulator, below one timestep after any
    /// `update` call.
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }

    /// Consumes a frame delta and runs however many whole physics steps fit.
    /// Returns the number of steps executed.
    pub fn update(&mut self, delta: f32, player: &mut PlayerState, world: &World) -> usize {
        // Cap runaway frames so a stall cannot queue an unbounded number of
        // steps.
        self.accumulator += delta.min(0.25);
        let mut steps = 0;
        while self.accumulator >= self.timestep {
            self.step(player, world);
            self.accumulator -= self.timestep;
            steps += 1;
        }
        steps
    }

    /// One physics step: gravity, integration, then collision detection and
    /// resolution against the current chunk set.
    fn step(&self, player: &mut PlayerState, world: &World) {
        player.velocity.y -= self.gravity * self.timestep;
        player.position += player.velocity * self.timestep;

        player.on_ground = false;
        let contacts = collision::detect(player, world);
        if !contacts.is_empty() {
            trace!("resolving {} contacts", contacts.len());
            collision::resolve(contacts, player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChunkSysConfig, TerrainParams, WorldGenConfig};
    use glam::Vec3;

    fn flat_world(surface: u32) -> World {
        let worldgen = WorldGenConfig {
            seed: 1,
            terrain: TerrainParams {
                scale: 50.0,
                magnitude: surface as f32 / 32.0,
                offset: 0.0,
            },
            resources: Vec::new(),
        };
        let chunksys = ChunkSysConfig {
            draw_distance: 0,
            async_generation: false,
            ..Default::default()
        };
        World::new(&worldgen, chunksys)
    }

    #[test]
    fn accumulator_runs_exact_step_counts() {
        let mut physics = Physics::new(&PhysicsConfig {
            gravity: 32.0,
            simulation_rate: 200,
        });
        let world = flat_world(0);
        let mut player = PlayerState::new(Vec3::new(8.0, 25.0, 8.0));

        // 0.01s at 200 Hz is exactly two steps with nothing left over.
        assert_eq!(physics.update(0.01, &mut player, &world), 2);
        assert!(physics.accumulated().abs() < 1e-6);

        // Half a timestep buffers without stepping; the next half completes
        // one step.
        assert_eq!(physics.update(0.0025, &mut player, &world), 0);
        assert_eq!(physics.update(0.0025, &mut player, &world), 1);
        assert!(physics.accumulated().abs() < 1e-6);
    }

    #[test]
    fn gravity_pulls_the_player_down() {
        let mut physics = Physics::new(&PhysicsConfig::default());
        let world = flat_world(0);
        let mut player = PlayerState::new(Vec3::new(8.0, 25.0, 8.0));
        physics.update(0.5, &mut player, &world);
        assert!(player.velocity.y < 0.0);
        assert!(player.position.y < 25.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn falling_player_lands_on_the_surface() {
        let mut physics = Physics::new(&PhysicsConfig::default());
        let world = flat_world(10);
        // Drop from a few blocks above the grass layer at y = 10.
        let mut player = PlayerState::new(Vec3::new(8.0, 16.0, 8.0));

        for _ in 0..120 {
            physics.update(1.0 / 60.0, &mut player, &world);
        }
        assert!(player.on_ground, "player should have landed");
        assert_eq!(player.velocity.y, 0.0);
        // Feet rest on the block's top face at y = 10.5.
        assert!((player.position.y - (10.5 + player.height)).abs() < 1e-3);
    }

    #[test]
    fn resting_contact_is_stable() {
        let mut physics = Physics::new(&PhysicsConfig::default());
        let world = flat_world(10);
        let mut player = PlayerState::new(Vec3::new(8.0, 10.5 + 1.8, 8.0));

        for _ in 0..60 {
            physics.update(1.0 / 60.0, &mut player, &world);
        }
        // No sinking, no bouncing.
        assert!((player.position.y - 12.3).abs() < 1e-3);
        assert!(player.on_ground);
    }
}
