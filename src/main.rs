use anyhow::Result;
use glam::Vec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::env;
use std::path::Path;

use voxelcraft::{EngineConfig, Physics, PlayerState, World, WorldGenConfig};

/// Headless driver: streams chunks around a walking, falling player for a
/// fixed number of simulated frames and reports what the core did. Rendering
/// and input are external collaborators; this binary stands in for their
/// frame loop.
fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            EngineConfig::load(Path::new(&path))?
        }
        None => EngineConfig {
            worldgen: WorldGenConfig::with_random_seed(),
            ..Default::default()
        },
    };
    info!("world seed: {}", config.worldgen.seed);

    let mut world = World::new(&config.worldgen, config.chunksys.clone());
    let mut physics = Physics::new(&config.physics);

    // Spawn above the center column of the origin chunk.
    let spawn = Vec3::new(
        config.chunksys.chunk_width as f32 / 2.0,
        config.chunksys.chunk_height as f32 + 1.0,
        config.chunksys.chunk_width as f32 / 2.0,
    );
    let mut player = PlayerState::new(spawn);

    let frame_delta = 1.0 / 60.0;
    let frames = 600;
    let mut total_steps = 0;

    for frame in 0..frames {
        // Stand in for the movement collaborator: drift forward, hop when
        // grounded.
        player.velocity.x = 2.0;
        player.velocity.z = 1.0;
        if player.on_ground && frame % 120 == 0 {
            player.velocity.y = 10.0;
            player.on_ground = false;
        }

        world.update(player.position);
        world.process_pending(config.chunksys.generation_budget);
        total_steps += physics.update(frame_delta, &mut player, &world);

        if frame % 120 == 0 {
            info!(
                "frame {frame}: player at ({:.1}, {:.1}, {:.1}), {} chunks loaded, {} pending",
                player.position.x,
                player.position.y,
                player.position.z,
                world.loaded_chunks().count(),
                world.pending_count()
            );
        }
    }

    // Finish whatever generation the frame budget deferred, then hand the
    // rendering collaborator its instance list once.
    world.generate_all();
    let instances = world.build_render_instances();
    info!(
        "simulated {frames} frames ({total_steps} physics steps): {} chunks, {} render instances (wireframe: {})",
        world.chunk_count(),
        instances.len(),
        config.rendering.wireframe
    );
    Ok(())
}
