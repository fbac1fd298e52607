use serde::{Deserialize, Serialize};

/// Simulation constants consumed by the fixed-timestep physics loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration, blocks/sec².
    pub gravity: f32,
    /// Fixed physics steps per second; the timestep is its reciprocal.
    pub simulation_rate: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 32.0,
            simulation_rate: 200,
        }
    }
}
