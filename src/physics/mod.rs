//! Fixed-timestep physics and player-vs-voxel collision resolution.
pub mod collision;
pub mod handler;

pub use collision::Contact;
pub use handler::Physics;
