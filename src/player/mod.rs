pub mod state;

pub use state::{PlayerState, PLAYER_HEIGHT, PLAYER_RADIUS};
