use serde::{Deserialize, Serialize};

/// Knobs the rendering collaborator reads; this core never interprets them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Applied uniformly to every block material.
    pub wireframe: bool,
}
