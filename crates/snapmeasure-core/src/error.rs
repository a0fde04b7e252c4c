//! 宿主模型错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Object not found: {0}")]
    ObjectNotFound(u64),

    #[error("No active object")]
    NoActiveObject,

    #[error("Object '{0}' is not a mesh")]
    NotAMesh(String),

    #[error("Vertex index {index} out of range (mesh has {len} vertices)")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("Degenerate edge: both ends are vertex {0}")]
    DegenerateEdge(usize),

    #[error("Snapshot does not match mesh: expected {expected} vertices, got {actual}")]
    SnapshotMismatch { expected: usize, actual: usize },

    #[error("World transform of '{0}' is not invertible")]
    SingularTransform(String),

    #[error("Modifier not found: {0}")]
    ModifierNotFound(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
