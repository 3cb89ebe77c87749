/// Error types for the library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid vertex count: {0} (must be positive)")]
    InvalidVertexCount(usize),

    #[error("source vertex {source_vertex} out of range for graph with {vertex_count} vertices")]
    SourceOutOfRange { source_vertex: usize, vertex_count: usize },

    #[error("negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("non-finite edge weight: {0}")]
    NonFiniteWeight(f64),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
