// src/error.rs

use thiserror::Error;

/// Failures surfaced by heightmap generation and mesh export.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The configured grid size is not `2^k + 1` for some `k >= 1`.
    /// Detected before any grid allocation.
    #[error("invalid grid size {size}: size must be 2^k + 1 with k >= 1")]
    InvalidConfig { size: usize },

    /// An algorithmic invariant was violated (zero valid neighbors,
    /// non-finite height, degenerate normal). A logic defect, not a
    /// recoverable runtime condition.
    #[error("generation invariant violated: {0}")]
    InvalidState(String),

    /// Writing the mesh to the output destination failed.
    #[error("failed to write mesh to {destination}")]
    Io {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}
