// src/prelude.rs
//! A convenient prelude re-exporting the common terrain types.

pub use crate::config::GeneratorConfig;
pub use crate::error::TerrainError;
pub use crate::generator::{AxisMapping, Heightmap, HeightmapGenerator, MeshExporter};
pub use crate::random::{RandomSource, SeededSource};
