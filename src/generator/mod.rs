mod heightmap;
mod mesh;

pub use heightmap::{Heightmap, HeightmapGenerator};
pub use mesh::{AxisMapping, MeshExporter};

#[cfg(test)]
mod tests;
