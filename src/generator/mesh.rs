use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Vector3;

use crate::config::GeneratorConfig;
use crate::error::TerrainError;
use crate::generator::Heightmap;

/// How the grid's (planar-col, planar-row, height) triple lands on the three
/// output axes. Applied exactly once, at the export boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisMapping {
    /// Y-up, right-handed: columns map to +X, height to +Y, rows to -Z.
    #[default]
    YUp,
    /// Z-up: columns map to +X, rows to +Y, height to +Z.
    ZUp,
}

impl AxisMapping {
    fn apply(self, planar_col: f32, planar_row: f32, up: f32) -> [f32; 3] {
        match self {
            AxisMapping::YUp => [planar_col, up, -planar_row],
            AxisMapping::ZUp => [planar_col, planar_row, up],
        }
    }
}

/// Converts a frozen heightmap plus scale configuration into Wavefront OBJ
/// text: all positions, then all normals, then all texcoords, then the faces.
/// Pure over its inputs; export never mutates the grid and draws no
/// randomness.
pub struct MeshExporter<'a> {
    grid: &'a Heightmap,
    config: &'a GeneratorConfig,
    mapping: AxisMapping,
}

impl<'a> MeshExporter<'a> {
    pub fn new(grid: &'a Heightmap, config: &'a GeneratorConfig) -> Self {
        Self {
            grid,
            config,
            mapping: AxisMapping::default(),
        }
    }

    pub fn with_mapping(mut self, mapping: AxisMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Writes the mesh to a file, creating or truncating it.
    pub fn export_to_path(&self, path: &Path) -> Result<(), TerrainError> {
        let destination = path.display().to_string();
        let file = File::create(path).map_err(|source| TerrainError::Io {
            destination: destination.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.export_to_writer(&mut writer, &destination)?;
        writer.flush().map_err(|source| TerrainError::Io {
            destination,
            source,
        })
    }

    /// Writes the mesh to an arbitrary sink. `destination` labels the sink in
    /// any reported I/O failure.
    pub fn export_to_writer<W: Write>(
        &self,
        writer: &mut W,
        destination: &str,
    ) -> Result<(), TerrainError> {
        self.write_positions(writer)
            .map_err(|e| io_failure(destination, e))?;
        self.write_normals(writer, destination)?;
        self.write_texcoords(writer)
            .map_err(|e| io_failure(destination, e))?;
        self.write_faces(writer)
            .map_err(|e| io_failure(destination, e))
    }

    /// `v` records: grid coordinates scaled into
    /// [-x_scale, x_scale] x [-y_scale, y_scale], height scaled by
    /// height_scale, then remapped onto the output axes.
    fn write_positions<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let size = self.grid.size();
        let inv = 1.0 / (size - 1) as f32;

        for row in 0..size {
            for col in 0..size {
                let planar_col = self.config.x_scale * (2.0 * col as f32 * inv - 1.0);
                let planar_row = self.config.y_scale * (2.0 * row as f32 * inv - 1.0);
                let up = self.config.height_scale * self.grid.get(row, col);
                let [x, y, z] = self.mapping.apply(planar_col, planar_row, up);
                writeln!(writer, "v {x} {y} {z}")?;
            }
        }
        Ok(())
    }

    /// `vn` records: central differences of height along each grid axis,
    /// one-sided (divisor 1) at boundary rows/columns, scaled by
    /// height_scale / planar_scale * (N-1)/2, up-component 1, then
    /// normalized.
    fn write_normals<W: Write>(
        &self,
        writer: &mut W,
        destination: &str,
    ) -> Result<(), TerrainError> {
        let size = self.grid.size();
        let scaling_col = self.config.height_scale / self.config.x_scale * (size - 1) as f32 / 2.0;
        let scaling_row = self.config.height_scale / self.config.y_scale * (size - 1) as f32 / 2.0;

        for row in 0..size {
            for col in 0..size {
                let h = |r: usize, c: usize| self.grid.get(r, c);

                let left = if col > 0 { h(row, col - 1) } else { h(row, col) };
                let right = if col < size - 1 { h(row, col + 1) } else { h(row, col) };
                let top = if row > 0 { h(row - 1, col) } else { h(row, col) };
                let bottom = if row < size - 1 { h(row + 1, col) } else { h(row, col) };

                let d_col = if col > 0 && col < size - 1 { 2.0 } else { 1.0 };
                let d_row = if row > 0 && row < size - 1 { 2.0 } else { 1.0 };

                let grad_col = (right - left) / d_col;
                let grad_row = (bottom - top) / d_row;

                let raw = Vector3::new(-grad_col * scaling_col, -grad_row * scaling_row, 1.0);
                let length = raw.norm();
                if !length.is_finite() || length == 0.0 {
                    return Err(TerrainError::InvalidState(format!(
                        "degenerate normal at ({row}, {col}): length {length}"
                    )));
                }
                let unit = raw / length;

                let [x, y, z] = self.mapping.apply(unit.x, unit.y, unit.z);
                writeln!(writer, "vn {x} {y} {z}")
                    .map_err(|e| io_failure(destination, e))?;
            }
        }
        Ok(())
    }

    fn write_texcoords<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let size = self.grid.size();
        let inv = 1.0 / (size - 1) as f32;

        for row in 0..size {
            for col in 0..size {
                let u = col as f32 * inv;
                let v = row as f32 * inv;
                writeln!(writer, "vt {u} {v}")?;
            }
        }
        Ok(())
    }

    /// `f` records: two triangles per grid cell with consistent winding.
    /// OBJ indices are 1-based and the same index serves position, texcoord,
    /// and normal.
    fn write_faces<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let size = self.grid.size();

        for row in 0..size - 1 {
            for col in 0..size - 1 {
                let top_left = row * size + col + 1;
                let top_right = row * size + (col + 1) + 1;
                let bottom_right = (row + 1) * size + (col + 1) + 1;
                let bottom_left = (row + 1) * size + col + 1;

                writeln!(
                    writer,
                    "f {top_left}/{top_left}/{top_left} \
                     {top_right}/{top_right}/{top_right} \
                     {bottom_right}/{bottom_right}/{bottom_right}"
                )?;
                writeln!(
                    writer,
                    "f {top_left}/{top_left}/{top_left} \
                     {bottom_right}/{bottom_right}/{bottom_right} \
                     {bottom_left}/{bottom_left}/{bottom_left}"
                )?;
            }
        }
        Ok(())
    }
}

fn io_failure(destination: &str, source: std::io::Error) -> TerrainError {
    TerrainError::Io {
        destination: destination.to_string(),
        source,
    }
}
