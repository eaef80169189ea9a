use log::debug;

use crate::config::GeneratorConfig;
use crate::error::TerrainError;
use crate::random::RandomSource;

/// A square grid of height samples, row-major, addressed by (row, col).
/// Mutable only while the generator fills it; callers only ever see it
/// read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    data: Vec<f32>,
    size: usize,
}

impl Heightmap {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Samples per grid edge.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.size + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.size + col] = value;
    }

    /// The raw row-major samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Runs the diamond-square midpoint-displacement algorithm.
pub struct HeightmapGenerator {
    config: GeneratorConfig,
}

impl HeightmapGenerator {
    /// Validates the size constraint up front; no grid is allocated when the
    /// config is rejected.
    pub fn new(config: GeneratorConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fills an N x N grid coarsest-to-finest. The four corners come from
    /// independent uniform draws; every other cell is written exactly once,
    /// at the finest level it participates in, as the mean of its in-bounds
    /// neighbors plus a fresh gaussian sample scaled by the current level's
    /// noise amplitude.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Heightmap, TerrainError> {
        let size = self.config.size;
        let mut grid = Heightmap::new(size);

        grid.set(0, 0, rng.uniform());
        grid.set(0, size - 1, rng.uniform());
        grid.set(size - 1, 0, rng.uniform());
        grid.set(size - 1, size - 1, rng.uniform());

        let mut tile_size = size - 1;
        let mut scale = 1.0f32;

        while tile_size > 1 {
            let half = tile_size / 2;
            debug!("subdividing: tile_size={tile_size} scale={scale}");

            // Diamond step: every tile center from its diagonal corners.
            for row in (half..size).step_by(tile_size) {
                for col in (half..size).step_by(tile_size) {
                    self.displace(&mut grid, row, col, half, scale, Step::Diamond, rng)?;
                }
            }

            // Square step, two sweeps: rows aligned to tile boundaries with
            // offset columns, then rows offset by half with aligned columns.
            for row in (0..size).step_by(tile_size) {
                for col in (half..size).step_by(tile_size) {
                    self.displace(&mut grid, row, col, half, scale, Step::Square, rng)?;
                }
            }
            for row in (half..size).step_by(tile_size) {
                for col in (0..size).step_by(tile_size) {
                    self.displace(&mut grid, row, col, half, scale, Step::Square, rng)?;
                }
            }

            if self.config.roughness == 1.0 {
                scale /= 2.0;
            } else {
                scale /= 2.0f32.powf(self.config.roughness);
            }
            tile_size /= 2;
        }

        Ok(grid)
    }

    /// Averages the in-bounds neighbors of (row, col) at offset `half` and
    /// writes the perturbed mean. Near edges fewer than four neighbors exist;
    /// that is expected. Zero neighbors or a non-finite result is a logic
    /// defect.
    fn displace<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Heightmap,
        row: usize,
        col: usize,
        half: usize,
        scale: f32,
        step: Step,
        rng: &mut R,
    ) -> Result<(), TerrainError> {
        let size = grid.size() as isize;
        let (r, c, h) = (row as isize, col as isize, half as isize);

        let offsets: [(isize, isize); 4] = match step {
            Step::Diamond => [(-h, -h), (-h, h), (h, -h), (h, h)],
            Step::Square => [(-h, 0), (h, 0), (0, -h), (0, h)],
        };

        let mut sum = 0.0f32;
        let mut count = 0u32;
        for (dr, dc) in offsets {
            let (nr, nc) = (r + dr, c + dc);
            if nr >= 0 && nr < size && nc >= 0 && nc < size {
                sum += grid.get(nr as usize, nc as usize);
                count += 1;
            }
        }

        if count == 0 {
            return Err(TerrainError::InvalidState(format!(
                "no valid neighbors at ({row}, {col}) with offset {half}"
            )));
        }

        let value = sum / count as f32 + rng.gaussian() * scale;
        if !value.is_finite() {
            return Err(TerrainError::InvalidState(format!(
                "non-finite height {value} at ({row}, {col})"
            )));
        }

        grid.set(row, col, value);
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Step {
    Diamond,
    Square,
}
