// src/config.rs

use crate::error::TerrainError;

/// Parameters for a single generate-then-export run. Immutable once
/// generation starts.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Samples per grid edge. Must be `2^k + 1` with `k >= 1`.
    pub size: usize,
    /// World half-extent along the column axis.
    pub x_scale: f32,
    /// World half-extent along the row axis.
    pub y_scale: f32,
    /// Multiplier applied to the [0,1)-normalized heights.
    pub height_scale: f32,
    /// Noise-decay exponent; `1.0` means a literal per-level halving.
    pub roughness: f32,
    /// Whether mesh text is produced at all.
    pub export_mesh: bool,
}

impl GeneratorConfig {
    /// Checks the `2^k + 1` size constraint without allocating anything.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.size >= 3 && (self.size - 1).is_power_of_two() {
            Ok(())
        } else {
            Err(TerrainError::InvalidConfig { size: self.size })
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 33,
            x_scale: 1000.0,
            y_scale: 1000.0,
            height_scale: 100.0,
            roughness: 1.0,
            export_mesh: true,
        }
    }
}
