
use crate::config::GeneratorConfig;
use crate::random::RandomSource;

pub fn test_config(size: usize) -> GeneratorConfig {
    GeneratorConfig {
        size,
        x_scale: 1000.0,
        y_scale: 1000.0,
        height_scale: 100.0,
        roughness: 1.0,
        export_mesh: true,
    }
}

/// Noise-free source: every corner starts at 0.5 and no perturbation is ever
/// applied, so every cell must come out as the exact mean of its neighbors.
pub struct FlatSource;

impl RandomSource for FlatSource {
    fn uniform(&mut self) -> f32 {
        0.5
    }

    fn gaussian(&mut self) -> f32 {
        0.0
    }
}

/// Replays predetermined uniform and gaussian streams so small grids can be
/// checked against hand-computed values.
pub struct ScriptedSource {
    uniforms: Vec<f32>,
    gaussians: Vec<f32>,
    next_uniform: usize,
    next_gaussian: usize,
}

impl ScriptedSource {
    pub fn new(uniforms: Vec<f32>, gaussians: Vec<f32>) -> Self {
        Self {
            uniforms,
            gaussians,
            next_uniform: 0,
            next_gaussian: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f32 {
        let value = self.uniforms[self.next_uniform];
        self.next_uniform += 1;
        value
    }

    fn gaussian(&mut self) -> f32 {
        let value = self.gaussians[self.next_gaussian];
        self.next_gaussian += 1;
        value
    }
}
