// src/lib.rs

//! Diamond-square terrain generation and Wavefront OBJ mesh export.
//!
//! The pipeline is: validate a [`config::GeneratorConfig`], run
//! [`generator::HeightmapGenerator`] with an injected [`random::RandomSource`]
//! to produce a read-only [`generator::Heightmap`], then hand the grid to
//! [`generator::MeshExporter`] to write the mesh text.

pub mod config;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod random;
