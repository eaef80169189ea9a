use std::path::PathBuf;

use clap::Parser;
use log::info;

use terragen::config::GeneratorConfig;
use terragen::generator::{HeightmapGenerator, MeshExporter};
use terragen::random::SeededSource;

/// Generate a diamond-square terrain heightmap and export it as a Wavefront
/// OBJ mesh.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Resolution exponent k; the grid is (2^k + 1) samples per side.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=12))]
    resolution: u32,

    /// World half-extent along the column axis.
    #[arg(long, default_value_t = 1000.0)]
    x_scale: f32,

    /// World half-extent along the row axis.
    #[arg(long, default_value_t = 1000.0)]
    y_scale: f32,

    /// Multiplier applied to the normalized heights.
    #[arg(long, default_value_t = 100.0)]
    height_scale: f32,

    /// Noise-decay exponent; 1 halves the noise amplitude every level.
    #[arg(long, default_value_t = 1.0)]
    roughness: f32,

    /// RNG seed; omitted means seeding from entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Output OBJ path.
    #[arg(long, default_value = "terrain.obj")]
    out: PathBuf,

    /// Generate the heightmap but skip mesh export.
    #[arg(long)]
    heightmap_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig {
        size: 2usize.pow(args.resolution) + 1,
        x_scale: args.x_scale,
        y_scale: args.y_scale,
        height_scale: args.height_scale,
        roughness: args.roughness,
        export_mesh: !args.heightmap_only,
    };

    let generator = HeightmapGenerator::new(config.clone())?;
    let mut rng = match args.seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };

    let grid = generator.generate(&mut rng)?;
    let (min, max) = grid
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
            (lo.min(h), hi.max(h))
        });
    info!(
        "generated {0}x{0} heightmap, height range [{min:.3}, {max:.3}]",
        grid.size()
    );

    if config.export_mesh {
        MeshExporter::new(&grid, &config).export_to_path(&args.out)?;
        info!("wrote mesh to {}", args.out.display());
    }

    Ok(())
}
