//! The `hexscape` binary: load config, generate one map, hand it to the renderer.

use std::process::ExitCode;

use clap::Parser;
use hexscape_app::{SceneSummary, load_config, submit_output};
use hexscape_config::CliArgs;
use hexscape_terrain::{TerrainGenerator, fresh_seed};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (dirs, config) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    hexscape_log::init_logging(Some(&dirs.log_dir), Some(&config));
    info!(config_dir = %dirs.config_dir.display(), "hexscape starting");

    let generator = match TerrainGenerator::new(&config) {
        Ok(generator) => generator,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let seed = config.map.seed.unwrap_or_else(fresh_seed);
    info!(seed, fixed = config.map.seed.is_some(), "map seed");

    let output = generator.generate_seeded(seed);

    let mut scene = SceneSummary::new();
    let drawables = submit_output(&mut scene, &output, &config.materials);
    info!(
        drawables,
        vertices = scene.total_vertices(),
        bytes = scene.total_bytes(),
        "scene ready"
    );

    ExitCode::SUCCESS
}
