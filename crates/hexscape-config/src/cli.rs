//! Command-line argument parsing for Hexscape.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Hexscape command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexscape", about = "Procedural hex-tile terrain generator")]
pub struct CliArgs {
    /// Noise and decoration seed (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Square enumeration bound of the tile grid.
    #[arg(long)]
    pub grid_radius: Option<u32>,

    /// Circular map footprint radius.
    #[arg(long)]
    pub map_radius: Option<f32>,

    /// Tallest possible tile column.
    #[arg(long)]
    pub max_height: Option<f32>,

    /// Skip the sea, rim and floor.
    #[arg(long)]
    pub no_surroundings: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.map.seed = Some(seed);
        }
        if let Some(r) = args.grid_radius {
            self.map.grid_radius = r;
        }
        if let Some(r) = args.map_radius {
            self.map.map_radius = r;
        }
        if let Some(h) = args.max_height {
            self.height.max_height = h;
        }
        if args.no_surroundings {
            self.surroundings.enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(7),
            grid_radius: Some(4),
            no_surroundings: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.seed, Some(7));
        assert_eq!(config.map.grid_radius, 4);
        assert!(!config.surroundings.enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.map.map_radius, 16.0);
        assert_eq!(config.height.max_height, 10.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "hexscape",
            "--seed",
            "99",
            "--max-height",
            "12.5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.max_height, Some(12.5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(!args.no_surroundings);
    }
}
