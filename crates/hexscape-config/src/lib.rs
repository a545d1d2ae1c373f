//! Configuration system for Hexscape.
//!
//! Every tunable of the terrain pass lives here: map footprint, hex layout,
//! biome height bands, decoration odds, cloud distribution and the noise
//! seed. Settings persist to disk as RON, accept CLI overrides via clap and
//! are validated before any tile is generated.

mod cli;
mod config;
mod error;
mod validate;

pub use cli::CliArgs;
pub use config::{
    BandThresholds, CONFIG_FILE_NAME, CloudConfig, Config, DebugConfig, DecorationConfig, HeightConfig,
    LayoutConfig, MapConfig, MaterialConfig, SurroundingsConfig,
};
pub use error::ConfigError;
