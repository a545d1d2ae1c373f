//! Startup: resolve directories and load the on-disk config before logging
//! comes up.

use hexscape_config::{CliArgs, Config, ConfigError};
use thiserror::Error;

use crate::platform::{PlatformDirs, PlatformError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to prepare directories: {0}")]
    Dirs(#[from] PlatformError),
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),
}

/// Resolve and create the app directories, then load `config.ron` with CLI
/// overrides applied.
///
/// A missing config file is created with defaults. An unreadable or malformed
/// one is an error; the file is left untouched for the user to fix.
pub fn load_config(args: &CliArgs) -> Result<(PlatformDirs, Config), StartupError> {
    let dirs = PlatformDirs::from_override(args.config.as_deref())?;
    dirs.create_dirs()?;
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok((dirs, config))
}
