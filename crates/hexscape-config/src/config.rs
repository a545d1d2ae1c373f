//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map footprint, seed and noise sampling.
    pub map: MapConfig,
    /// Hex-to-world projection.
    pub layout: LayoutConfig,
    /// Height range and biome bands.
    pub height: HeightConfig,
    /// Rock and tree decoration.
    pub decoration: DecorationConfig,
    /// Floating cloud clusters.
    pub clouds: CloudConfig,
    /// Sea, rim and floor around the tile disc.
    pub surroundings: SurroundingsConfig,
    /// Material hints handed to the renderer.
    pub materials: MaterialConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Map footprint and noise sampling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Square enumeration bound: tiles span `[-grid_radius, grid_radius]` on both axes.
    pub grid_radius: u32,
    /// Tiles whose projected position lies farther than this from the origin are skipped.
    pub map_radius: f32,
    /// Noise seed. `None` draws a fresh seed for every run.
    pub seed: Option<u64>,
    /// Multiplier applied to tile coordinates before sampling noise.
    pub noise_scale: f64,
    /// Exponent applied to normalized noise. Values above 1 favour lowland.
    pub height_exponent: f64,
}

/// Hex-to-world projection and tile column shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between neighbouring columns.
    pub col_spacing: f32,
    /// Vertical distance between neighbouring rows.
    pub row_spacing: f32,
    /// Circumradius of a tile column.
    pub tile_radius: f32,
    /// Radial segments of a tile column (6 for a true hexagon).
    pub tile_segments: u32,
}

/// Lower bounds of each biome band, as fractions of `max_height`.
///
/// A tile belongs to the first band (highest first) whose bound its height
/// strictly exceeds; the lowest band also catches a height of exactly zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BandThresholds {
    pub stone: f32,
    pub dirt: f32,
    pub grass: f32,
    pub sand: f32,
    pub dirt2: f32,
}

/// Height range and biome bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeightConfig {
    /// Tallest possible tile column.
    pub max_height: f32,
    /// Biome band lower bounds.
    pub bands: BandThresholds,
}

/// Rock and tree decoration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecorationConfig {
    /// Probability that a Stone- or Sand-band tile grows a rock.
    pub stone_chance: f32,
    /// Rock radius range `[min, max)`.
    pub stone_radius: (f32, f32),
    /// Maximum horizontal offset of a rock from the tile centre, per axis.
    pub stone_jitter: f32,
    /// Width and height segments of a rock sphere.
    pub stone_segments: u32,
    /// Probability that a Grass-band tile grows a tree.
    pub tree_chance: f32,
    /// Tree height range `[min, max)`.
    pub tree_height: (f32, f32),
    /// Radial segments of each tree cone.
    pub tree_segments: u32,
}

/// Floating cloud clusters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Exclusive upper bound of the cloud count.
    pub max_count: u32,
    /// Exponent applied to the count draw. Values below 1 favour fewer clouds.
    pub count_exponent: f32,
    /// Puff radius range `[min, max)`.
    pub puff_radius: (f32, f32),
    /// Horizontal distance between neighbouring puffs of one cloud.
    pub puff_spacing: f32,
    /// Maximum upward jitter of a single puff.
    pub puff_lift: f32,
    /// Clouds are centred within `[-spread, spread)` on both horizontal axes.
    pub spread: f32,
    /// Cloud altitude range `[min, max)`.
    pub altitude: (f32, f32),
    /// Width and height segments of each puff sphere.
    pub puff_segments: u32,
}

/// Sea, rim and floor framing the tile disc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurroundingsConfig {
    /// Build the surroundings at all.
    pub enabled: bool,
    /// Radius of the sea disc.
    pub sea_radius: f32,
    /// Radial segments of the sea disc.
    pub sea_segments: u32,
    /// Radius of the rim where it meets the sea.
    pub rim_top_radius: f32,
    /// Radius of the rim at its base (and of the floor).
    pub rim_bottom_radius: f32,
    /// Radial segments of the rim and floor.
    pub rim_segments: u32,
}

/// Material hints passed along with every batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    /// Directory holding biome textures and the environment map.
    pub asset_dir: String,
    /// Environment map file name inside `asset_dir`.
    pub env_map: String,
    pub tile_env_intensity: f32,
    pub cloud_env_intensity: f32,
    pub sea_env_intensity: f32,
    pub rim_env_intensity: f32,
    pub floor_env_intensity: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to `hexscape.log` in the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_radius: 15,
            map_radius: 16.0,
            seed: None,
            noise_scale: 0.1,
            height_exponent: 1.5,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            col_spacing: 1.77,
            row_spacing: 1.535,
            tile_radius: 1.0,
            tile_segments: 6,
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            stone: 0.8,
            dirt: 0.7,
            grass: 0.5,
            sand: 0.3,
            dirt2: 0.0,
        }
    }
}

impl Default for HeightConfig {
    fn default() -> Self {
        Self {
            max_height: 10.0,
            bands: BandThresholds::default(),
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            stone_chance: 0.2,
            stone_radius: (0.1, 0.4),
            stone_jitter: 0.4,
            stone_segments: 7,
            tree_chance: 0.2,
            tree_height: (1.25, 2.25),
            tree_segments: 5,
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            max_count: 4,
            count_exponent: 0.45,
            puff_radius: (0.5, 1.5),
            puff_spacing: 1.85,
            puff_lift: 0.3,
            spread: 10.0,
            altitude: (7.0, 14.0),
            puff_segments: 7,
        }
    }
}

impl Default for SurroundingsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sea_radius: 17.0,
            sea_segments: 50,
            rim_top_radius: 17.01,
            rim_bottom_radius: 18.5,
            rim_segments: 64,
        }
    }
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            asset_dir: "assets".to_string(),
            env_map: "envmap.hdr".to_string(),
            tile_env_intensity: 0.5,
            cloud_env_intensity: 0.75,
            sea_env_intensity: 0.2,
            rim_env_intensity: 0.2,
            floor_env_intensity: 0.1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl BandThresholds {
    /// Band bounds as fractions, highest band first.
    pub fn descending(&self) -> [f32; 5] {
        [self.stone, self.dirt, self.grass, self.sand, self.dirt2]
    }
}

// --- Load / Save / Reload ---

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.ron";

fn read_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    ron::from_str(&contents).map_err(ConfigError::ParseError)
}

impl Config {
    /// Path of `config.ron` inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// when no file exists yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path(config_dir);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        let config = read_file(&path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config to `config_dir`, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(Self::file_path(config_dir), text).map_err(ConfigError::WriteError)
    }

    /// Re-read `config.ron`. `Some` carries the new config when the file no
    /// longer matches `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_file(&Self::file_path(config_dir))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("Config changed on disk");
        Ok(Some(fresh))
    }

    /// Absolute band bounds in height units, highest band first.
    pub fn band_bounds(&self) -> [f32; 5] {
        self.height
            .bands
            .descending()
            .map(|fraction| fraction * self.height.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("grid_radius: 15"));
        assert!(ron_str.contains("max_height: 10.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.map.seed = Some(1234);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(map: (grid_radius: 4), height: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.map.grid_radius, 4);
        assert_eq!(config.map.map_radius, 16.0);
        assert_eq!(config.clouds, CloudConfig::default());
        assert_eq!(config.height.bands, BandThresholds::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.map.seed = Some(42);
        config.height.max_height = 12.0;
        config.decoration.tree_chance = 0.5;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::file_path(dir.path()).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.map.grid_radius = 8;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().map.grid_radius, 8);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_band_bounds_scale_with_max_height() {
        let config = Config::default();
        let bounds = config.band_bounds();
        let expected = [8.0, 7.0, 5.0, 3.0, 0.0];
        for (got, want) in bounds.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "expected {want}, got {got}");
        }
    }
}
