//! Material descriptions for each batch kind, resolved from config.

use std::path::{Path, PathBuf};

use hexscape_config::MaterialConfig;
use hexscape_terrain::{Biome, MaterialRef};

const WATER_TEXTURE: &str = "water.jpg";

/// What a renderer needs to build a material for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDesc {
    pub label: &'static str,
    /// Colour map, or roughness map for the sea.
    pub texture: Option<PathBuf>,
    pub env_map: PathBuf,
    pub env_map_intensity: f32,
    pub flat_shading: bool,
    pub transparent: bool,
    pub double_sided: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MaterialDesc {
    fn base(label: &'static str, config: &MaterialConfig, intensity: f32) -> Self {
        Self {
            label,
            texture: None,
            env_map: asset_path(config, &config.env_map),
            env_map_intensity: intensity,
            flat_shading: false,
            transparent: false,
            double_sided: false,
            cast_shadow: false,
            receive_shadow: true,
        }
    }

    pub fn resolve(material: MaterialRef, config: &MaterialConfig) -> Self {
        let label = material.label();
        match material {
            MaterialRef::Biome(biome) => Self {
                texture: Some(asset_path(config, biome.texture_file())),
                flat_shading: true,
                cast_shadow: true,
                ..Self::base(label, config, config.tile_env_intensity)
            },
            MaterialRef::Clouds => Self {
                flat_shading: true,
                receive_shadow: false,
                ..Self::base(label, config, config.cloud_env_intensity)
            },
            MaterialRef::Sea => Self {
                texture: Some(asset_path(config, WATER_TEXTURE)),
                transparent: true,
                ..Self::base(label, config, config.sea_env_intensity)
            },
            MaterialRef::Rim => Self {
                texture: Some(asset_path(config, Biome::Dirt.texture_file())),
                double_sided: true,
                ..Self::base(label, config, config.rim_env_intensity)
            },
            MaterialRef::Floor => Self {
                texture: Some(asset_path(config, Biome::Dirt2.texture_file())),
                double_sided: true,
                ..Self::base(label, config, config.floor_env_intensity)
            },
        }
    }
}

fn asset_path(config: &MaterialConfig, file: &str) -> PathBuf {
    Path::new(&config.asset_dir).join(file)
}
