//! Biome bands: height thresholds that sort every tile into exactly one biome.

use hexscape_config::Config;

/// Terrain classification of a tile, ordered from the highest band down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Biome {
    Stone,
    Dirt,
    Grass,
    Sand,
    Dirt2,
}

impl Biome {
    /// Every biome, highest band first.
    pub const ALL: [Biome; 5] = [
        Biome::Stone,
        Biome::Dirt,
        Biome::Grass,
        Biome::Sand,
        Biome::Dirt2,
    ];

    /// Position in [`Biome::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Band rank: 4 for the highest band, 0 for the lowest.
    pub fn rank(self) -> usize {
        Biome::ALL.len() - 1 - self.index()
    }

    pub fn name(self) -> &'static str {
        match self {
            Biome::Stone => "stone",
            Biome::Dirt => "dirt",
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Dirt2 => "dirt2",
        }
    }

    /// Texture file the renderer should bind for this biome.
    pub fn texture_file(self) -> &'static str {
        match self {
            Biome::Stone => "stone.png",
            Biome::Dirt => "dirt.png",
            Biome::Grass => "grass.jpg",
            Biome::Sand => "sand.jpg",
            Biome::Dirt2 => "dirt2.jpg",
        }
    }

    /// Tiles in this band may sprout a rock.
    pub fn grows_stones(self) -> bool {
        matches!(self, Biome::Stone | Biome::Sand)
    }

    /// Tiles in this band may sprout a tree.
    pub fn grows_trees(self) -> bool {
        matches!(self, Biome::Grass)
    }
}

/// Absolute lower bounds of every band, highest first.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeBands {
    bounds: [f32; 5],
}

impl BiomeBands {
    /// Bands from absolute bounds, which must strictly descend to 0.
    pub fn new(bounds: [f32; 5]) -> Self {
        debug_assert!(
            bounds.windows(2).all(|w| w[0] > w[1]),
            "band bounds must strictly descend: {bounds:?}"
        );
        Self { bounds }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.band_bounds())
    }

    /// The first band, highest first, whose lower bound `height` strictly
    /// exceeds. Heights at or below every bound (zero) fall into [`Biome::Dirt2`].
    pub fn classify(&self, height: f32) -> Biome {
        Biome::ALL
            .into_iter()
            .zip(self.bounds)
            .find(|&(_, bound)| height > bound)
            .map_or(Biome::Dirt2, |(biome, _)| biome)
    }

    pub fn lower_bound(&self, biome: Biome) -> f32 {
        self.bounds[biome.index()]
    }
}
