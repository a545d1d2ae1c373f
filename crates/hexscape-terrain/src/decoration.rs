//! Stochastic props on qualifying tiles: rocks on stone and sand, conifers on grass.
//!
//! Each tile gets at most one stone attempt and one tree attempt. Draws are
//! only consumed for tiles whose band qualifies, in the order trigger, then
//! shape parameters.

use glam::Vec3;
use hexscape_config::DecorationConfig;
use hexscape_mesh::{Geometry, Shape};

use crate::biome::Biome;
use crate::random::RandomSource;
use crate::tile::Tile;

/// Tree tiers as `(base radius, height factor, lift)`: each cone is centred at
/// `tile height + tree height * factor + lift`.
const TREE_TIERS: [(f32, f32, f32); 3] = [(0.9, 0.0, 0.6), (0.75, 0.6, 0.6), (0.5, 1.25, 0.5)];

/// The two kinds of prop a tile can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Stone,
    Tree,
}

impl DecorationKind {
    /// Batch a prop of this kind is merged into, whatever band its tile is in.
    pub fn target_biome(self) -> Biome {
        match self {
            DecorationKind::Stone => Biome::Stone,
            DecorationKind::Tree => Biome::Grass,
        }
    }

    pub fn qualifies(self, biome: Biome) -> bool {
        match self {
            DecorationKind::Stone => biome.grows_stones(),
            DecorationKind::Tree => biome.grows_trees(),
        }
    }
}

/// A prop built for one tile, ready to be merged into its target batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub geometry: Geometry,
}

pub struct DecorationPlacer {
    config: DecorationConfig,
}

impl DecorationPlacer {
    pub fn new(config: DecorationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    /// Every prop the tile sprouts, stone attempt first.
    pub fn decorate<R: RandomSource + ?Sized>(&self, tile: &Tile, rng: &mut R) -> Vec<Decoration> {
        let stone = self.maybe_stone(tile, rng).map(|geometry| Decoration {
            kind: DecorationKind::Stone,
            geometry,
        });
        let tree = self.maybe_tree(tile, rng).map(|geometry| Decoration {
            kind: DecorationKind::Tree,
            geometry,
        });
        stone.into_iter().chain(tree).collect()
    }

    /// A small rock jittered off the tile centre, at cap height.
    pub fn maybe_stone<R: RandomSource + ?Sized>(&self, tile: &Tile, rng: &mut R) -> Option<Geometry> {
        if !DecorationKind::Stone.qualifies(tile.biome) || !rng.chance(self.config.stone_chance) {
            return None;
        }
        let jitter = (0.0, self.config.stone_jitter);
        let px = rng.range(jitter);
        let pz = rng.range(jitter);
        let radius = rng.range(self.config.stone_radius);

        let mut geo = Shape::Sphere {
            radius,
            segments: self.config.stone_segments,
        }
        .build();
        geo.translate(tile.top() + Vec3::new(px, 0.0, pz));
        tracing::trace!(col = tile.coord.col, row = tile.coord.row, radius, "stone");
        Some(geo)
    }

    /// Three stacked cones sharing one random height.
    pub fn maybe_tree<R: RandomSource + ?Sized>(&self, tile: &Tile, rng: &mut R) -> Option<Geometry> {
        if !DecorationKind::Tree.qualifies(tile.biome) || !rng.chance(self.config.tree_chance) {
            return None;
        }
        let tree_height = rng.range(self.config.tree_height);

        let mut tree = Geometry::new();
        for (radius, factor, lift) in TREE_TIERS {
            let mut cone = Shape::ConeSegment {
                radius,
                height: tree_height,
                segments: self.config.tree_segments,
            }
            .build();
            cone.translate(tile.top() + Vec3::new(0.0, tree_height * factor + lift, 0.0));
            tree.append(&cone);
        }
        tracing::trace!(col = tile.coord.col, row = tile.coord.row, tree_height, "tree");
        Some(tree)
    }
}

impl Default for DecorationPlacer {
    fn default() -> Self {
        Self::new(DecorationConfig::default())
    }
}
