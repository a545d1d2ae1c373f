//! Procedural hex-tile terrain: noise heights, biome bands, per-biome geometry
//! batches with decorations, clouds and surrounding scenery.

mod builder;
mod clouds;
mod decoration;
mod heightmap;
mod surroundings;
mod tile;

pub mod aggregator;
pub mod biome;
pub mod generator;
pub mod grid;
pub mod random;

pub use aggregator::{BiomeAggregator, BiomeBatches, GeometryBatch, MaterialRef};
pub use biome::{Biome, BiomeBands};
pub use builder::GeometryBuilder;
pub use clouds::CloudBuilder;
pub use decoration::{Decoration, DecorationKind, DecorationPlacer};
pub use generator::{GenerationStats, TerrainGenerator, TerrainOutput};
pub use grid::{AxialCoord, GridTile, HexLayout, TileGrid};
pub use heightmap::{ConstantNoise, HeightSampler, NoiseSource, SimplexNoise};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, derive_seed, fresh_seed};
pub use surroundings::build_surroundings;
pub use tile::Tile;
