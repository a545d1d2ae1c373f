//! One-shot map generation: tiles, columns, props, clouds and surroundings.

use std::time::Instant;

use hexscape_config::{Config, ConfigError};

use crate::aggregator::{BiomeAggregator, BiomeBatches, GeometryBatch};
use crate::biome::{Biome, BiomeBands};
use crate::builder::GeometryBuilder;
use crate::clouds::CloudBuilder;
use crate::decoration::{DecorationKind, DecorationPlacer};
use crate::grid::TileGrid;
use crate::heightmap::{HeightSampler, NoiseSource, SimplexNoise};
use crate::random::{RandomSource, SeededRandom, derive_seed};
use crate::surroundings::build_surroundings;
use crate::tile::Tile;

/// Counters collected during one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Tiles per biome, indexed in [`Biome::ALL`] order.
    pub tiles_per_biome: [usize; 5],
    pub stones: usize,
    pub trees: usize,
    pub clouds: u32,
}

impl GenerationStats {
    pub fn tiles(&self, biome: Biome) -> usize {
        self.tiles_per_biome[biome.index()]
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles_per_biome.iter().sum()
    }
}

/// Everything a renderer needs to draw one generated map.
#[derive(Debug)]
pub struct TerrainOutput {
    pub biome_batches: BiomeBatches,
    pub cloud_batch: GeometryBatch,
    /// Sea, rim and floor; empty when surroundings are disabled.
    pub surroundings: Vec<GeometryBatch>,
    pub stats: GenerationStats,
}

impl TerrainOutput {
    /// Every batch in draw order: biomes, clouds, then surroundings.
    pub fn batches(&self) -> impl Iterator<Item = &GeometryBatch> {
        self.biome_batches
            .iter()
            .map(|(_, batch)| batch)
            .chain(std::iter::once(&self.cloud_batch))
            .chain(self.surroundings.iter())
    }
}

/// Runs the generation pass over a validated configuration.
pub struct TerrainGenerator {
    config: Config,
    grid: TileGrid,
    sampler: HeightSampler,
    bands: BiomeBands,
    builder: GeometryBuilder,
    placer: DecorationPlacer,
    clouds: CloudBuilder,
}

impl TerrainGenerator {
    /// Validates `config` before any tile is touched.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            grid: TileGrid::from_config(config),
            sampler: HeightSampler::from_config(config),
            bands: BiomeBands::from_config(config),
            builder: GeometryBuilder::from_config(&config.layout),
            placer: DecorationPlacer::new(config.decoration.clone()),
            clouds: CloudBuilder::new(config.clouds.clone()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Every tile of the map with its height and biome, in enumeration order.
    pub fn tiles<'a, N: NoiseSource + ?Sized>(
        &'a self,
        noise: &'a N,
    ) -> impl Iterator<Item = Tile> + 'a {
        self.grid.enumerate().map(move |cell| {
            let height = self.sampler.height_at(noise, cell.coord);
            Tile {
                coord: cell.coord,
                position: cell.position,
                height,
                biome: self.bands.classify(height),
            }
        })
    }

    /// Generate the map from explicit noise and randomness.
    ///
    /// Draws are consumed tile by tile (stone attempt, then tree attempt),
    /// followed by the clouds.
    pub fn generate<N, R>(&self, noise: &N, rng: &mut R) -> TerrainOutput
    where
        N: NoiseSource + ?Sized,
        R: RandomSource + ?Sized,
    {
        let start = Instant::now();
        tracing::info!(
            grid_radius = self.grid.radius(),
            map_radius = self.config.map.map_radius,
            max_height = self.config.height.max_height,
            "generating terrain"
        );

        let mut aggregator = BiomeAggregator::new();
        let mut stats = GenerationStats::default();

        for tile in self.tiles(noise) {
            let column = self.builder.hex_column(tile.height, tile.position);
            aggregator.append_to_batch(tile.biome, &column);
            stats.tiles_per_biome[tile.biome.index()] += 1;

            for decoration in self.placer.decorate(&tile, rng) {
                match decoration.kind {
                    DecorationKind::Stone => stats.stones += 1,
                    DecorationKind::Tree => stats.trees += 1,
                }
                aggregator.append_to_batch(decoration.kind.target_biome(), &decoration.geometry);
            }
        }

        let biome_batches = aggregator.finalize();
        let (cloud_batch, clouds) = self.clouds.build(rng);
        stats.clouds = clouds;
        let surroundings =
            build_surroundings(&self.config.surroundings, self.config.height.max_height);

        for (biome, batch) in biome_batches.iter() {
            tracing::debug!(
                biome = biome.name(),
                tiles = stats.tiles(biome),
                vertices = batch.vertex_count(),
                "biome batch"
            );
        }
        tracing::info!(
            tiles = stats.total_tiles(),
            stones = stats.stones,
            trees = stats.trees,
            clouds = stats.clouds,
            vertices = biome_batches.total_vertex_count(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain generated"
        );

        TerrainOutput {
            biome_batches,
            cloud_batch,
            surroundings,
            stats,
        }
    }

    /// Generate with simplex noise and a ChaCha stream, both derived from `seed`.
    pub fn generate_seeded(&self, seed: u64) -> TerrainOutput {
        let noise = SimplexNoise::new(seed);
        let mut rng = SeededRandom::new(derive_seed(seed, "decoration"));
        tracing::debug!(seed, noise_seed = noise.seed(), "seeded generation");
        self.generate(&noise, &mut rng)
    }
}
