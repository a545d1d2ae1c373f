//! Per-biome accumulation of tile and prop geometry into one batch each.

use hashbrown::HashMap;
use hexscape_mesh::Geometry;

use crate::biome::Biome;

/// What a batch should be drawn with. The renderer maps this to an actual
/// material; terrain only names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialRef {
    Biome(Biome),
    Clouds,
    Sea,
    Rim,
    Floor,
}

impl MaterialRef {
    pub fn label(self) -> &'static str {
        match self {
            MaterialRef::Biome(biome) => biome.name(),
            MaterialRef::Clouds => "clouds",
            MaterialRef::Sea => "sea",
            MaterialRef::Rim => "rim",
            MaterialRef::Floor => "floor",
        }
    }
}

/// One merged geometry plus the material it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryBatch {
    pub material: MaterialRef,
    pub geometry: Geometry,
}

impl GeometryBatch {
    pub fn new(material: MaterialRef) -> Self {
        Self {
            material,
            geometry: Geometry::new(),
        }
    }

    pub fn with_geometry(material: MaterialRef, geometry: Geometry) -> Self {
        Self { material, geometry }
    }

    pub fn label(&self) -> &'static str {
        self.material.label()
    }

    pub fn append(&mut self, geometry: &Geometry) {
        self.geometry.append(geometry);
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }
}

/// Owns one growing batch per biome while a map is generated.
#[derive(Debug, Default)]
pub struct BiomeAggregator {
    batches: HashMap<Biome, GeometryBatch>,
}

impl BiomeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `geometry` into the batch for `biome`, creating it on first use.
    pub fn append_to_batch(&mut self, biome: Biome, geometry: &Geometry) {
        self.batches
            .entry(biome)
            .or_insert_with(|| GeometryBatch::new(MaterialRef::Biome(biome)))
            .append(geometry);
    }

    /// Number of batches created so far.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Hand every batch to the caller, one per biome, empty where unused.
    pub fn finalize(mut self) -> BiomeBatches {
        BiomeBatches(Biome::ALL.map(|biome| {
            self.batches
                .remove(&biome)
                .unwrap_or_else(|| GeometryBatch::new(MaterialRef::Biome(biome)))
        }))
    }
}

/// Finalized biome batches, indexed in [`Biome::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeBatches([GeometryBatch; 5]);

impl BiomeBatches {
    pub fn get(&self, biome: Biome) -> &GeometryBatch {
        &self.0[biome.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Biome, &GeometryBatch)> {
        Biome::ALL.into_iter().zip(self.0.iter())
    }

    pub fn into_batches(self) -> [GeometryBatch; 5] {
        self.0
    }

    pub fn vertex_counts(&self) -> [usize; 5] {
        Biome::ALL.map(|biome| self.get(biome).vertex_count())
    }

    pub fn total_vertex_count(&self) -> usize {
        self.0.iter().map(GeometryBatch::vertex_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    fn unit_triangle(x: f32) -> Geometry {
        let mut g = Geometry::new();
        let a = g.push_vertex(Vec3::new(x, 0.0, 0.0), Vec3::Y, Vec2::ZERO);
        let b = g.push_vertex(Vec3::new(x + 1.0, 0.0, 0.0), Vec3::Y, Vec2::X);
        let c = g.push_vertex(Vec3::new(x, 0.0, 1.0), Vec3::Y, Vec2::Y);
        g.push_triangle(a, b, c);
        g
    }

    #[test]
    fn test_finalize_always_has_five_batches() {
        let batches = BiomeAggregator::new().finalize();
        assert_eq!(batches.iter().count(), 5);
        for (biome, batch) in batches.iter() {
            assert!(batch.is_empty());
            assert_eq!(batch.material, MaterialRef::Biome(biome));
        }
    }

    #[test]
    fn test_batches_created_lazily() {
        let mut agg = BiomeAggregator::new();
        assert_eq!(agg.batch_count(), 0);
        agg.append_to_batch(Biome::Sand, &unit_triangle(0.0));
        agg.append_to_batch(Biome::Sand, &unit_triangle(2.0));
        assert_eq!(agg.batch_count(), 1);

        let batches = agg.finalize();
        assert_eq!(batches.vertex_counts(), [0, 0, 0, 6, 0]);
        assert_eq!(batches.get(Biome::Sand).geometry.triangle_count(), 2);
    }

    #[test]
    fn test_batch_size_independent_of_append_order() {
        let parts = [unit_triangle(0.0), unit_triangle(5.0), unit_triangle(9.0)];

        let mut forward = BiomeAggregator::new();
        for p in &parts {
            forward.append_to_batch(Biome::Grass, p);
        }
        let mut backward = BiomeAggregator::new();
        for p in parts.iter().rev() {
            backward.append_to_batch(Biome::Grass, p);
        }

        let forward = forward.finalize();
        let backward = backward.finalize();
        assert_eq!(forward.vertex_counts(), backward.vertex_counts());
        assert_eq!(
            forward.get(Biome::Grass).geometry.bounds(),
            backward.get(Biome::Grass).geometry.bounds()
        );
    }

    #[test]
    fn test_total_vertex_count() {
        let mut agg = BiomeAggregator::new();
        agg.append_to_batch(Biome::Stone, &unit_triangle(0.0));
        agg.append_to_batch(Biome::Dirt2, &unit_triangle(0.0));
        assert_eq!(agg.finalize().total_vertex_count(), 6);
    }

    #[test]
    fn test_material_labels() {
        assert_eq!(MaterialRef::Biome(Biome::Dirt2).label(), "dirt2");
        assert_eq!(MaterialRef::Clouds.label(), "clouds");
        assert_eq!(GeometryBatch::new(MaterialRef::Rim).label(), "rim");
    }
}
