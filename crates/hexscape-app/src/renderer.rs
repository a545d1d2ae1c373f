//! The seam between generation and drawing.
//!
//! Terrain output is handed over batch by batch together with a resolved
//! material. [`SceneSummary`] is a headless implementation that packs the
//! GPU buffers and records what would be drawn.

use glam::Vec3;
use hexscape_config::MaterialConfig;
use hexscape_mesh::{index_bytes, vertex_bytes};
use hexscape_terrain::{GeometryBatch, TerrainOutput};

use crate::materials::MaterialDesc;

/// Consumes finished batches. Implementations own every GPU concern.
pub trait Renderer {
    fn submit(&mut self, batch: &GeometryBatch, material: &MaterialDesc);
}

/// Hand every non-empty batch of `output` to `renderer`. Returns how many
/// drawables were submitted.
pub fn submit_output(
    renderer: &mut dyn Renderer,
    output: &TerrainOutput,
    materials: &MaterialConfig,
) -> usize {
    let mut submitted = 0;
    for batch in output.batches() {
        if batch.is_empty() {
            tracing::debug!(batch = batch.label(), "skipping empty batch");
            continue;
        }
        let material = MaterialDesc::resolve(batch.material, materials);
        renderer.submit(batch, &material);
        submitted += 1;
    }
    submitted
}

/// One drawable as a GPU upload would see it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableSummary {
    pub label: &'static str,
    pub vertices: usize,
    pub triangles: usize,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
    pub bounds: (Vec3, Vec3),
    pub material: MaterialDesc,
}

/// Headless renderer that records and logs what it is given.
#[derive(Debug, Default)]
pub struct SceneSummary {
    pub drawables: Vec<DrawableSummary>,
}

impl SceneSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_vertices(&self) -> usize {
        self.drawables.iter().map(|d| d.vertices).sum()
    }

    pub fn total_bytes(&self) -> usize {
        self.drawables
            .iter()
            .map(|d| d.vertex_bytes + d.index_bytes)
            .sum()
    }

    pub fn find(&self, label: &str) -> Option<&DrawableSummary> {
        self.drawables.iter().find(|d| d.label == label)
    }
}

impl Renderer for SceneSummary {
    fn submit(&mut self, batch: &GeometryBatch, material: &MaterialDesc) {
        let geometry = &batch.geometry;
        let vertices = geometry.to_vertices();
        let drawable = DrawableSummary {
            label: batch.label(),
            vertices: vertices.len(),
            triangles: geometry.triangle_count(),
            vertex_bytes: vertex_bytes(&vertices).len(),
            index_bytes: index_bytes(&geometry.indices).len(),
            bounds: geometry.bounds().unwrap_or((Vec3::ZERO, Vec3::ZERO)),
            material: material.clone(),
        };
        tracing::info!(
            drawable = drawable.label,
            vertices = drawable.vertices,
            triangles = drawable.triangles,
            bytes = drawable.vertex_bytes + drawable.index_bytes,
            texture = ?material.texture,
            env_map_intensity = material.env_map_intensity,
            "drawable ready"
        );
        self.drawables.push(drawable);
    }
}
