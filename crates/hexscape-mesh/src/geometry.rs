//! Indexed triangle geometry with baked-in transforms.

use glam::{Mat3, Vec2, Vec3};

use crate::vertex::TerrainVertex;

/// An indexed triangle list.
///
/// Positions, normals and uvs are parallel arrays; `indices` reference them in
/// groups of three. Transforms are applied directly to the stored data, so a
/// merged geometry carries every part at its final location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty geometry with room for the given counts.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Pushes one vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Pushes one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the geometry holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }

    /// Rotates positions and normals about the world Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        let rotation = Mat3::from_rotation_y(angle);
        for p in &mut self.positions {
            *p = rotation * *p;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
        self
    }

    /// Appends `other`, rebasing its indices past the current vertices.
    ///
    /// Appending is plain buffer concatenation: no vertices are shared or
    /// removed, so the resulting vertex count is always the sum of both.
    pub fn append(&mut self, other: &Geometry) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Concatenates all parts into one geometry.
    pub fn merge_all<'a>(parts: impl IntoIterator<Item = &'a Geometry>) -> Geometry {
        let mut merged = Geometry::new();
        for part in parts {
            merged.append(part);
        }
        merged
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }

    /// Interleaves the parallel arrays into GPU-ready vertices.
    pub fn to_vertices(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| TerrainVertex::new(*p, *n, *uv))
            .collect()
    }
}
