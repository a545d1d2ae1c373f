//! Per-tile column geometry.

use glam::{Vec2, Vec3};
use hexscape_config::LayoutConfig;
use hexscape_mesh::{Geometry, Shape};

/// Builds the hex column standing under each tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryBuilder {
    /// Circumradius of the column cross-section.
    pub tile_radius: f32,
    pub tile_segments: u32,
}

impl GeometryBuilder {
    pub fn from_config(layout: &LayoutConfig) -> Self {
        Self {
            tile_radius: layout.tile_radius,
            tile_segments: layout.tile_segments,
        }
    }

    pub fn column_shape(&self, height: f32) -> Shape {
        Shape::HexColumn {
            radius: self.tile_radius,
            height,
            segments: self.tile_segments,
        }
    }

    /// A column with its base at `y = 0` and its cap at `y = height`, centred
    /// on `position`. Every call returns fresh geometry.
    pub fn hex_column(&self, height: f32, position: Vec2) -> Geometry {
        let mut geo = self.column_shape(height).build();
        geo.translate(Vec3::new(position.x, height * 0.5, position.y));
        geo
    }
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_base_and_cap() {
        let geo = GeometryBuilder::default().hex_column(4.5, Vec2::new(3.0, -2.0));
        let (lo, hi) = geo.bounds().unwrap();
        assert!(lo.y.abs() < 1e-5, "base at {}", lo.y);
        assert!((hi.y - 4.5).abs() < 1e-5, "cap at {}", hi.y);
        assert!(lo.x >= 2.0 - 1e-4 && hi.x <= 4.0 + 1e-4);
        assert!(lo.z >= -3.0 - 1e-4 && hi.z <= -1.0 + 1e-4);
    }

    #[test]
    fn test_column_vertex_count_matches_shape() {
        let builder = GeometryBuilder::default();
        let geo = builder.hex_column(1.0, Vec2::ZERO);
        assert_eq!(geo.vertex_count(), builder.column_shape(1.0).vertex_count());
    }

    #[test]
    fn test_zero_height_column_sits_on_ground() {
        let geo = GeometryBuilder::default().hex_column(0.0, Vec2::new(1.0, 1.0));
        assert!(!geo.is_empty());
        assert!(geo.positions.iter().all(|p| p.y.abs() < 1e-6));
    }

    #[test]
    fn test_calls_are_independent() {
        let builder = GeometryBuilder::default();
        let a = builder.hex_column(2.0, Vec2::ZERO);
        let b = builder.hex_column(2.0, Vec2::ZERO);
        assert_eq!(a, b);
    }
}
