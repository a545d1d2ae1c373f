//! Closed set of shapes the terrain pass emits, each with explicit parameters.

use glam::Vec3;

use crate::geometry::Geometry;
use crate::primitives::{
    CylinderParams, cylinder, cylinder_vertex_count, sphere, sphere_vertex_count,
};

/// A parametric shape. [`Shape::build`] produces origin-local geometry:
/// cylinders are centred vertically on the origin, clusters are centred on
/// their middle puff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Hexagonal (or n-gonal) prism representing one terrain tile.
    HexColumn {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// UV sphere with equal width and height segments.
    Sphere { radius: f32, segments: u32 },
    /// Closed cone, apex up. Trees stack three of these.
    ConeSegment {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// Three spheres in a row along X, each lifted by its own amount.
    PuffCluster {
        radii: [f32; 3],
        lifts: [f32; 3],
        spacing: f32,
        segments: u32,
    },
    /// Any other cylinder (sea disc, rim, floor).
    Cylinder(CylinderParams),
}

impl Shape {
    /// Build the geometry for this shape.
    pub fn build(&self) -> Geometry {
        match *self {
            Shape::HexColumn {
                radius,
                height,
                segments,
            } => cylinder(CylinderParams::prism(radius, height, segments)),
            Shape::Sphere { radius, segments } => sphere(radius, segments, segments),
            Shape::ConeSegment {
                radius,
                height,
                segments,
            } => cylinder(CylinderParams::cone(radius, height, segments)),
            Shape::PuffCluster {
                radii,
                lifts,
                spacing,
                segments,
            } => {
                let offsets = [-spacing, 0.0, spacing];
                let mut cluster = Geometry::new();
                for ((radius, lift), x) in radii.into_iter().zip(lifts).zip(offsets) {
                    let mut puff = sphere(radius, segments, segments);
                    puff.translate(Vec3::new(x, lift, 0.0));
                    cluster.append(&puff);
                }
                cluster
            }
            Shape::Cylinder(params) => cylinder(params),
        }
    }

    /// Vertex count [`Shape::build`] will produce.
    pub fn vertex_count(&self) -> usize {
        match *self {
            Shape::HexColumn {
                radius,
                height,
                segments,
            } => cylinder_vertex_count(&CylinderParams::prism(radius, height, segments)),
            Shape::Sphere { segments, .. } => sphere_vertex_count(segments, segments),
            Shape::ConeSegment {
                radius,
                height,
                segments,
            } => cylinder_vertex_count(&CylinderParams::cone(radius, height, segments)),
            Shape::PuffCluster { segments, .. } => 3 * sphere_vertex_count(segments, segments),
            Shape::Cylinder(params) => cylinder_vertex_count(&params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_matches_build() {
        let shapes = [
            Shape::HexColumn {
                radius: 1.0,
                height: 4.2,
                segments: 6,
            },
            Shape::Sphere {
                radius: 0.2,
                segments: 7,
            },
            Shape::ConeSegment {
                radius: 0.75,
                height: 1.6,
                segments: 5,
            },
            Shape::PuffCluster {
                radii: [0.6, 1.2, 0.9],
                lifts: [0.1, 0.0, 0.25],
                spacing: 1.85,
                segments: 7,
            },
            Shape::Cylinder(CylinderParams::prism(18.5, 1.0, 64)),
        ];
        for shape in shapes {
            assert_eq!(
                shape.build().vertex_count(),
                shape.vertex_count(),
                "count mismatch for {shape:?}"
            );
        }
    }

    #[test]
    fn test_puff_cluster_spacing() {
        let cluster = Shape::PuffCluster {
            radii: [0.5, 0.5, 0.5],
            lifts: [0.0, 0.3, 0.0],
            spacing: 2.0,
            segments: 6,
        }
        .build();
        let (lo, hi) = cluster.bounds().unwrap();
        assert!((lo.x + 2.5).abs() < 1e-4, "min x {}", lo.x);
        assert!((hi.x - 2.5).abs() < 1e-4, "max x {}", hi.x);
        assert!((hi.y - 0.8).abs() < 1e-4, "max y {}", hi.y);
    }

    #[test]
    fn test_hex_column_is_centred_on_origin() {
        let column = Shape::HexColumn {
            radius: 1.0,
            height: 6.0,
            segments: 6,
        }
        .build();
        let (lo, hi) = column.bounds().unwrap();
        assert!((lo.y + 3.0).abs() < 1e-5);
        assert!((hi.y - 3.0).abs() < 1e-5);
    }
}
