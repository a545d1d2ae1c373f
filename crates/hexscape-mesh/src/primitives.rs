//! Primitive builders: cylinders (including cones and hex prisms) and UV spheres.
//!
//! Every builder returns geometry centred on the origin. Vertex layouts follow
//! the usual three-style conventions so counts are predictable:
//!
//! | Primitive                     | Vertices                                   |
//! |-------------------------------|--------------------------------------------|
//! | cylinder torso                | `(radial + 1) * (height_segments + 1)`     |
//! | each closed cap (radius > 0)  | `2 * radial + 1`                           |
//! | sphere                        | `(width + 1) * (height + 1)`               |

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::geometry::Geometry;

/// Parameters of a (possibly tapered) cylinder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    /// Skip both caps.
    pub open_ended: bool,
}

impl CylinderParams {
    /// A closed prism with equal top and bottom radius.
    pub fn prism(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius_top: radius,
            radius_bottom: radius,
            height,
            radial_segments,
            height_segments: 1,
            open_ended: false,
        }
    }

    /// A closed cone with its apex on top.
    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius_top: 0.0,
            ..Self::prism(radius, height, radial_segments)
        }
    }
}

/// Builds a cylinder spanning `y ∈ [-height/2, height/2]`.
///
/// Triangles that would collapse onto a zero-radius end (a cone tip) are
/// omitted, and caps are only emitted for ends with a positive radius.
pub fn cylinder(params: CylinderParams) -> Geometry {
    let radial = params.radial_segments.max(3);
    let rows = params.height_segments.max(1);
    let half_height = params.height * 0.5;

    let mut geo = Geometry::new();

    // Torso.
    let slope = if params.height != 0.0 {
        (params.radius_bottom - params.radius_top) / params.height
    } else {
        0.0
    };
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rows as usize + 1);
    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (params.radius_bottom - params.radius_top) + params.radius_top;
        let mut row = Vec::with_capacity(radial as usize + 1);
        for x in 0..=radial {
            let u = x as f32 / radial as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let position = Vec3::new(radius * sin, -v * params.height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            row.push(geo.push_vertex(position, normal, Vec2::new(u, 1.0 - v)));
        }
        grid.push(row);
    }

    for x in 0..radial as usize {
        for y in 0..rows as usize {
            let a = grid[y][x];
            let b = grid[y + 1][x];
            let c = grid[y + 1][x + 1];
            let d = grid[y][x + 1];
            if params.radius_top > 0.0 || y != 0 {
                geo.push_triangle(a, b, d);
            }
            if params.radius_bottom > 0.0 || y != rows as usize - 1 {
                geo.push_triangle(b, c, d);
            }
        }
    }

    if !params.open_ended {
        if params.radius_top > 0.0 {
            push_cap(&mut geo, params.radius_top, half_height, radial, true);
        }
        if params.radius_bottom > 0.0 {
            push_cap(&mut geo, params.radius_bottom, half_height, radial, false);
        }
    }

    geo
}

fn push_cap(geo: &mut Geometry, radius: f32, half_height: f32, radial: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    let center_start = geo.vertex_count() as u32;
    for _ in 0..radial {
        geo.push_vertex(Vec3::new(0.0, y, 0.0), normal, Vec2::splat(0.5));
    }
    let ring_start = geo.vertex_count() as u32;
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        geo.push_vertex(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            Vec2::new(cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5),
        );
    }

    for x in 0..radial {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            geo.push_triangle(i, i + 1, c);
        } else {
            geo.push_triangle(i + 1, i, c);
        }
    }
}

/// Builds a UV sphere centred on the origin.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);

    let mut geo = Geometry::new();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(hs as usize + 1);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        // Pole vertices are shifted half a segment so their uvs sit mid-triangle.
        let u_offset = if iy == 0 {
            0.5 / ws as f32
        } else if iy == hs {
            -0.5 / ws as f32
        } else {
            0.0
        };

        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (phi_sin, phi_cos) = (u * TAU).sin_cos();
            let (theta_sin, theta_cos) = (v * PI).sin_cos();
            let position = Vec3::new(
                -radius * phi_cos * theta_sin,
                radius * theta_cos,
                radius * phi_sin * theta_sin,
            );
            let normal = position.try_normalize().unwrap_or(Vec3::Y);
            row.push(geo.push_vertex(position, normal, Vec2::new(u + u_offset, 1.0 - v)));
        }
        grid.push(row);
    }

    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                geo.push_triangle(a, b, d);
            }
            if iy != hs as usize - 1 {
                geo.push_triangle(b, c, d);
            }
        }
    }

    geo
}

/// Vertex count of [`cylinder`] for the given parameters, without building it.
pub fn cylinder_vertex_count(params: &CylinderParams) -> usize {
    let radial = params.radial_segments.max(3) as usize;
    let rows = params.height_segments.max(1) as usize;
    let mut count = (radial + 1) * (rows + 1);
    if !params.open_ended {
        let caps = usize::from(params.radius_top > 0.0) + usize::from(params.radius_bottom > 0.0);
        count += caps * (2 * radial + 1);
    }
    count
}

/// Vertex count of [`sphere`] for the given segment counts, without building it.
pub fn sphere_vertex_count(width_segments: u32, height_segments: u32) -> usize {
    (width_segments.max(3) as usize + 1) * (height_segments.max(2) as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_hex_prism_counts() {
        let params = CylinderParams::prism(1.0, 2.0, 6);
        let geo = cylinder(params);
        // Torso 7 * 2, two caps of 13.
        assert_eq!(geo.vertex_count(), 40);
        assert_eq!(geo.vertex_count(), cylinder_vertex_count(&params));
        // 6 quads on the side + 6 triangles per cap.
        assert_eq!(geo.triangle_count(), 12 + 12);
    }

    #[test]
    fn test_cone_skips_tip_cap_and_degenerate_triangles() {
        let params = CylinderParams::cone(0.9, 1.5, 5);
        let geo = cylinder(params);
        assert_eq!(geo.vertex_count(), 12 + 11);
        assert_eq!(geo.vertex_count(), cylinder_vertex_count(&params));
        assert_eq!(geo.triangle_count(), 5 + 5);
    }

    #[test]
    fn test_open_ended_has_no_caps() {
        let params = CylinderParams {
            radius_top: 17.01,
            radius_bottom: 18.5,
            height: 2.5,
            radial_segments: 64,
            height_segments: 5,
            open_ended: true,
        };
        let geo = cylinder(params);
        assert_eq!(geo.vertex_count(), 65 * 6);
        assert_eq!(geo.triangle_count(), 64 * 5 * 2);
    }

    #[test]
    fn test_cylinder_is_centred() {
        let geo = cylinder(CylinderParams::prism(1.0, 4.0, 6));
        let (lo, hi) = geo.bounds().unwrap();
        assert!((lo.y + 2.0).abs() < EPSILON);
        assert!((hi.y - 2.0).abs() < EPSILON);
        assert!(hi.x <= 1.0 + EPSILON && lo.x >= -1.0 - EPSILON);
    }

    #[test]
    fn test_hex_corners_on_circumradius() {
        let geo = cylinder(CylinderParams::prism(1.5, 1.0, 6));
        for p in &geo.positions[..7] {
            let r = Vec2::new(p.x, p.z).length();
            assert!((r - 1.5).abs() < EPSILON, "corner at radius {r}");
        }
    }

    #[test]
    fn test_sphere_counts() {
        let geo = sphere(0.3, 7, 7);
        assert_eq!(geo.vertex_count(), 64);
        assert_eq!(geo.vertex_count(), sphere_vertex_count(7, 7));
        // Pole rows contribute one triangle per segment, inner rows two.
        assert_eq!(geo.triangle_count(), 7 * (2 * 7 - 2));
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let geo = sphere(2.0, 8, 6);
        for p in &geo.positions {
            assert!((p.length() - 2.0).abs() < 1e-4, "vertex at {}", p.length());
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        for geo in [
            cylinder(CylinderParams::prism(1.0, 3.0, 6)),
            cylinder(CylinderParams::cone(0.5, 1.0, 5)),
            sphere(1.0, 7, 7),
        ] {
            assert_eq!(geo.index_count() % 3, 0);
            assert!(geo.indices.iter().all(|&i| (i as usize) < geo.vertex_count()));
        }
    }

    #[test]
    fn test_zero_height_column_is_flat() {
        let geo = cylinder(CylinderParams::prism(1.0, 0.0, 6));
        assert_eq!(geo.vertex_count(), 40);
        assert!(geo.positions.iter().all(|p| p.y.abs() < EPSILON));
    }
}
