//! Static scenery around the tile map: a sea disc, an open rim and a floor.
//!
//! All three scale vertically with the maximum tile height so the sea always
//! covers the lowest bands.

use glam::Vec3;
use hexscape_config::SurroundingsConfig;
use hexscape_mesh::{CylinderParams, Shape};

use crate::aggregator::{GeometryBatch, MaterialRef};

const RIM_HEIGHT_SEGMENTS: u32 = 5;

/// Sea, rim and floor batches, in that order. Empty when disabled.
pub fn build_surroundings(config: &SurroundingsConfig, max_height: f32) -> Vec<GeometryBatch> {
    if !config.enabled {
        return Vec::new();
    }

    let sea = CylinderParams::prism(config.sea_radius, max_height * 0.2, config.sea_segments);
    let rim = CylinderParams {
        radius_top: config.rim_top_radius,
        radius_bottom: config.rim_bottom_radius,
        height: max_height * 0.25,
        radial_segments: config.rim_segments,
        height_segments: RIM_HEIGHT_SEGMENTS,
        open_ended: true,
    };
    let floor = CylinderParams::prism(
        config.rim_bottom_radius,
        max_height * 0.1,
        config.rim_segments,
    );

    [
        (MaterialRef::Sea, sea, max_height * 0.1),
        (MaterialRef::Rim, rim, max_height * 0.125),
        (MaterialRef::Floor, floor, -max_height * 0.05),
    ]
    .into_iter()
    .map(|(material, params, centre_y)| {
        let mut geometry = Shape::Cylinder(params).build();
        geometry.translate(Vec3::new(0.0, centre_y, 0.0));
        GeometryBatch::with_geometry(material, geometry)
    })
    .collect()
}
