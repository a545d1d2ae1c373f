//! Floating puff-cluster clouds above the map.

use std::f32::consts::TAU;

use glam::Vec3;
use hexscape_config::CloudConfig;
use hexscape_mesh::Shape;

use crate::aggregator::{GeometryBatch, MaterialRef};
use crate::random::RandomSource;

pub struct CloudBuilder {
    config: CloudConfig,
}

impl CloudBuilder {
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// Cloud count for one uniform draw: `floor(draw^exponent * max_count)`.
    /// The exponent below 1 biases toward the low end.
    pub fn cloud_count(&self, draw: f32) -> u32 {
        let scaled =
            draw.clamp(0.0, 1.0).powf(self.config.count_exponent) * self.config.max_count as f32;
        (scaled.floor() as u32).min(self.config.max_count.saturating_sub(1))
    }

    /// Build the cloud batch and report how many clouds it holds.
    ///
    /// Per cloud the draws are: three puff radii (middle, left, right), three
    /// lifts (left, middle, right), the X/Y/Z offset, then the yaw.
    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (GeometryBatch, u32) {
        let count = self.cloud_count(rng.next_f32());
        let mut batch = GeometryBatch::new(MaterialRef::Clouds);
        let spread = (-self.config.spread, self.config.spread);

        for _ in 0..count {
            let middle = rng.range(self.config.puff_radius);
            let left = rng.range(self.config.puff_radius);
            let right = rng.range(self.config.puff_radius);
            let lifts = [(); 3].map(|_| rng.next_f32() * self.config.puff_lift);

            let mut cloud = Shape::PuffCluster {
                radii: [left, middle, right],
                lifts,
                spacing: self.config.puff_spacing,
                segments: self.config.puff_segments,
            }
            .build();

            let offset = Vec3::new(
                rng.range(spread),
                rng.range(self.config.altitude),
                rng.range(spread),
            );
            let yaw = rng.next_f32() + TAU;
            // Rotating after the move swings the cloud around the map centre.
            cloud.translate(offset).rotate_y(yaw);
            batch.append(&cloud);
        }

        tracing::debug!(count, vertices = batch.vertex_count(), "clouds built");
        (batch, count)
    }
}

impl Default for CloudBuilder {
    fn default() -> Self {
        Self::new(CloudConfig::default())
    }
}
