//! A tile after height sampling and biome classification.

use glam::{Vec2, Vec3};

use crate::biome::Biome;
use crate::grid::AxialCoord;

/// One enumerated tile after height and biome assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub coord: AxialCoord,
    /// Ground-plane centre; `y` maps to world Z.
    pub position: Vec2,
    pub height: f32,
    pub biome: Biome,
}

impl Tile {
    /// World-space point at the centre of the column cap.
    pub fn top(&self) -> Vec3 {
        Vec3::new(self.position.x, self.height, self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_top() {
        let tile = Tile {
            coord: AxialCoord::new(1, 1),
            position: Vec2::new(2.0, 3.0),
            height: 5.0,
            biome: Biome::Grass,
        };
        assert_eq!(tile.top(), Vec3::new(2.0, 5.0, 3.0));
    }
}
