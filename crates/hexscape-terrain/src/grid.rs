//! Hex tile enumeration and the offset-row projection to the ground plane.

use glam::Vec2;
use hexscape_config::{Config, LayoutConfig};

/// Integer (column, row) address of one hex tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxialCoord {
    pub col: i32,
    pub row: i32,
}

impl AxialCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Offset-row projection: odd rows shift half a column.
///
/// The stagger uses the sign-preserving remainder, so negative odd rows shift
/// toward negative X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    pub col_spacing: f32,
    pub row_spacing: f32,
}

impl HexLayout {
    pub fn from_config(layout: &LayoutConfig) -> Self {
        Self {
            col_spacing: layout.col_spacing,
            row_spacing: layout.row_spacing,
        }
    }

    /// Ground-plane position of a tile centre. `y` of the result maps to world Z.
    pub fn project(&self, coord: AxialCoord) -> Vec2 {
        let stagger = (coord.row % 2) as f32 * 0.5;
        Vec2::new(
            (coord.col as f32 + stagger) * self.col_spacing,
            coord.row as f32 * self.row_spacing,
        )
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

/// A tile position produced by [`TileGrid::enumerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTile {
    pub coord: AxialCoord,
    pub position: Vec2,
}

/// Square grid of coordinates clipped to a circular footprint.
#[derive(Debug, Clone)]
pub struct TileGrid {
    radius: i32,
    map_radius: f32,
    layout: HexLayout,
}

impl TileGrid {
    pub fn new(radius: u32, map_radius: f32, layout: HexLayout) -> Self {
        Self {
            radius: radius.min(i32::MAX as u32) as i32,
            map_radius,
            layout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.map.grid_radius,
            config.map.map_radius,
            HexLayout::from_config(&config.layout),
        )
    }

    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Every coordinate in `[-radius, radius]²` whose projected position lies
    /// within the map radius, columns outer and rows inner.
    ///
    /// The iterator borrows the grid, so calling this again restarts the walk.
    pub fn enumerate(&self) -> impl Iterator<Item = GridTile> + '_ {
        let r = self.radius;
        (-r..=r)
            .flat_map(move |col| (-r..=r).map(move |row| AxialCoord::new(col, row)))
            .map(|coord| GridTile {
                coord,
                position: self.layout.project(coord),
            })
            .filter(|tile| tile.position.length() <= self.map_radius)
    }

    /// Number of tiles [`enumerate`](Self::enumerate) yields.
    pub fn tile_count(&self) -> usize {
        self.enumerate().count()
    }
}
