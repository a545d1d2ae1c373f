//! Geometry for the hex terrain: indexed buffers, primitive builders, the
//! tagged [`Shape`] set and the vertex layout renderers upload.

pub mod geometry;
pub mod primitives;
pub mod shape;
pub mod vertex;
pub mod vertex_format;

pub use geometry::Geometry;
pub use primitives::{CylinderParams, cylinder, sphere};
pub use shape::Shape;
pub use vertex::{TerrainVertex, index_bytes, vertex_bytes};
pub use vertex_format::{TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT};
