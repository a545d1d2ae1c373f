//! Hexscape application: startup, material lookup and the renderer seam
//! that generated terrain is handed to.

pub mod materials;
pub mod platform;
pub mod renderer;
pub mod startup;

pub use materials::MaterialDesc;
pub use platform::{APP_NAME, PlatformDirs, PlatformError};
pub use renderer::{DrawableSummary, Renderer, SceneSummary, submit_output};
pub use startup::{StartupError, load_config};
