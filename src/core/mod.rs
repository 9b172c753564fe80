pub mod camera;
pub mod constants;
pub mod geometry;
pub mod mic;
pub mod params;
pub mod scene;
pub mod shapes;
pub mod spectrum;

pub use constants::*;

// Shaders bundled as string constants
pub static SHAPES_WGSL: &str = include_str!("../../shaders/shapes.wgsl");
