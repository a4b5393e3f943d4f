pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod stats;
pub mod structure;
pub mod view2d;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use layout::*;
pub use stats::*;
pub use view2d::*;
