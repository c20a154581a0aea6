pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod mesh;
pub mod picking;
pub mod scene;
pub mod state;
pub mod storefront;
pub mod views;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use carousel::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use mesh::*;
pub use picking::*;
pub use scene::*;
pub use state::*;
pub use storefront::*;
pub use views::{CatalogView, ChromeState, ProductView, View, VisibleMeshes};
