//! View lifecycle shared by the catalog and product screens.

pub mod catalog;
pub mod product;

pub use catalog::CatalogView;
pub use product::ProductView;

use crate::mesh::MeshInstance;
use crate::state::{Camera, DirectionalLight};
use smallvec::SmallVec;
use std::time::Duration;

/// Meshes attached to a view's scene for the current frame.
pub type VisibleMeshes<'a> = SmallVec<[&'a MeshInstance; 8]>;

/// Which DOM controls around the canvas should be shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub catalog_button: bool,
    pub previous_button: bool,
    pub next_button: bool,
    /// Title text, or `None` to hide the title element.
    pub item_title: Option<&'static str>,
}

pub trait View {
    /// Attach the view's initial visuals to its scene.
    fn initialize(&mut self);
    /// Per-frame tick; `elapsed` is time since the view was created.
    fn update(&mut self, dt: Duration, elapsed: Duration);
    /// Detach everything from the scene.
    fn destroy(&mut self);

    fn camera(&self) -> &Camera;
    fn camera_mut(&mut self) -> &mut Camera;
    fn light(&self) -> &DirectionalLight;
    fn visible(&self) -> VisibleMeshes<'_>;
    fn chrome(&self) -> ChromeState;
}
